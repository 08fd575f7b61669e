//! Benchmarks for the single-game hot loop and worker pool.
//!
//! Run with: cargo bench --bench play_game

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nellie_sim::{Accumulators, Board, Die, GameEngine, OverflowPolicy, PlayerMap, SimulationConfig, WorkerPool};

fn bench_play_into(c: &mut Criterion) {
    let board = Board::nellie_bly();
    let engine = GameEngine::new(&board);
    let mut group = c.benchmark_group("play_into");

    for player_count in [1usize, 4, 16, 64] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(player_count), &player_count, |b, &n| {
            let mut players = PlayerMap::with_default(n);
            let mut die = Die::seeded(6, 42);
            let mut acc = Accumulators::new(200, board.len());
            b.iter(|| {
                let winner = engine.play_into(&mut players, &mut die, |square| acc.visit(square));
                black_box(winner)
            });
        });
    }
    group.finish();
}

fn bench_record_game(c: &mut Criterion) {
    let captures: Vec<u32> = (0..256).map(|i| i % 7).collect();
    c.bench_function("record_game_256_players", |b| {
        let mut acc = Accumulators::new(200, 74);
        b.iter(|| {
            acc.record_game(black_box(37), captures.iter().copied(), OverflowPolicy::Clamp)
                .unwrap();
        });
    });
}

fn bench_pool(c: &mut Criterion) {
    let board = Board::nellie_bly();
    let config = SimulationConfig::new().with_workers(4).with_seed(7);
    let pool = WorkerPool::new(&board, config).unwrap();

    let mut group = c.benchmark_group("worker_pool");
    group.sample_size(10);
    group.throughput(Throughput::Elements(4096));
    group.bench_function("4_players_4096_games", |b| {
        b.iter(|| black_box(pool.run(4, 4096).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_play_into, bench_record_game, bench_pool);
criterion_main!(benches);
