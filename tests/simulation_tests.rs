//! End-to-end tests for the worker pool and merged summaries.

use nellie_sim::{Board, Die, GameEngine, GameRng, SimulationConfig, TrialSummary, WorkerPool};

/// Exact expected winner turns for a lone player, by value iteration over
/// board positions. With one player there are no captures and negative skip
/// directives hit nobody, so the position is the whole state.
fn expected_single_player_turns(board: &Board, sides: u32) -> f64 {
    let n = board.len();
    let mut expected = vec![0.0f64; n];
    loop {
        let mut delta = 0.0f64;
        for from in 0..board.finish() {
            let mut total = 0.0;
            for roll in 1..=sides as usize {
                let landing = from + roll;
                total += if landing >= n {
                    expected[from]
                } else {
                    let rest = (landing as i64 + i64::from(board[landing].offset)) as usize;
                    if rest == board.finish() {
                        0.0
                    } else {
                        f64::from(board[rest].turns.max(0)) + expected[rest]
                    }
                };
            }
            let next = 1.0 + total / f64::from(sides);
            delta = delta.max((next - expected[from]).abs());
            expected[from] = next;
        }
        if delta < 1e-12 {
            return expected[0];
        }
    }
}

/// 10,000 seeded single-player games land on the analytic mean.
#[test]
fn test_single_player_mean_matches_baseline() {
    let board = Board::nellie_bly();
    let baseline = expected_single_player_turns(&board, 6);
    assert!((baseline - 31.7277).abs() < 1e-3, "baseline drifted: {}", baseline);

    let config = SimulationConfig::new()
        .with_give_up_bound(1000)
        .with_workers(4)
        .with_seed(20_240_601);
    let pool = WorkerPool::new(&board, config).unwrap();
    let summary = pool.run(1, 10_000).unwrap();

    assert_eq!(summary.total_games, 10_000);
    assert_eq!(summary.clamped_turns, 0);
    assert!((summary.turns.mean - summary.mean_turns()).abs() < 1e-9);

    let standard_error = summary.turns.std_dev / (summary.total_games as f64).sqrt();
    let tolerance = 5.0 * standard_error;
    assert!(
        (summary.turns.mean - baseline).abs() < tolerance,
        "mean {} vs baseline {} (tolerance {})",
        summary.turns.mean,
        baseline,
        tolerance
    );
    // Single-player games never capture anyone.
    assert_eq!(summary.captures.max, 0);
}

/// A single seeded worker plays exactly the games a lone engine would,
/// so every visit and turn is accounted for.
#[test]
fn test_popularity_counts_every_visit() {
    let board = Board::nellie_bly();
    let seed = 77;
    let trials = 300;
    let players = 3;

    let config = SimulationConfig::new().with_workers(1).with_seed(seed);
    let summary = WorkerPool::new(&board, config).unwrap().run(players, trials).unwrap();

    // Worker 0's die is the first fork of the seed.
    let mut die = Die::new(6, GameRng::new(seed).fork());
    let engine = GameEngine::new(&board);
    let mut visits = vec![0u64; board.len()];
    let mut total_turns = 0u64;
    for _ in 0..trials {
        let result = engine.play_game(players, &mut die).unwrap();
        total_turns += u64::from(result.winner_turns);
        for square in result.visits {
            visits[square] += 1;
        }
    }

    let popular_sum: u64 = summary.popular.iter().map(|e| e.count).sum();
    assert_eq!(popular_sum, visits.iter().sum::<u64>());
    assert_eq!(summary.total_visits, popular_sum);
    assert_eq!(summary.total_turns, total_turns);
    for entry in &summary.popular {
        assert_eq!(entry.count, visits[entry.square]);
    }
}

/// Many workers still account for every game exactly once.
#[test]
fn test_many_workers_merge_exact_totals() {
    let board = Board::nellie_bly();
    let config = SimulationConfig::new().with_workers(16).with_seed(5);
    let pool = WorkerPool::new(&board, config).unwrap();

    let summary = pool.run(4, 1_000).unwrap();
    assert_eq!(summary.total_games, 1_000);
    assert_eq!(summary.turn_histogram.total_weight(), 1_000);
    assert_eq!(summary.capture_histogram.total_weight(), 4_000);
    assert_eq!(summary.popular.len(), board.len());
}

/// More workers than tickets is fine; idle workers fold empty totals.
#[test]
fn test_more_workers_than_games() {
    let board = Board::nellie_bly();
    let config = SimulationConfig::new().with_workers(8).with_seed(1);
    let summary = WorkerPool::new(&board, config).unwrap().run(2, 3).unwrap();

    assert_eq!(summary.total_games, 3);
    assert!(summary.min_turns > 0);
}

/// Entropy-seeded runs work without a seed.
#[test]
fn test_unseeded_run() {
    let board = Board::nellie_bly();
    let config = SimulationConfig::new().with_workers(2);
    let summary = WorkerPool::new(&board, config).unwrap().run(1, 50).unwrap();
    assert_eq!(summary.total_games, 50);
}

/// Budget splits and report order follow the configured player counts.
#[test]
fn test_run_all_follows_configuration() {
    let board = Board::nellie_bly();
    let config = SimulationConfig::new()
        .with_trial_budget(1024)
        .with_player_counts(vec![1, 4, 16])
        .with_workers(4)
        .with_seed(3);
    let summaries = WorkerPool::new(&board, config).unwrap().run_all().unwrap();

    let shape: Vec<_> = summaries.iter().map(|s| (s.players, s.total_games)).collect();
    assert_eq!(shape, vec![(1, 1024), (4, 256), (16, 64)]);

    for s in &summaries {
        let t = &s.turns;
        assert!(t.min <= t.p25 && t.p25 <= t.p50 && t.p50 <= t.p75);
        assert!(t.p75 <= t.p90 && t.p90 <= t.p95 && t.p95 <= t.p99 && t.p99 <= t.max);
        assert_eq!(t.min, s.min_turns);
        assert_eq!(t.max, s.max_turns);
    }
}

/// Summaries survive a JSON round trip for downstream tooling.
#[test]
fn test_summaries_serialize() {
    let board = Board::nellie_bly();
    let config = SimulationConfig::new().with_workers(2).with_seed(8);
    let summary = WorkerPool::new(&board, config).unwrap().run(2, 40).unwrap();

    let json = serde_json::to_string(&summary).unwrap();
    let back: TrialSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back.total_games, summary.total_games);
    assert_eq!(back.turn_histogram, summary.turn_histogram);
    assert_eq!(back.popular, summary.popular);
}
