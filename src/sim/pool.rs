//! Parallel trial runner.
//!
//! Workers are scoped OS threads. Each one owns a die, a player table, and a
//! private `Accumulators`, and claims games from a shared atomic ticket
//! counter until the batch is exhausted. Nothing shared is written while a
//! game runs; each worker takes the aggregation lock exactly once, to fold
//! its totals in before exiting.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering::Relaxed};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Instant;

use log::{debug, info, warn};

use crate::board::Board;
use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};
use crate::core::player::PlayerMap;
use crate::core::rng::{Die, GameRng};
use crate::game::GameEngine;

use super::accumulators::Accumulators;
use super::summary::TrialSummary;

/// Runs batches of games across worker threads.
#[derive(Debug)]
pub struct WorkerPool<'a> {
    board: &'a Board,
    config: SimulationConfig,
}

impl<'a> WorkerPool<'a> {
    /// Create a pool. The config and board are validated here, before any
    /// worker exists.
    pub fn new(board: &'a Board, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        board.check_finish_reachable(config.die_sides)?;
        Ok(Self { board, config })
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every configured player count in order.
    pub fn run_all(&self) -> Result<Vec<TrialSummary>> {
        self.config
            .player_counts
            .iter()
            .map(|&players| {
                let summary = self.run(players, self.config.trials_for(players))?;
                info!(
                    "{} games with {} players took {} turns ({:.3} avg, {:.3} stdev) in {:.2}s",
                    summary.total_games,
                    summary.players,
                    summary.total_turns,
                    summary.turns.mean,
                    summary.turns.std_dev,
                    summary.elapsed_secs,
                );
                if summary.clamped_turns > 0 {
                    warn!(
                        "{} games with {} players ran past {} turns and were clamped",
                        summary.clamped_turns, players, self.config.give_up_bound
                    );
                }
                if summary.clamped_captures > 0 {
                    warn!(
                        "{} players in {}-player games were captured more than {} times and were clamped",
                        summary.clamped_captures, players, self.config.give_up_bound
                    );
                }
                Ok(summary)
            })
            .collect()
    }

    /// Play `trials` games with `player_count` players and merge the results.
    pub fn run(&self, player_count: usize, trials: u64) -> Result<TrialSummary> {
        if player_count == 0 {
            return Err(SimError::InvalidPlayerCount(player_count));
        }

        // Seed every die up front so entropy failures abort before any work starts.
        let dice = self.worker_dice()?;
        let workers = dice.len();
        info!("simulating {} games with {} players on {} workers", trials, player_count, workers);

        let start = Instant::now();
        let batch = Batch {
            player_count,
            trials,
            tickets: AtomicU64::new(0),
            abort: AtomicBool::new(false),
            global: Mutex::new(Accumulators::new(self.config.give_up_bound, self.board.len())),
        };

        let outcomes: Vec<Result<()>> = thread::scope(|s| {
            let handles: Vec<_> = dice
                .into_iter()
                .enumerate()
                .map(|(worker, die)| {
                    let batch = &batch;
                    s.spawn(move || {
                        let outcome = self.work(worker, die, batch);
                        if outcome.is_err() {
                            batch.abort.store(true, Relaxed);
                        }
                        outcome
                    })
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(worker, handle)| handle.join().unwrap_or(Err(SimError::WorkerPanicked(worker))))
                .collect()
        });
        outcomes.into_iter().collect::<Result<()>>()?;

        // All workers have joined; the lock has no other holders.
        let totals = batch.global.into_inner().unwrap_or_else(PoisonError::into_inner);
        Ok(TrialSummary::from_accumulators(
            player_count,
            totals,
            start.elapsed().as_secs_f64(),
        ))
    }

    /// One die per worker: forked from the configured seed, or from OS entropy.
    fn worker_dice(&self) -> Result<Vec<Die>> {
        let workers = self.config.worker_count();
        let sides = self.config.die_sides;
        match self.config.seed {
            Some(seed) => {
                let mut root = GameRng::new(seed);
                Ok((0..workers).map(|_| Die::new(sides, root.fork())).collect())
            }
            None => (0..workers).map(|_| Die::from_entropy(sides)).collect(),
        }
    }

    fn work(&self, worker: usize, mut die: Die, batch: &Batch) -> Result<()> {
        let engine = GameEngine::new(self.board);
        let mut players = PlayerMap::with_default(batch.player_count);
        let mut local = Accumulators::new(self.config.give_up_bound, self.board.len());

        // A failed worker stops the others early; their partial totals are discarded.
        while !batch.abort.load(Relaxed) && batch.tickets.fetch_add(1, Relaxed) < batch.trials {
            let winner = engine.play_into(&mut players, &mut die, |square| local.visit(square));
            local.record_game(
                players[winner].turns_taken,
                players.values().map(|p| p.captured),
                self.config.overflow,
            )?;
        }

        debug!("worker {} folding {} games", worker, local.games);
        batch
            .global
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(&local);
        Ok(())
    }
}

/// State shared by the workers of one `run`.
struct Batch {
    player_count: usize,
    trials: u64,
    /// Next ticket to hand out; values at or past `trials` mean the batch is done.
    tickets: AtomicU64,
    abort: AtomicBool,
    global: Mutex<Accumulators>,
}
