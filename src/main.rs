use std::process::ExitCode;

use clap::Parser;
use log::error;

use nellie_sim::report;
use nellie_sim::{Board, OverflowPolicy, SimulationConfig, WorkerPool};

/// Simulate the Nellie Bly board game across several player counts.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Overall game budget, split across player counts
    #[arg(long, default_value_t = nellie_sim::core::DEFAULT_TRIAL_BUDGET)]
    budget: u64,

    /// Largest turn or capture count tracked in histograms
    #[arg(long = "give-up", default_value_t = nellie_sim::core::DEFAULT_GIVE_UP_BOUND)]
    give_up: u32,

    /// Player counts to simulate
    #[arg(long, value_delimiter = ',', default_values_t = [1usize, 4, 16, 64, 256])]
    players: Vec<usize>,

    /// Worker threads per hardware thread
    #[arg(long, default_value_t = 2)]
    worker_multiplier: usize,

    /// Exact number of worker threads (overrides --worker-multiplier)
    #[arg(long)]
    workers: Option<usize>,

    /// Faces on the die
    #[arg(long, default_value_t = 6)]
    sides: u32,

    /// Seed for a reproducible run (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Abort instead of clamping when a game exceeds --give-up
    #[arg(long)]
    fail_on_overflow: bool,

    /// Rows in the popular squares table
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Print summaries as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        let mut config = SimulationConfig::new()
            .with_trial_budget(self.budget)
            .with_give_up_bound(self.give_up)
            .with_player_counts(self.players.clone())
            .with_worker_multiplier(self.worker_multiplier)
            .with_die_sides(self.sides)
            .with_top_squares(self.top);
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.fail_on_overflow {
            config = config.with_overflow(OverflowPolicy::Fail);
        }
        config
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let board = Board::nellie_bly();

    let pool = match WorkerPool::new(&board, cli.config()) {
        Ok(pool) => pool,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let summaries = match pool.run_all() {
        Ok(summaries) => summaries,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&summaries) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("failed to encode summaries: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", report::render(&board, &summaries, pool.config()));
    }
    ExitCode::SUCCESS
}
