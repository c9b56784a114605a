use clap::{Parser, Subcommand};
use rand::prelude::*;
use std::time::{SystemTime, UNIX_EPOCH};

mod simulation;
mod strategy;

use strategy::PlanterStrategy;

/// Plays batches of Dandelion games to see how often the planter can cover the board.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate win rates for a planter strategy against a random wind
    Run {
        /// Number of games to play
        #[arg(short, long, default_value_t = 100_000)]
        games: u32,

        #[arg(long, value_enum, default_value_t = PlanterStrategy::Random)]
        strategy: PlanterStrategy,
    },
    /// Search random games until one ends with every cell covered
    Perfect {
        /// Give up after this many games
        #[arg(long, default_value_t = 10_000_000)]
        max_attempts: u64,
    },
}

fn init_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    use tracing_subscriber::filter::LevelFilter;

    let level = match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter())?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    match args.command {
        Command::Run { games, strategy } => {
            println!("Simulating Win Probability...");
            let report = simulation::run(strategy, games, &mut rng);
            println!("{report}");
        }
        Command::Perfect { max_attempts } => {
            println!("Searching for a PERFECT GAME sequence...");
            match simulation::find_perfect_game(&mut rng, max_attempts) {
                Some((attempts, game)) => {
                    println!("\nFOUND PERFECT GAME after {attempts} attempts!");
                    println!("Here is the winning sequence (1-based coordinates, as in the game log):");
                    for turn in &game.turns {
                        println!("{turn}");
                    }
                }
                None => {
                    anyhow::bail!("no perfect game found in {max_attempts} attempts (seed {seed})")
                }
            }
        }
    }

    Ok(())
}
