//! Command-line launcher for Riddlekeys, a timed typing and riddle game.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rk",
    about = "Riddlekeys — type the words, solve the riddle, beat the clock",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal
    Play {
        /// Riddle catalog JSON file (default: built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Game rules JSON file (default: built-in rules)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Round length in seconds: 30, 45 or 60
        #[arg(short, long)]
        time: Option<u32>,

        /// RNG seed for a reproducible riddle order
        #[arg(long)]
        seed: Option<u64>,

        /// Leaderboard file
        #[arg(short, long, default_value = commands::DEFAULT_SCORES_FILE)]
        scores: PathBuf,

        /// Write logs to this file while playing
        #[arg(long)]
        log: Option<PathBuf>,
    },

    /// Validate a riddle catalog file and report every problem
    Check {
        /// Catalog JSON file
        path: PathBuf,
    },

    /// List the riddle sets in a catalog
    List {
        /// Riddle catalog JSON file (default: built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Show the leaderboard
    Scores {
        /// Leaderboard file
        #[arg(short, long, default_value = commands::DEFAULT_SCORES_FILE)]
        scores: PathBuf,

        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Also show this player's best score
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            catalog,
            config,
            time,
            seed,
            scores,
            log,
        } => logging::init_file(log.as_deref()).and_then(|()| {
            commands::play::run(&commands::play::PlayOptions {
                catalog,
                config,
                time,
                seed,
                scores,
            })
        }),
        Commands::Check { path } => {
            logging::init_stderr();
            commands::check::run(&path)
        }
        Commands::List { catalog } => {
            logging::init_stderr();
            commands::list::run(catalog.as_deref())
        }
        Commands::Scores { scores, top, name } => {
            logging::init_stderr();
            commands::scores::run(&scores, top, name.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
