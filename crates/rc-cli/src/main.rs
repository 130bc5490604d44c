//! CLI frontend for the roomcrawl maze game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use rc_core::GameConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "roomcrawl",
    about = "roomcrawl: find your way from the start room to the end room",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log graph construction and every move to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new set of rooms and play through them on stdin/stdout
    Play {
        /// RNG seed for a reproducible room graph
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory for the room files (default: roomcrawl.rooms.<pid>)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Keep the room files after the game ends
        #[arg(short, long)]
        keep: bool,
    },

    /// Load a directory of room files and verify it forms a valid graph
    Check {
        /// Directory containing room_<id>.json files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play { seed, dir, keep } => {
            let mut config = GameConfig::default().with_keep_rooms(keep);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if let Some(dir) = dir {
                config = config.with_rooms_dir(dir);
            }
            commands::play::run(&config)
        }
        Commands::Check { dir } => commands::check::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Send logs to stderr so stdout carries only the game. `RUST_LOG` wins
/// over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
