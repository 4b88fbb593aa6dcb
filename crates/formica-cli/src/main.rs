//! Formica CLI - headless runner for the ant colony simulation.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formica")]
#[command(author, version, about = "Formica - Ant colony simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter formica.toml
    Init {
        /// Target directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Run the simulation headless
    Run {
        /// Number of ticks to run
        #[arg(short, long, default_value = "1000")]
        ticks: u64,

        /// Real seconds per tick
        #[arg(short, long, default_value = "0.016")]
        delta: f64,

        /// Speed multiplier (clamped to the configured range)
        #[arg(short, long, default_value = "1.0")]
        speed: f64,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Config file (default: nearest formica.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the final statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration as TOML
    Config,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Run { ticks, delta, speed, seed, config, json } => {
            commands::run::run(commands::run::RunOptions {
                ticks,
                delta,
                speed,
                seed,
                config,
                json,
                verbose: cli.verbose,
            })
        }
        Commands::Config => commands::show_config::run(),
    }
}
