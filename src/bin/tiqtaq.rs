//! tiqtaq CLI - Tic-tac-toe game histories reduced by board symmetry
//!
//! This CLI provides:
//! - Interactive two-player games on the terminal
//! - Exhaustive enumeration of every game into an Outcome Map
//! - Summaries of saved Outcome Maps
//! - Canonical forms of individual move sequences

use anyhow::Result;
use clap::{Parser, Subcommand};
use tiqtaq::cli::{
    commands::{canon, play, report, stat},
    config::CommonConfig,
};

#[derive(Parser)]
#[command(name = "tiqtaq")]
#[command(version, about = "Tic-tac-toe histories reduced by board symmetry", long_about = None)]
struct Cli {
    /// Log debug output to stderr (overridden by TIQTAQ_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a two-player game on the keyboard
    Play(play::PlayArgs),

    /// Enumerate every game and save the Outcome Map
    Stat(stat::StatArgs),

    /// Summarize a saved Outcome Map
    Report(report::ReportArgs),

    /// Show the canonical form of a move sequence
    Canon(canon::CanonArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    CommonConfig {
        verbose: cli.verbose,
    }
    .init_tracing();

    match cli.command {
        Commands::Play(args) => play::execute(args),
        Commands::Stat(args) => stat::execute(args),
        Commands::Report(args) => report::execute(args),
        Commands::Canon(args) => canon::execute(args),
    }
}
