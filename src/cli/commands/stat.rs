//! Stat command - Enumerate every game and save the Outcome Map

use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::{
    cli::{
        config::{StorageFormat, default_results_path},
        output::{
            create_enumeration_progress, format_number, print_kv, print_section, print_summary,
        },
    },
    tictactoe::{EnumerationConfig, TOTAL_GAMES},
};

#[derive(Parser, Debug)]
#[command(about = "Enumerate every game and save the outcome of each canonical history")]
pub struct StatArgs {
    /// Where to write the Outcome Map
    #[arg(long, short = 'o', default_value_os_t = default_results_path())]
    pub output: PathBuf,

    /// Storage format of the Outcome Map
    #[arg(long, short = 'f', value_enum, default_value_t = StorageFormat::Json)]
    pub format: StorageFormat,

    /// Run the three first-move classes one after another
    #[arg(long)]
    pub sequential: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: StatArgs) -> Result<()> {
    let mut config = EnumerationConfig::new().with_parallel(!args.sequential);
    if !args.no_progress {
        config = config.with_progress(create_enumeration_progress(TOTAL_GAMES as u64)?);
    }

    let start = Instant::now();
    let result = config.run();
    let elapsed = start.elapsed();
    if let Some(progress) = &config.progress {
        progress.finish_and_clear();
    }

    args.format
        .repository()
        .save(&result.outcomes, &args.output)
        .with_context(|| format!("saving outcome map to {}", args.output.display()))?;
    info!(path = %args.output.display(), "outcome map saved");

    print_section("Enumeration");
    print_kv("elapsed", &format!("{:.2}s", elapsed.as_secs_f64()));
    print_kv("games played", &format_number(result.games_played));
    print_kv("saved to", &args.output.display().to_string());
    print_summary(&result.outcomes.summary());

    Ok(())
}
