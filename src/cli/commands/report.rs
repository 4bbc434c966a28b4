//! Report command - Summarize a saved Outcome Map

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::{StorageFormat, default_results_path},
        output::{format_number, print_kv, print_section, print_summary},
    },
    tictactoe::{Outcome, OutcomeMap},
};

#[derive(Parser, Debug)]
#[command(about = "Summarize a saved Outcome Map")]
pub struct ReportArgs {
    /// Outcome Map written by `stat`
    #[arg(default_value_os_t = default_results_path())]
    pub input: PathBuf,

    /// Storage format of the Outcome Map
    #[arg(long, short = 'f', value_enum, default_value_t = StorageFormat::Json)]
    pub format: StorageFormat,

    /// Break the histories down by length and outcome
    #[arg(long)]
    pub detailed: bool,
}

pub fn execute(args: ReportArgs) -> Result<()> {
    let outcomes = args
        .format
        .repository()
        .load(&args.input)
        .with_context(|| format!("loading outcome map from {}", args.input.display()))?;

    print_section(&format!("Outcome Map: {}", args.input.display()));
    print_summary(&outcomes.summary());

    if args.detailed {
        println!("\n  By history length:");
        for ((len, outcome), count) in length_breakdown(&outcomes) {
            print_kv(&format!("{len} moves, {outcome}"), &format_number(count));
        }
    }

    Ok(())
}

/// Count histories per (length, outcome), shortest first
pub fn length_breakdown(outcomes: &OutcomeMap) -> BTreeMap<(usize, Outcome), usize> {
    let mut counts = BTreeMap::new();
    for (key, &outcome) in outcomes {
        *counts.entry((key.len(), outcome)).or_default() += 1;
    }
    counts
}
