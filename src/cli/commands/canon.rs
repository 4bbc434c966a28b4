//! Canon command - Show the canonical form of a move sequence

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section, render_board},
    identifiers::HistoryKey,
    tictactoe::{Board, CanonicalForm, Symmetry},
    types::{Position, digits},
};

#[derive(Parser, Debug)]
#[command(about = "Show the canonical form of a move sequence")]
pub struct CanonArgs {
    /// Move sequence as position digits, e.g. 736
    pub moves: String,

    /// List the image under every symmetry operator
    #[arg(long)]
    pub all: bool,
}

pub fn execute(args: CanonArgs) -> Result<()> {
    let key: HistoryKey = args
        .moves
        .trim()
        .parse()
        .with_context(|| format!("parsing move sequence '{}'", args.moves))?;
    let moves = key.positions();
    let canonical = CanonicalForm::of(&moves);

    print_section("Canonical Form");
    print_kv("moves", key.as_str());
    print_kv("canonical", canonical.key().as_str());
    print_kv("symmetry", &canonical.symmetry.to_string());

    println!("\nOriginal:");
    print!("{}", render_board(&Board::from_moves(&moves)));
    println!("\nCanonical:");
    print!("{}", render_board(&Board::from_moves(&canonical.moves)));

    if args.all {
        println!("\nImages under each operator:");
        for row in image_rows(&images(&canonical, &moves)) {
            println!("{row}");
        }
    }

    Ok(())
}

/// Image of `moves` under every operator, flagging the one canonicalization picked
pub fn images(canonical: &CanonicalForm, moves: &[Position]) -> Vec<(Symmetry, String, bool)> {
    Symmetry::ALL
        .into_iter()
        .map(|symmetry| {
            let image = digits(&symmetry.transform_sequence(moves));
            (symmetry, image, symmetry == canonical.symmetry)
        })
        .collect()
}

/// One aligned line per image: code, name, image digits and a marker on the chosen one
pub fn image_rows(images: &[(Symmetry, String, bool)]) -> Vec<String> {
    let width = Symmetry::ALL
        .iter()
        .map(|symmetry| symmetry.name().len())
        .max()
        .unwrap_or_default();
    images
        .iter()
        .map(|(symmetry, image, chosen)| {
            let marker = if *chosen { "  <- canonical" } else { "" };
            format!(
                "  {:>2}  {:width$}  {image}{marker}",
                symmetry.code(),
                symmetry.name()
            )
        })
        .collect()
}
