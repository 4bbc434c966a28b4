//! Play command - Interactive two-player game on stdin

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;
use tracing::debug;

use crate::{
    cli::output::render_board,
    tictactoe::{Game, LAYOUT},
    types::Position,
};

/// Keyboard layout mirroring the board, row by row
const KEYS: [[char; 3]; 3] = [['q', 'w', 'e'], ['a', 's', 'd'], ['z', 'x', 'c']];

#[derive(Parser, Debug)]
#[command(about = "Play an interactive two-player game")]
pub struct PlayArgs {
    /// Also draw the canonical board after every move
    #[arg(long)]
    pub show_canonical: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_game(stdin.lock(), stdout.lock(), args.show_canonical)?;
    Ok(())
}

/// Map an input token to the Position its key sits over.
///
/// The token is trimmed and lowercased and must be exactly one layout key.
pub fn key_to_position(token: &str) -> Option<Position> {
    let mut chars = token.trim().chars();
    let key = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    KEYS.iter()
        .zip(LAYOUT.iter())
        .flat_map(|(keys, labels)| keys.iter().zip(labels.iter()))
        .find(|(k, _)| **k == key)
        .map(|(_, &label)| Position::from_label(label))
}

/// Drive one game from `input`, writing prompts and boards to `output`.
///
/// Each line is one turn. Lines that are not a single layout key, and
/// rejected moves, are ignored and the same player is prompted again.
pub fn run_game<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    show_canonical: bool,
) -> Result<Game> {
    let mut game = Game::new();
    let mut lines = input.lines();

    while let Some(player) = game.to_move() {
        write!(output, "{player} to move: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            bail!("input ended before the game finished");
        };

        let line = line?;
        let Some(pos) = key_to_position(&line) else {
            debug!(input = %line.trim(), "ignoring unknown key");
            continue;
        };
        match game.add_move(pos) {
            Ok(()) => {
                writeln!(output)?;
                write!(output, "{}", render_board(game.board()))?;
                if show_canonical {
                    let canonical = game.canonical();
                    writeln!(output, "canonical ({}):", canonical.symmetry)?;
                    write!(output, "{}", render_board(&game.canonical_board()))?;
                }
            }
            Err(e) => debug!(%pos, error = %e, "ignoring move"),
        }
    }

    if let (Some(outcome), Some(history)) = (game.outcome(), game.history()) {
        writeln!(output, "{outcome}")?;
        writeln!(output, "history: {history}")?;
    }
    Ok(game)
}
