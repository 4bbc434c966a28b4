//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};
use crate::types::Position;

const fn line(a: u8, b: u8, c: u8) -> [Position; 3] {
    [
        Position::from_label(a),
        Position::from_label(b),
        Position::from_label(c),
    ]
}

/// Winning lines in ring labels (see [`Position`]).
///
/// The center sits on 4 lines, every corner on 3 and every edge on 2.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    line(1, 2, 3),
    line(8, 0, 4),
    line(7, 6, 5), // rows
    line(1, 8, 7),
    line(2, 0, 6),
    line(3, 4, 5), // columns
    line(1, 0, 5),
    line(3, 0, 7), // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First winning line fully held by the player, in [`WINNING_LINES`] order
    pub fn completed_line(cells: &[Cell; 9], player: Player) -> Option<[Position; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|pos| cells[pos.index()] == target))
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::completed_line(cells, player).is_some()
    }
}
