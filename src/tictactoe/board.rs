//! Board view of a move sequence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::types::Position;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Player who makes the move at `ply` (0-based). X opens.
    pub fn for_ply(ply: usize) -> Player {
        if ply.is_multiple_of(2) { Player::X } else { Player::O }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Physical layout of the ring labels, top row first.
pub const LAYOUT: [[u8; 3]; 3] = [[1, 2, 3], [8, 0, 4], [7, 6, 5]];

/// Cells claimed by each player after a move sequence.
///
/// Cells are indexed by ring label, not by row-major index; use [`LAYOUT`] to
/// walk them in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Place alternating X and O marks for each move, X first.
    pub fn from_moves(moves: &[Position]) -> Self {
        let mut board = Board::new();
        for (ply, pos) in moves.iter().enumerate() {
            board.cells[pos.index()] = Player::for_ply(ply).to_cell();
        }
        board
    }

    /// Get the cell at a position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one.
    ///
    /// X is checked first. Alternating play can never complete lines for both
    /// players, so the order only matters for hand-built boards.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Line held by the winner, if any
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        LineAnalyzer::completed_line(&self.cells, Player::X)
            .or_else(|| LineAnalyzer::completed_line(&self.cells, Player::O))
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, labels) in LAYOUT.iter().enumerate() {
            for &label in labels {
                write!(f, "{}", self.cells[label as usize].to_char())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(s: &str) -> Vec<Position> {
        Position::parse_sequence(s).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert!(board.cells.iter().all(|&c| c == Cell::Empty));
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_player_alternation() {
        let board = Board::from_moves(&moves("048"));
        assert_eq!(board.get(Position::CENTER), Cell::X);
        assert_eq!(board.get(Position::new(4).unwrap()), Cell::O);
        assert_eq!(board.get(Position::new(8).unwrap()), Cell::X);
        assert_eq!(Player::for_ply(3), Player::O);
    }

    #[test]
    fn test_win_detection() {
        // X: 1 2 3 across the top
        let board = Board::from_moves(&moves("18203"));
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.winning_line().map(|l| l[0].value()), Some(1));

        let board = Board::from_moves(&moves("1023846"));
        assert_eq!(board.winner(), None);

        // O: 3 0 7 on the anti-diagonal
        let board = Board::from_moves(&moves("10238467"));
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(
            board.winning_line().map(|l| l.map(|p| p.value())),
            Some([3, 0, 7])
        );
    }

    #[test]
    fn test_display_uses_physical_layout() {
        let board = Board::from_moves(&moves("1804"));
        let display = format!("{board}");
        assert_eq!(display, "X..\nOXO\n...");
    }
}
