//! Newtype wrappers for board positions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell of the 3x3 board.
///
/// Cells are labelled as a ring around the center rather than row by row:
///
/// ```text
/// 1 2 3
/// 8 0 4
/// 7 6 5
/// ```
///
/// `0` is the center, odd labels are corners and even labels are edges, so
/// every rotation of the board is an addition modulo 8 on the ring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// The center cell.
    pub const CENTER: Position = Position(0);

    /// Every position, center first, then the ring in clockwise order.
    pub const ALL: [Position; 9] = [
        Position(0),
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
    ];

    /// Create a new position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the position is >= 9.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value < 9 {
            Ok(Position(value as u8))
        } else {
            Err(crate::Error::InvalidPosition { position: value })
        }
    }

    /// Build a position from a label already known to be in range.
    pub(crate) const fn from_label(value: u8) -> Self {
        debug_assert!(value < 9);
        Position(value)
    }

    /// Get the inner value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Index usable for 9-element arrays.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn is_center(&self) -> bool {
        self.0 == 0
    }

    pub fn is_corner(&self) -> bool {
        !self.0.is_multiple_of(2)
    }

    pub fn is_edge(&self) -> bool {
        self.0 != 0 && self.0.is_multiple_of(2)
    }

    /// Parse a digit string such as `"736"` into a move sequence.
    ///
    /// Whitespace and commas are skipped so `"7, 3, 6"` parses too. Repeated
    /// positions are not rejected here; [`crate::tictactoe::Game`] owns that
    /// rule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for a digit above 8 and
    /// [`crate::Error::InvalidCharacter`] for any other character.
    pub fn parse_sequence(s: &str) -> Result<Vec<Position>, crate::Error> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| {
                c.to_digit(10)
                    .ok_or(crate::Error::InvalidCharacter { character: c })
                    .and_then(|d| Position::new(d as usize))
            })
            .collect()
    }
}

impl TryFrom<u8> for Position {
    type Error = crate::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Position::new(value as usize)
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0 as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render a move sequence as its digit string, one character per position.
pub fn digits(moves: &[Position]) -> String {
    moves.iter().map(|p| char::from(b'0' + p.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert!(Position::new(8).is_ok());
        assert!(Position::new(9).is_err());
        assert!(Position::try_from(42u8).is_err());
    }

    #[test]
    fn classifies_cells() {
        assert!(Position::CENTER.is_center());
        for pos in Position::ALL.iter().skip(1) {
            assert_ne!(pos.is_corner(), pos.is_edge(), "{pos}");
        }
        assert!(Position::ALL[1].is_corner());
        assert!(Position::ALL[2].is_edge());
    }

    #[test]
    fn parses_digit_strings() {
        let moves = Position::parse_sequence("7, 3 6").unwrap();
        assert_eq!(digits(&moves), "736");
        assert!(matches!(
            Position::parse_sequence("79"),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
        assert!(matches!(
            Position::parse_sequence("7a"),
            Err(crate::Error::InvalidCharacter { character: 'a' })
        ));
    }
}
