//! Canonical form of a move sequence under the D4 symmetry group

use serde::{Deserialize, Serialize};

use super::symmetry::Symmetry;
use crate::{identifiers::HistoryKey, types::Position};

/// Result of canonicalizing a move sequence.
///
/// `moves` is the lexicographically smallest image of the input under the 8
/// symmetries, and `symmetry` is the first operator in [`Symmetry::ALL`] order
/// that produces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalForm {
    pub symmetry: Symmetry,
    pub moves: Vec<Position>,
}

impl CanonicalForm {
    /// Find the canonical form of a move sequence.
    ///
    /// Operators are scanned in [`Symmetry::ALL`] order and a candidate only
    /// replaces the best so far when it is strictly smaller, so ties keep the
    /// earliest operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiqtaq::{CanonicalForm, Position, Symmetry};
    ///
    /// let moves = Position::parse_sequence("736").unwrap();
    /// let canonical = CanonicalForm::of(&moves);
    /// assert_eq!(canonical.symmetry, Symmetry::Horizontal);
    /// assert_eq!(canonical.key().as_str(), "152");
    /// ```
    pub fn of(moves: &[Position]) -> Self {
        let mut best = CanonicalForm {
            symmetry: Symmetry::Identity,
            moves: moves.to_vec(),
        };

        for symmetry in Symmetry::ALL.into_iter().skip(1) {
            let candidate = symmetry.transform_sequence(moves);
            if candidate < best.moves {
                best = CanonicalForm {
                    symmetry,
                    moves: candidate,
                };
            }
        }

        best
    }

    /// Digit-string key for the canonical moves
    pub fn key(&self) -> HistoryKey {
        HistoryKey::from_moves(&self.moves)
    }

    /// Map a position from original coordinates to canonical coordinates
    pub fn map_to_canonical(&self, original: Position) -> Position {
        self.symmetry.transform_position(original)
    }

    /// Map a position from canonical coordinates back to original coordinates
    pub fn map_to_original(&self, canonical: Position) -> Position {
        self.symmetry.inverse().transform_position(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(s: &str) -> CanonicalForm {
        CanonicalForm::of(&Position::parse_sequence(s).unwrap())
    }

    #[test]
    fn test_known_canonical_forms() {
        let cases = [
            ("35", "13", Symmetry::Rotate270),
            ("736", "152", Symmetry::Horizontal),
            ("1850", "1250", Symmetry::Diagonal),
            ("0", "0", Symmetry::Identity),
            ("105", "105", Symmetry::Identity),
            ("501", "105", Symmetry::Rotate180),
        ];

        for (input, expected, symmetry) in cases {
            let form = canonical(input);
            assert_eq!(form.key(), expected, "canonical form of {input}");
            assert_eq!(form.symmetry, symmetry, "operator for {input}");
        }
    }

    #[test]
    fn test_single_moves_collapse_to_three_classes() {
        assert_eq!(canonical("0").key(), "0");
        for corner in ["1", "3", "5", "7"] {
            assert_eq!(canonical(corner).key(), "1", "corner {corner}");
        }
        for edge in ["2", "4", "6", "8"] {
            assert_eq!(canonical(edge).key(), "2", "edge {edge}");
        }
    }

    #[test]
    fn test_empty_sequence_is_its_own_form() {
        let form = CanonicalForm::of(&[]);
        assert_eq!(form.symmetry, Symmetry::Identity);
        assert!(form.moves.is_empty());
    }

    #[test]
    fn test_move_mapping_round_trip() {
        let form = canonical("736");
        for pos in Position::ALL {
            assert_eq!(form.map_to_original(form.map_to_canonical(pos)), pos);
        }
    }
}
