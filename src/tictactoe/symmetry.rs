//! D4 symmetry group operations for move-sequence canonicalization
//!
//! With ring labels (see [`Position`]) every symmetry of the square fixes the
//! center and acts on the ring `1..=8` either as a rotation (`i -> i + k`) or
//! as the diagonal reflection (`i -> 10 - i`) followed by a rotation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// A primitive step of a symmetry operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Mirror across the 1-0-5 diagonal.
    Reflect,
    /// Rotate clockwise by `k` ring steps (2 steps = 90 degrees).
    Rotate(u8),
}

impl Step {
    fn apply(self, label: u8) -> u8 {
        if label == 0 {
            return 0;
        }
        match self {
            Step::Reflect => (10 - label - 1) % 8 + 1,
            Step::Rotate(k) => (label + k - 1) % 8 + 1,
        }
    }
}

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symmetry {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    /// Mirror across the 1-0-5 diagonal
    Diagonal,
    /// Diagonal mirror, then 90 degrees: swaps left and right columns
    Vertical,
    /// Diagonal mirror, then 180 degrees: mirror across the 3-0-7 diagonal
    AntiDiagonal,
    /// Diagonal mirror, then 270 degrees: swaps top and bottom rows
    Horizontal,
}

impl Symmetry {
    /// All 8 operators in canonicalization order: identity, rotations,
    /// reflections.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::Diagonal,
        Symmetry::Vertical,
        Symmetry::AntiDiagonal,
        Symmetry::Horizontal,
    ];

    /// Primitive steps, applied left to right.
    pub fn steps(self) -> &'static [Step] {
        match self {
            Symmetry::Identity => &[],
            Symmetry::Rotate90 => &[Step::Rotate(2)],
            Symmetry::Rotate180 => &[Step::Rotate(4)],
            Symmetry::Rotate270 => &[Step::Rotate(6)],
            Symmetry::Diagonal => &[Step::Reflect],
            Symmetry::Vertical => &[Step::Reflect, Step::Rotate(2)],
            Symmetry::AntiDiagonal => &[Step::Reflect, Step::Rotate(4)],
            Symmetry::Horizontal => &[Step::Reflect, Step::Rotate(6)],
        }
    }

    /// Short operator code: `e`, `a`, `b`, `c`, `d`, `da`, `db`, `dc`.
    pub fn code(self) -> &'static str {
        match self {
            Symmetry::Identity => "e",
            Symmetry::Rotate90 => "a",
            Symmetry::Rotate180 => "b",
            Symmetry::Rotate270 => "c",
            Symmetry::Diagonal => "d",
            Symmetry::Vertical => "da",
            Symmetry::AntiDiagonal => "db",
            Symmetry::Horizontal => "dc",
        }
    }

    /// Human-readable name, without the code.
    pub fn name(self) -> &'static str {
        match self {
            Symmetry::Identity => "identity",
            Symmetry::Rotate90 => "rotate 90",
            Symmetry::Rotate180 => "rotate 180",
            Symmetry::Rotate270 => "rotate 270",
            Symmetry::Diagonal => "reflect diagonal",
            Symmetry::Vertical => "reflect vertical",
            Symmetry::AntiDiagonal => "reflect anti-diagonal",
            Symmetry::Horizontal => "reflect horizontal",
        }
    }

    pub fn is_reflection(self) -> bool {
        self.steps().first() == Some(&Step::Reflect)
    }

    /// Apply transform to a single position
    pub fn transform_position(self, pos: Position) -> Position {
        let label = self
            .steps()
            .iter()
            .fold(pos.value(), |label, step| step.apply(label));
        Position::from_label(label)
    }

    /// Apply transform to every position of a move sequence
    pub fn transform_sequence(self, moves: &[Position]) -> Vec<Position> {
        moves.iter().map(|&pos| self.transform_position(pos)).collect()
    }

    /// Permutation table: entry `i` is the image of position `i`.
    pub fn permutation(self) -> [Position; 9] {
        Position::ALL.map(|pos| self.transform_position(pos))
    }

    /// Get the inverse transform
    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rotate90 => Symmetry::Rotate270,
            Symmetry::Rotate270 => Symmetry::Rotate90,
            // Every reflection, the identity and the half turn are involutions.
            other => other,
        }
    }

    /// Composite operator: apply `self`, then `next`.
    pub fn then(self, next: Symmetry) -> Symmetry {
        let target = Position::ALL.map(|pos| next.transform_position(self.transform_position(pos)));
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.permutation() == target)
            .unwrap_or_else(|| unreachable!("D4 is closed under composition"))
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

impl FromStr for Symmetry {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        if let Some(symmetry) = Self::ALL.into_iter().find(|sym| sym.code() == code) {
            return Ok(symmetry);
        }
        // rotate-then-reflect spellings of the same operators
        match code.as_str() {
            "ad" => Ok(Symmetry::Horizontal),
            "bd" => Ok(Symmetry::AntiDiagonal),
            "cd" => Ok(Symmetry::Vertical),
            _ => Err(crate::Error::UnknownSymmetry {
                code: s.to_string(),
                expected: Self::ALL.map(Symmetry::code).join(", "),
            }),
        }
    }
}
