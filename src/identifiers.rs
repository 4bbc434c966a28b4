//! Identifier type for canonical game histories.

use std::{borrow::Borrow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::types::{Position, digits};

/// Outcome Map key: the canonical move sequence of a finished game rendered as
/// digits, one character per position (`"12807"`).
///
/// Keys are validated on construction, so every key decodes back into a
/// sequence of 1 to 9 distinct positions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HistoryKey(String);

impl HistoryKey {
    /// Render a move sequence as a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiqtaq::{HistoryKey, Position};
    ///
    /// let moves = Position::parse_sequence("152").unwrap();
    /// assert_eq!(HistoryKey::from_moves(&moves).as_str(), "152");
    /// ```
    pub fn from_moves(moves: &[Position]) -> Self {
        Self(digits(moves))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the key back into its move sequence.
    pub fn positions(&self) -> Vec<Position> {
        self.0
            .bytes()
            .map(|b| Position::from_label(b - b'0'))
            .collect()
    }

    /// Number of moves in the history.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate(key: &str) -> Result<(), crate::Error> {
        let invalid = |reason: &str| crate::Error::InvalidHistoryKey {
            key: key.to_string(),
            reason: reason.to_string(),
        };

        if key.is_empty() || key.len() > 9 {
            return Err(invalid("expected 1 to 9 digits"));
        }

        let mut seen = [false; 9];
        for c in key.chars() {
            let digit = match c {
                '0'..='8' => c as usize - '0' as usize,
                _ => return Err(invalid(&format!("'{c}' is not a position digit 0-8"))),
            };
            if seen[digit] {
                return Err(invalid(&format!("position {digit} appears twice")));
            }
            seen[digit] = true;
        }

        Ok(())
    }
}

impl FromStr for HistoryKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for HistoryKey {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }
}

impl From<HistoryKey> for String {
    fn from(key: HistoryKey) -> Self {
        key.0
    }
}

impl fmt::Display for HistoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for HistoryKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<HistoryKey> for &str {
    fn eq(&self, other: &HistoryKey) -> bool {
        *self == other.as_str()
    }
}

impl Borrow<str> for HistoryKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for HistoryKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_keys() {
        let key: HistoryKey = "12807".parse().unwrap();
        assert_eq!(key, "12807");
        assert_eq!(key.len(), 5);
        assert_eq!(
            key.positions(),
            Position::parse_sequence("12807").unwrap()
        );
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!("".parse::<HistoryKey>().is_err());
        assert!("0123456789".parse::<HistoryKey>().is_err());
        assert!("129".parse::<HistoryKey>().is_err());
        assert!("1x2".parse::<HistoryKey>().is_err());

        let err = "1231".parse::<HistoryKey>().unwrap_err();
        assert!(err.to_string().contains("appears twice"), "{err}");
    }
}
