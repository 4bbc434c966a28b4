//! Game outcomes and the canonical outcome map

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use super::board::Player;
use crate::identifiers::HistoryKey;

/// Outcome of a finished game.
///
/// Serialized as its integer code: `1` X wins, `-1` O wins, `0` draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::XWins, Outcome::OWins, Outcome::Draw];

    /// Outcome for a game won by `player`
    pub fn win(player: Player) -> Self {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw => None,
        }
    }

    /// Integer code used by the persisted format
    pub fn code(self) -> i8 {
        match self {
            Outcome::XWins => 1,
            Outcome::OWins => -1,
            Outcome::Draw => 0,
        }
    }

    /// Parse an integer code
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidOutcomeCode`] for anything but 1, -1 or 0.
    pub fn from_code(code: i64) -> Result<Self, crate::Error> {
        match code {
            1 => Ok(Outcome::XWins),
            -1 => Ok(Outcome::OWins),
            0 => Ok(Outcome::Draw),
            _ => Err(crate::Error::InvalidOutcomeCode { code }),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

impl From<Outcome> for i8 {
    fn from(outcome: Outcome) -> Self {
        outcome.code()
    }
}

impl TryFrom<i8> for Outcome {
    type Error = crate::Error;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        Outcome::from_code(code.into())
    }
}

/// Canonical history -> outcome.
///
/// Backed by a `BTreeMap` so iteration and serialization are in sorted key
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeMap {
    entries: BTreeMap<HistoryKey, Outcome>,
}

impl OutcomeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for a canonical history.
    ///
    /// Returns the previous outcome when the key was already present. Every
    /// permutation that reaches a canonical class yields the same outcome, so
    /// overwriting is idempotent.
    pub fn record(&mut self, key: HistoryKey, outcome: Outcome) -> Option<Outcome> {
        let previous = self.entries.insert(key, outcome);
        debug_assert!(
            previous.is_none_or(|p| p == outcome),
            "conflicting outcomes for one canonical history"
        );
        previous
    }

    /// Fold another map into this one
    pub fn merge(&mut self, other: OutcomeMap) {
        for (key, outcome) in other.entries {
            self.record(key, outcome);
        }
    }

    pub fn get(&self, key: &str) -> Option<Outcome> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, HistoryKey, Outcome> {
        self.entries.iter()
    }

    /// Aggregate counts per outcome
    pub fn summary(&self) -> OutcomeSummary {
        let mut summary = OutcomeSummary::default();
        for &outcome in self.entries.values() {
            summary.total += 1;
            match outcome {
                Outcome::XWins => summary.x_wins += 1,
                Outcome::OWins => summary.o_wins += 1,
                Outcome::Draw => summary.draws += 1,
            }
        }
        summary
    }
}

impl FromIterator<(HistoryKey, Outcome)> for OutcomeMap {
    fn from_iter<I: IntoIterator<Item = (HistoryKey, Outcome)>>(iter: I) -> Self {
        let mut map = OutcomeMap::new();
        for (key, outcome) in iter {
            map.record(key, outcome);
        }
        map
    }
}

impl<'a> IntoIterator for &'a OutcomeMap {
    type Item = (&'a HistoryKey, &'a Outcome);
    type IntoIter = btree_map::Iter<'a, HistoryKey, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// How many canonical histories end in each outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    pub total: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl OutcomeSummary {
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::XWins => self.x_wins,
            Outcome::OWins => self.o_wins,
            Outcome::Draw => self.draws,
        }
    }

    /// Share of `total` in percent; 0.0 for an empty map
    pub fn percentage(&self, outcome: Outcome) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.count(outcome) as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> HistoryKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_codes() {
        for outcome in Outcome::ALL {
            assert_eq!(Outcome::from_code(outcome.code().into()).unwrap(), outcome);
        }
        assert!(Outcome::from_code(2).is_err());
        assert_eq!(Outcome::win(Player::O), Outcome::OWins);
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_record_overwrites_idempotently() {
        let mut map = OutcomeMap::new();
        assert_eq!(map.record(key("12807"), Outcome::XWins), None);
        assert_eq!(map.record(key("12807"), Outcome::XWins), Some(Outcome::XWins));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("12807"), Some(Outcome::XWins));
        assert_eq!(map.get("0"), None);
    }

    #[test]
    fn test_summary() {
        let map: OutcomeMap = [
            (key("12807"), Outcome::XWins),
            (key("10238467"), Outcome::OWins),
            (key("21053746"), Outcome::OWins),
            (key("012345678"), Outcome::Draw),
        ]
        .into_iter()
        .collect();

        let summary = map.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(Outcome::OWins), 2);
        assert!((summary.percentage(Outcome::XWins) - 25.0).abs() < 1e-9);
        assert_eq!(OutcomeSummary::default().percentage(Outcome::Draw), 0.0);
    }

    #[test]
    fn test_json_shape() {
        let mut map = OutcomeMap::new();
        map.record(key("2105"), Outcome::Draw);
        map.record(key("10238467"), Outcome::OWins);
        map.record(key("12807"), Outcome::XWins);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"10238467":-1,"12807":1,"2105":0}"#);

        let parsed: OutcomeMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_json_rejects_bad_entries() {
        assert!(serde_json::from_str::<OutcomeMap>(r#"{"12807":3}"#).is_err());
        assert!(serde_json::from_str::<OutcomeMap>(r#"{"1299":1}"#).is_err());
    }
}
