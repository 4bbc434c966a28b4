//! Exhaustive enumeration of complete games, keyed by canonical history
//!
//! Every first move is equivalent under symmetry to the center, a corner or an
//! edge, so only those three openings are tried. The remaining 8 positions
//! are then permuted exhaustively: 3 * 8! = 120,960 full move orderings, each
//! replayed as a game whose canonical history becomes an Outcome Map key.

use std::iter;

use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use super::{game::Game, outcome::OutcomeMap};
use crate::types::Position;

/// Representatives of the three first-move classes: center, corner, edge.
pub const FIRST_MOVES: [Position; 3] = [
    Position::from_label(0),
    Position::from_label(1),
    Position::from_label(2),
];

/// Number of full move orderings the driver replays: 3 * 8!.
pub const TOTAL_GAMES: usize = 3 * 40_320;

/// Result of an enumeration run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    pub outcomes: OutcomeMap,
    /// Move orderings replayed, including those that collapsed onto a key
    /// already present
    pub games_played: usize,
}

impl Enumeration {
    fn merge(mut self, other: Enumeration) -> Enumeration {
        self.outcomes.merge(other.outcomes);
        self.games_played += other.games_played;
        self
    }
}

/// Configuration for an enumeration run.
///
/// # Examples
///
/// ```no_run
/// use tiqtaq::EnumerationConfig;
///
/// let result = EnumerationConfig::new().with_parallel(true).run();
/// assert_eq!(result.games_played, tiqtaq::TOTAL_GAMES);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnumerationConfig {
    /// Partition the first-move classes across the rayon thread pool
    pub parallel: bool,
    /// Ticked once per replayed game
    pub progress: Option<ProgressBar>,
}

impl EnumerationConfig {
    /// Sequential run without progress reporting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable rayon partitioning.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Report progress on the given bar.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Replay every full move ordering from each first-move class.
    ///
    /// The resulting map does not depend on `parallel`: every ordering that
    /// reaches a canonical history yields the same outcome.
    #[instrument(skip(self), fields(parallel = self.parallel))]
    pub fn run(&self) -> Enumeration {
        let progress = self.progress.as_ref();

        let result = if self.parallel {
            FIRST_MOVES
                .par_iter()
                .map(|&first| enumerate_from(first, progress))
                .reduce(Enumeration::default, Enumeration::merge)
        } else {
            FIRST_MOVES
                .iter()
                .map(|&first| enumerate_from(first, progress))
                .fold(Enumeration::default(), Enumeration::merge)
        };

        info!(
            games = result.games_played,
            histories = result.outcomes.len(),
            "enumeration finished"
        );
        result
    }
}

/// Sequential enumeration with default settings.
pub fn enumerate_games() -> Enumeration {
    EnumerationConfig::new().run()
}

/// Enumerate every full ordering that opens with `first`.
pub fn enumerate_from(first: Position, progress: Option<&ProgressBar>) -> Enumeration {
    let mut rest: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|&pos| pos != first)
        .collect();
    let mut result = Enumeration::default();

    for_each_permutation(&mut rest, |ordering| {
        let game = Game::from_moves(iter::once(first).chain(ordering.iter().copied()));
        // a full ordering always reaches a win or a full board
        if let (Some(key), Some(outcome)) = (game.history(), game.outcome()) {
            result.outcomes.record(key, outcome);
        }
        result.games_played += 1;
        if let Some(pb) = progress {
            pb.inc(1);
        }
    });

    debug!(
        %first,
        games = result.games_played,
        histories = result.outcomes.len(),
        "first-move class enumerated"
    );
    result
}

/// Visit every permutation of `items` in place (iterative Heap's algorithm).
pub fn for_each_permutation<T, F>(items: &mut [T], mut visit: F)
where
    F: FnMut(&[T]),
{
    let n = items.len();
    let mut counters = vec![0usize; n];
    visit(items);

    let mut i = 1;
    while i < n {
        if counters[i] < i {
            if i.is_multiple_of(2) {
                items.swap(0, i);
            } else {
                items.swap(counters[i], i);
            }
            visit(items);
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_permutations_are_complete_and_unique() {
        let mut items = [1, 2, 3, 4];
        let mut seen = HashSet::new();
        for_each_permutation(&mut items, |p| {
            assert!(seen.insert(p.to_vec()), "duplicate permutation {p:?}");
        });
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_permutations_of_trivial_slices() {
        let mut count = 0;
        for_each_permutation::<u8, _>(&mut [], |_| count += 1);
        assert_eq!(count, 1);

        let mut count = 0;
        for_each_permutation(&mut [7], |p| {
            assert_eq!(p, &[7]);
            count += 1;
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn test_first_move_classes_cover_the_board() {
        use crate::tictactoe::CanonicalForm;

        let classes: HashSet<_> = Position::ALL
            .iter()
            .map(|&pos| CanonicalForm::of(&[pos]).moves[0])
            .collect();
        let expected: HashSet<_> = FIRST_MOVES.into_iter().collect();
        assert_eq!(classes, expected);
    }

    #[test]
    fn test_center_class_keys_start_with_center() {
        let result = enumerate_from(Position::CENTER, None);
        assert_eq!(result.games_played, 40_320);
        assert!(
            result
                .outcomes
                .iter()
                .all(|(key, _)| key.as_str().starts_with('0'))
        );
    }
}
