//! Repository port for Outcome Map persistence.

use std::path::Path;

use crate::{Result, tictactoe::OutcomeMap};

/// Port for persisting and loading Outcome Maps.
///
/// This trait abstracts the storage mechanism, so the enumeration and
/// reporting commands do not depend on a specific serialization format.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use tiqtaq::{OutcomeMap, ports::OutcomeRepository};
///
/// fn persist<R: OutcomeRepository>(repo: &R, outcomes: &OutcomeMap) -> tiqtaq::Result<()> {
///     repo.save(outcomes, Path::new("tiqtaq.json"))
/// }
/// ```
pub trait OutcomeRepository {
    /// Save an Outcome Map.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or serialization fails.
    fn save(&self, outcomes: &OutcomeMap, path: &Path) -> Result<()>;

    /// Load an Outcome Map.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a valid Outcome Map (malformed key or outcome code)
    fn load(&self, path: &Path) -> Result<OutcomeMap>;
}
