//! In-memory Outcome Map repository for tests.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Result, error::Error, ports::OutcomeRepository, tictactoe::OutcomeMap};

/// Repository that keeps saved maps in memory, keyed by path.
///
/// Maps go through the same JSON encoding as [`super::JsonRepository`], so
/// key and code validation on load behaves identically. Clones share storage.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use tiqtaq::{OutcomeMap, adapters::InMemoryRepository, ports::OutcomeRepository};
///
/// let repo = InMemoryRepository::new();
/// repo.save(&OutcomeMap::new(), Path::new("outcomes"))?;
/// assert!(repo.load(Path::new("outcomes"))?.is_empty());
/// # Ok::<(), tiqtaq::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn files(&self) -> MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        // entries are only ever replaced whole
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutcomeRepository for InMemoryRepository {
    fn save(&self, outcomes: &OutcomeMap, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec(outcomes)?;
        self.files().insert(path.to_path_buf(), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<OutcomeMap> {
        let files = self.files();
        let bytes = files.get(path).ok_or_else(|| Error::Io {
            operation: format!("load outcome map from memory at {path:?}"),
            source: io::Error::new(io::ErrorKind::NotFound, "nothing saved at this path"),
        })?;
        Ok(serde_json::from_slice(bytes)?)
    }
}
