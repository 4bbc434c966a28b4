//! MessagePack implementation of the Outcome Map repository.
//!
//! This adapter implements the OutcomeRepository port using rmp_serde for
//! compact binary serialization.

use std::{fs::File, io::BufReader, path::Path};

use tracing::{debug, instrument};

use crate::{Result, error::Error, ports::OutcomeRepository, tictactoe::OutcomeMap};

/// MessagePack-based Outcome Map repository.
///
/// Stores the same key -> code mapping as [`super::JsonRepository`] in a
/// binary file.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use tiqtaq::{adapters::MsgPackRepository, enumerate_games, ports::OutcomeRepository};
///
/// let repo = MsgPackRepository;
/// let result = enumerate_games();
///
/// repo.save(&result.outcomes, Path::new("tiqtaq.msgpack"))?;
/// let loaded = repo.load(Path::new("tiqtaq.msgpack"))?;
/// assert_eq!(loaded, result.outcomes);
/// # Ok::<(), tiqtaq::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl OutcomeRepository for MsgPackRepository {
    #[instrument(skip(self, outcomes), fields(histories = outcomes.len()))]
    fn save(&self, outcomes: &OutcomeMap, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, outcomes).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize outcome map to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        debug!("outcome map written");
        Ok(())
    }

    #[instrument(skip(self))]
    fn load(&self, path: &Path) -> Result<OutcomeMap> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let outcomes: OutcomeMap = rmp_serde::decode::from_read(BufReader::new(file))
            .map_err(|e| Error::SerializationContext {
                operation: "deserialize outcome map from MessagePack".to_string(),
                message: e.to_string(),
            })?;

        debug!(histories = outcomes.len(), "outcome map loaded");
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::tictactoe::{FIRST_MOVES, enumerate_from};

    #[test]
    fn test_msgpack_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("outcomes.msgpack");

        let repo = MsgPackRepository::new();
        let outcomes = enumerate_from(FIRST_MOVES[0], None).outcomes;

        repo.save(&outcomes, &file_path).expect("Failed to save");
        let loaded = repo.load(&file_path).expect("Failed to load");

        assert_eq!(loaded, outcomes);
        assert_eq!(loaded.summary(), outcomes.summary());
    }

    #[test]
    fn test_load_rejects_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("outcomes.json");
        std::fs::write(&file_path, r#"{"12807": 1}"#).unwrap();

        let result = MsgPackRepository::new().load(&file_path);
        assert!(matches!(result, Err(Error::SerializationContext { .. })));
    }

    #[test]
    fn test_save_to_invalid_path_returns_error() {
        let repo = MsgPackRepository::new();
        let result = repo.save(
            &OutcomeMap::new(),
            Path::new("/invalid_dir_12345/file.msgpack"),
        );
        assert!(result.is_err());
    }
}
