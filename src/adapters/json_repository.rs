//! JSON implementation of the Outcome Map repository.
//!
//! Writes the interchange format: one JSON object mapping each canonical
//! history string to its outcome code, keys sorted, two-space indentation.
//!
//! ```json
//! {
//!   "015326487": 0,
//!   "12807": 1
//! }
//! ```

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{debug, instrument};

use crate::{Result, error::Error, ports::OutcomeRepository, tictactoe::OutcomeMap};

/// JSON-based Outcome Map repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    /// Create a new JSON repository.
    pub fn new() -> Self {
        Self
    }
}

impl OutcomeRepository for JsonRepository {
    #[instrument(skip(self, outcomes), fields(histories = outcomes.len()))]
    fn save(&self, outcomes: &OutcomeMap, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, outcomes)?;
        writeln!(writer).and_then(|_| writer.flush()).map_err(|source| Error::Io {
            operation: format!("write file {path:?}"),
            source,
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

        let outcomes: OutcomeMap = serde_json::from_reader(BufReader::new(file))?;
        debug!(histories = outcomes.len(), "outcome map loaded");
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::tictactoe::Outcome;

    fn sample() -> OutcomeMap {
        [
            ("12807", Outcome::XWins),
            ("10238467", Outcome::OWins),
            ("015326487", Outcome::Draw),
        ]
        .into_iter()
        .map(|(k, o)| (k.parse().unwrap(), o))
        .collect()
    }

    #[test]
    fn test_json_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("tiqtaq.json");

        let repo = JsonRepository::new();
        let outcomes = sample();

        repo.save(&outcomes, &file_path).expect("Failed to save");
        let loaded = repo.load(&file_path).expect("Failed to load");

        assert_eq!(loaded, outcomes);
        assert_eq!(loaded.summary(), outcomes.summary());
    }

    #[test]
    fn test_file_layout() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("tiqtaq.json");

        JsonRepository::new().save(&sample(), &file_path).unwrap();
        let text = std::fs::read_to_string(&file_path).unwrap();

        assert_eq!(
            text,
            "{\n  \"015326487\": 0,\n  \"10238467\": -1,\n  \"12807\": 1\n}\n"
        );
    }

    #[test]
    fn test_load_rejects_invalid_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("bad.json");

        std::fs::write(&file_path, r#"{"12807": 5}"#).unwrap();
        assert!(JsonRepository::new().load(&file_path).is_err());

        std::fs::write(&file_path, r#"{"1280a": 1}"#).unwrap();
        assert!(JsonRepository::new().load(&file_path).is_err());
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = JsonRepository::new();
        let result = repo.load(Path::new("/tmp/nonexistent_tiqtaq_12345.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
