//! Shared configuration types for CLI commands

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::{
    adapters::{JsonRepository, MsgPackRepository},
    ports::OutcomeRepository,
};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "TIQTAQ_LOG";

/// Results file used when no path is given
pub const DEFAULT_RESULTS_PATH: &str = "tiqtaq.json";

pub fn default_results_path() -> PathBuf {
    PathBuf::from(DEFAULT_RESULTS_PATH)
}

/// On-disk format of a saved Outcome Map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum StorageFormat {
    /// Sorted JSON object of history -> outcome code
    #[default]
    Json,
    /// MessagePack encoding of the same map
    Msgpack,
}

impl StorageFormat {
    pub fn repository(self) -> Box<dyn OutcomeRepository> {
        match self {
            StorageFormat::Json => Box::new(JsonRepository::new()),
            StorageFormat::Msgpack => Box::new(MsgPackRepository::new()),
        }
    }
}

/// Common configuration shared across commands
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Verbose output
    pub verbose: bool,
}

impl CommonConfig {
    /// Filter used when `TIQTAQ_LOG` is unset
    pub fn default_filter(&self) -> &'static str {
        if self.verbose { "tiqtaq=debug" } else { "warn" }
    }

    /// Install the global tracing subscriber, logging to stderr.
    ///
    /// `TIQTAQ_LOG` overrides the default filter. Installing twice is a no-op.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(self.default_filter()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
