//! Ports (trait boundaries) for external dependencies.
//!
//! The domain owns these traits; adapters in [`crate::adapters`] implement
//! them for concrete storage formats.

pub mod repository;

pub use repository::OutcomeRepository;
