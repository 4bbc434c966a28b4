//! Symmetry-reduced enumeration of every complete tic-tac-toe game
//!
//! This crate provides:
//! - Ring-labelled board positions and the 8 symmetries of the square
//! - Canonical forms of move sequences under those symmetries
//! - A game state machine that detects wins and draws
//! - Exhaustive enumeration of all games into an Outcome Map keyed by
//!   canonical history, optionally in parallel
//! - JSON and MessagePack persistence of Outcome Maps
//!
//! # Examples
//!
//! ```
//! use tiqtaq::{Game, Outcome, Position};
//!
//! let mut game = Game::new();
//! for pos in Position::parse_sequence("18203")? {
//!     game.add_move(pos)?;
//! }
//! assert_eq!(game.outcome(), Some(Outcome::XWins));
//! assert_eq!(game.history().unwrap(), "12807");
//! # Ok::<(), tiqtaq::Error>(())
//! ```

pub mod adapters;
pub mod cli;
pub mod error;
pub mod identifiers;
pub mod ports;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use identifiers::HistoryKey;
pub use tictactoe::{
    Board, CanonicalForm, Enumeration, EnumerationConfig, Game, GameStatus, Outcome, OutcomeMap,
    OutcomeSummary, Player, Symmetry, TOTAL_GAMES, enumerate_games,
};
pub use types::Position;
