//! Tic-Tac-Toe game model, symmetry group and canonical enumeration

pub mod board;
pub mod canonical;
pub mod enumeration;
pub mod game;
pub mod lines;
pub mod outcome;
pub mod symmetry;

pub use board::{Board, Cell, LAYOUT, Player};
pub use canonical::CanonicalForm;
pub use enumeration::{
    Enumeration, EnumerationConfig, FIRST_MOVES, TOTAL_GAMES, enumerate_from, enumerate_games,
    for_each_permutation,
};
pub use game::{Game, GameStatus};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::{Outcome, OutcomeMap, OutcomeSummary};
pub use symmetry::{Step, Symmetry};
