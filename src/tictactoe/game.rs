//! Game state machine over a move sequence

use std::cell::OnceCell;

use tracing::trace;

use super::{
    board::{Board, Player},
    canonical::CanonicalForm,
    outcome::Outcome,
};
use crate::{identifiers::HistoryKey, types::Position};

/// Whether a game is still accepting moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Finished(Outcome),
}

/// A game tracked as the ordered sequence of positions played.
///
/// The move sequence is the only source of truth. The board and status are
/// updated with every accepted move; the canonical form is derived on demand
/// and memoized until the next move.
#[derive(Debug, Clone)]
pub struct Game {
    moves: Vec<Position>,
    board: Board,
    status: GameStatus,
    canonical: OnceCell<CanonicalForm>,
}

impl Game {
    /// Create a new game with an empty board, X to move
    pub fn new() -> Self {
        Game {
            moves: Vec::with_capacity(9),
            board: Board::new(),
            status: GameStatus::InProgress,
            canonical: OnceCell::new(),
        }
    }

    /// Seed a game with moves already played.
    ///
    /// Moves that [`Game::add_move`] would reject are skipped, which includes
    /// everything after the terminal move. The canonical form is computed
    /// once, after the last seeded move.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiqtaq::{Game, Outcome, Position};
    ///
    /// // X completes the top row on the fifth move; the rest is ignored.
    /// let game = Game::from_moves(Position::parse_sequence("182034567").unwrap());
    /// assert_eq!(game.outcome(), Some(Outcome::XWins));
    /// assert_eq!(game.history().unwrap().as_str(), "12807");
    /// ```
    pub fn from_moves<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut game = Game::new();
        for pos in moves {
            if let Err(e) = game.push_move(pos) {
                trace!(%pos, error = %e, "skipping seeded move");
            }
        }
        game.canonical();
        game
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game is finished and
    /// [`crate::Error::PositionOccupied`] for a position already played. A
    /// rejected move leaves the game unchanged.
    pub fn add_move(&mut self, pos: Position) -> Result<(), crate::Error> {
        self.push_move(pos)?;
        self.canonical();
        Ok(())
    }

    fn push_move(&mut self, pos: Position) -> Result<(), crate::Error> {
        if self.is_finished() {
            return Err(crate::Error::GameOver);
        }
        if self.moves.contains(&pos) {
            return Err(crate::Error::PositionOccupied {
                position: pos.value(),
            });
        }

        let player = Player::for_ply(self.moves.len());
        self.moves.push(pos);
        self.board.cells[pos.index()] = player.to_cell();
        self.canonical = OnceCell::new();
        self.status = self.evaluate();
        Ok(())
    }

    fn evaluate(&self) -> GameStatus {
        if let Some(winner) = self.board.winner() {
            GameStatus::Finished(Outcome::win(winner))
        } else if self.board.is_full() {
            GameStatus::Finished(Outcome::Draw)
        } else {
            GameStatus::InProgress
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    /// Get the outcome once the game is finished
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Finished(outcome) => Some(outcome),
            GameStatus::InProgress => None,
        }
    }

    /// Line held by the winner, in original coordinates
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.outcome()
            .and_then(Outcome::winner)
            .and_then(|_| self.board.winning_line())
    }

    /// Player to move, or `None` once the game is finished
    pub fn to_move(&self) -> Option<Player> {
        (!self.is_finished()).then(|| Player::for_ply(self.moves.len()))
    }

    /// Positions played so far, in order
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// Board as played
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Canonical form of the moves played so far
    pub fn canonical(&self) -> &CanonicalForm {
        self.canonical
            .get_or_init(|| CanonicalForm::of(&self.moves))
    }

    /// Board of the canonical move sequence
    pub fn canonical_board(&self) -> Board {
        Board::from_moves(&self.canonical().moves)
    }

    /// Canonical history key; `None` until the game is finished
    pub fn history(&self) -> Option<HistoryKey> {
        self.is_finished().then(|| self.canonical().key())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
