//! Game state machine behavior over arbitrary move orderings.

use proptest::prelude::*;
use tiqtaq::{Error, Game, GameStatus, Outcome, Player, Position, tictactoe::LineAnalyzer};

fn ordering_strategy() -> impl Strategy<Value = Vec<Position>> {
    Just(Position::ALL.to_vec()).prop_shuffle()
}

proptest! {
    // Replaying a full ordering always ends, and exactly one outcome holds
    #[test]
    fn full_ordering_always_finishes(ordering in ordering_strategy()) {
        let game = Game::from_moves(ordering.iter().copied());
        let outcome = game.outcome();
        prop_assert!(outcome.is_some());

        let x_won = game.board().has_won(Player::X);
        let o_won = game.board().has_won(Player::O);
        prop_assert!(!(x_won && o_won));
        match outcome {
            Some(Outcome::XWins) => prop_assert!(x_won),
            Some(Outcome::OWins) => prop_assert!(o_won),
            Some(Outcome::Draw) => {
                prop_assert!(!x_won && !o_won);
                prop_assert_eq!(game.moves().len(), 9);
            }
            None => unreachable!(),
        }
    }

    // The game stops at the first completed line
    #[test]
    fn history_is_the_shortest_finished_prefix(ordering in ordering_strategy()) {
        let game = Game::from_moves(ordering.iter().copied());
        let played = game.moves().len();
        prop_assert_eq!(game.moves(), &ordering[..played]);
        prop_assert!(played >= 5);

        let earlier = Game::from_moves(ordering[..played - 1].iter().copied());
        prop_assert!(!earlier.is_finished());
    }

    // Length parity decides who can have won
    #[test]
    fn winner_matches_history_parity(ordering in ordering_strategy()) {
        let game = Game::from_moves(ordering.iter().copied());
        let history = game.history().unwrap();
        match game.outcome().unwrap() {
            Outcome::XWins => prop_assert_eq!(history.len() % 2, 1),
            Outcome::OWins => prop_assert_eq!(history.len() % 2, 0),
            Outcome::Draw => prop_assert_eq!(history.len(), 9),
        }
    }

    // The canonical history replays to the same outcome
    #[test]
    fn canonical_history_replays_to_same_outcome(ordering in ordering_strategy()) {
        let game = Game::from_moves(ordering.iter().copied());
        let history = game.history().unwrap();
        let replay = Game::from_moves(history.positions());
        prop_assert_eq!(replay.outcome(), game.outcome());
        prop_assert_eq!(replay.history(), Some(history));
    }
}

#[test]
fn moves_after_finish_are_rejected() {
    let mut game = Game::new();
    for pos in Position::parse_sequence("18203").unwrap() {
        game.add_move(pos).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Finished(Outcome::XWins));
    assert!(matches!(
        game.add_move(Position::new(4).unwrap()),
        Err(Error::GameOver)
    ));
    assert_eq!(game.moves().len(), 5);
}

#[test]
fn winning_line_is_reported() {
    let game = Game::from_moves(Position::parse_sequence("10238467").unwrap());
    assert_eq!(game.outcome(), Some(Outcome::OWins));
    let line: Vec<u8> = game.winning_line().unwrap().iter().map(|p| p.value()).collect();
    assert_eq!(line, vec![3, 0, 7]);
    assert!(LineAnalyzer::has_won(&game.board().cells, Player::O));
}
