use time::macros::datetime;
use time::OffsetDateTime;

use crate::domain::board::Mark;
use crate::domain::coordinate::Coordinate;
use crate::domain::game::{Game, GameStatus};
use crate::errors::domain::{DomainError, RuleViolation};

pub(crate) fn t0() -> OffsetDateTime {
    datetime!(2024-05-01 12:00:00 UTC)
}

fn coord(token: &str) -> Coordinate {
    token.parse().expect("hardcoded valid coordinate")
}

/// Game with both players seated; creator "u1" holds X and moves first.
pub(crate) fn active_game() -> Game {
    let mut game = Game::new("g1", "u1", t0());
    game.join("u2", true, t0()).unwrap();
    game
}

#[test]
fn create_starts_waiting_with_creator_in_slot_zero() {
    let game = Game::new("g1", "u1", t0());
    assert_eq!(game.status, GameStatus::Waiting);
    assert_eq!(game.players[0].id, "u1");
    assert_eq!(game.players[0].mark, None);
    assert!(!game.players[0].is_occupied() || game.players[0].id == "u1");
    assert!(!game.players[1].is_occupied());
    assert!(game.active_player().is_none());
    assert_eq!(game.created_at, t0());
    assert_eq!(game.updated_at, t0());
}

#[test]
fn join_activates_exactly_one_player_and_assigns_both_marks() {
    for creator_starts in [true, false] {
        let mut game = Game::new("g1", "u1", t0());
        game.join("u2", creator_starts, t0()).unwrap();

        assert_eq!(game.status, GameStatus::Active);
        assert_eq!(game.players[1].id, "u2");

        let active: Vec<_> = game.players.iter().filter(|p| p.is_active).collect();
        assert_eq!(active.len(), 1);

        let starter = if creator_starts { 0 } else { 1 };
        assert!(game.players[starter].is_active);
        assert_eq!(game.players[starter].mark, Some(Mark::X));
        assert_eq!(game.players[1 - starter].mark, Some(Mark::O));
    }
}

#[test]
fn creator_cannot_join_own_game() {
    let mut game = Game::new("g1", "u1", t0());
    let err = game.join("u1", true, t0()).unwrap_err();
    assert_eq!(err, DomainError::rule(RuleViolation::AlreadyInGame));
    assert_eq!(game.status, GameStatus::Waiting);
}

#[test]
fn second_join_always_rejected() {
    let mut game = active_game();
    let err = game.join("u3", true, t0()).unwrap_err();
    assert_eq!(err, DomainError::rule(RuleViolation::CannotJoin));

    // Same once the game is over.
    game.status = GameStatus::Finished;
    let err = game.join("u3", true, t0()).unwrap_err();
    assert_eq!(err, DomainError::rule(RuleViolation::CannotJoin));
}

#[test]
fn valid_move_marks_cell_and_flips_turn() {
    let mut game = active_game();
    let later = t0() + time::Duration::minutes(1);

    game.make_move("u1", coord("A1"), later).unwrap();

    assert_eq!(game.board.cell(coord("A1")), Some(Mark::X));
    assert_eq!(game.status, GameStatus::Active);
    assert_eq!(game.active_player().map(|p| p.id.as_str()), Some("u2"));
    assert_eq!(game.updated_at, later);
}

#[test]
fn move_by_inactive_player_is_rejected_without_mutation() {
    let mut game = active_game();
    let before = game.clone();

    let err = game.make_move("u2", coord("A1"), t0()).unwrap_err();
    assert_eq!(err, DomainError::rule(RuleViolation::NotPlayerTurn));
    assert_eq!(game, before);

    // Unknown users get the same answer as out-of-turn members.
    let err = game.make_move("nobody", coord("A1"), t0()).unwrap_err();
    assert_eq!(err, DomainError::rule(RuleViolation::NotPlayerTurn));
    assert_eq!(game, before);
}

#[test]
fn move_on_occupied_cell_is_rejected_without_mutation() {
    let mut game = active_game();
    game.make_move("u1", coord("B2"), t0()).unwrap();
    let before = game.clone();

    let err = game.make_move("u2", coord("B2"), t0()).unwrap_err();
    assert_eq!(err, DomainError::rule(RuleViolation::InvalidMove));
    assert_eq!(game, before);
}

#[test]
fn move_before_start_and_after_finish() {
    let mut waiting = Game::new("g1", "u1", t0());
    let err = waiting.make_move("u1", coord("A1"), t0()).unwrap_err();
    assert_eq!(err, DomainError::rule(RuleViolation::GameNotActive));

    let mut game = active_game();
    game.status = GameStatus::Finished;
    let err = game.make_move("u1", coord("A1"), t0()).unwrap_err();
    assert_eq!(err, DomainError::rule(RuleViolation::GameFinished));
}

#[test]
fn completing_row_a_finishes_the_game() {
    let mut game = active_game();
    // u1 (X) takes row A; u2 (O) answers on row B.
    for token in ["A1", "B1", "A2", "B2", "A3"] {
        let mover = game.active_player().unwrap().id.clone();
        game.make_move(&mover, coord(token), t0()).unwrap();
    }

    assert_eq!(game.status, GameStatus::Finished);
    assert_eq!(game.winner(), Some(Mark::X));
    assert!(game.board.is_winner(Mark::X));
    assert!(!game.board.is_winner(Mark::O));
    assert!(game.active_player().is_none());

    // Terminal: no further moves accepted.
    let err = game.make_move("u2", coord("C1"), t0()).unwrap_err();
    assert_eq!(err, DomainError::rule(RuleViolation::GameFinished));
}

#[test]
fn full_board_without_line_is_a_draw() {
    let mut game = active_game();
    // X O X / X O O / O X X: nine moves, no complete line.
    for token in ["A1", "A2", "A3", "B2", "B1", "B3", "C2", "C1", "C3"] {
        let mover = game.active_player().unwrap().id.clone();
        game.make_move(&mover, coord(token), t0()).unwrap();
    }

    assert_eq!(game.status, GameStatus::Finished);
    assert!(game.board.is_full());
    assert_eq!(game.winner(), None);
    assert!(!game.board.is_winner(Mark::X));
    assert!(!game.board.is_winner(Mark::O));
}
