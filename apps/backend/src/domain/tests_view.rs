use crate::domain::game::{Game, GameStatus};
use crate::domain::player_view::{project_all_views, project_view};
use crate::domain::tests_game::{active_game, t0};
use crate::errors::domain::{DomainError, RuleViolation};

#[test]
fn non_member_is_rejected() {
    let game = active_game();
    let err = project_view(&game, "stranger").unwrap_err();
    assert_eq!(err, DomainError::rule(RuleViolation::NotAMember));
}

#[test]
fn waiting_view_offers_list_and_mygame() {
    let game = Game::new("g1", "u1", t0());
    let view = project_view(&game, "u1").unwrap();

    assert!(view.text.contains("Waiting for a second player"));
    let commands: Vec<_> = view.actions.iter().map(|a| a.command.as_str()).collect();
    assert_eq!(commands, ["/list", "/mygame"]);
}

#[test]
fn active_viewer_on_turn_gets_one_action_per_empty_cell() {
    let mut game = active_game();
    game.make_move("u1", "B2".parse().unwrap(), t0()).unwrap();

    // u2 is now on turn: 8 empty cells, each a coordinate-addressed move.
    let view = project_view(&game, "u2").unwrap();
    assert!(view.text.contains("Your move"));
    assert!(view.text.contains("You are playing O"));
    assert_eq!(view.actions.len(), 8);
    assert!(view
        .actions
        .iter()
        .all(|a| a.command.starts_with("/move g1 ")));
    assert!(!view.actions.iter().any(|a| a.label == "B2"));

    // The board render shows the mark in the center cell.
    assert!(view.text.contains("B |_|X|_|"));
}

#[test]
fn active_viewer_off_turn_gets_mygame_only() {
    let game = active_game();
    let view = project_view(&game, "u2").unwrap();

    assert!(view.text.contains("Waiting for your opponent's move"));
    let commands: Vec<_> = view.actions.iter().map(|a| a.command.as_str()).collect();
    assert_eq!(commands, ["/mygame"]);
}

#[test]
fn finished_views_tell_win_loss_and_draw() {
    let mut game = active_game();
    for token in ["A1", "B1", "A2", "B2", "A3"] {
        let mover = game.active_player().unwrap().id.clone();
        game.make_move(&mover, token.parse().unwrap(), t0()).unwrap();
    }
    assert_eq!(game.status, GameStatus::Finished);

    let winner_view = project_view(&game, "u1").unwrap();
    assert!(winner_view.text.contains("Congratulations, you won!"));
    let loser_view = project_view(&game, "u2").unwrap();
    assert!(loser_view.text.contains("Your opponent won"));

    for view in [&winner_view, &loser_view] {
        let commands: Vec<_> = view.actions.iter().map(|a| a.command.as_str()).collect();
        assert_eq!(commands, ["/new", "/list"]);
    }
}

#[test]
fn draw_view_says_draw_to_both() {
    let mut game = active_game();
    for token in ["A1", "A2", "A3", "B2", "B1", "B3", "C2", "C1", "C3"] {
        let mover = game.active_player().unwrap().id.clone();
        game.make_move(&mover, token.parse().unwrap(), t0()).unwrap();
    }
    assert_eq!(game.winner(), None);

    for user in ["u1", "u2"] {
        let view = project_view(&game, user).unwrap();
        assert!(view.text.contains("It's a draw!"), "viewer {user}");
    }
}

#[test]
fn all_views_cover_occupied_slots_in_order() {
    let waiting = Game::new("g1", "u1", t0());
    let views = project_all_views(&waiting);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].user_id, "u1");

    let game = active_game();
    let views = project_all_views(&game);
    let recipients: Vec<_> = views.iter().map(|v| v.user_id.as_str()).collect();
    assert_eq!(recipients, ["u1", "u2"]);
}
