use proptest::prelude::*;

use crate::domain::board::Mark;
use crate::domain::coordinate::Coordinate;
use crate::domain::game::{Game, GameStatus};
use crate::domain::tests_game::{active_game, t0};

fn cells() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

fn coord_at(index: usize) -> Coordinate {
    Coordinate::new(index / 3, index % 3).expect("index in 0..9")
}

proptest! {
    /// No board reachable through valid play ever has two winners, and the
    /// first complete line ends the game.
    #[test]
    fn valid_play_never_produces_two_winners(order in cells(), creator_starts in any::<bool>()) {
        let mut game = Game::new("g1", "u1", t0());
        game.join("u2", creator_starts, t0()).unwrap();

        for &index in &order {
            if game.status == GameStatus::Finished {
                break;
            }
            let mover = game.active_player().unwrap().id.clone();
            game.make_move(&mover, coord_at(index), t0()).unwrap();

            prop_assert!(
                !(game.board.is_winner(Mark::X) && game.board.is_winner(Mark::O)),
                "both marks won on {:?}",
                game.board
            );
            if game.winner().is_some() {
                prop_assert_eq!(game.status, GameStatus::Finished);
            }
        }
    }

    /// Every accepted move either flips the active slot or finishes the game.
    #[test]
    fn accepted_move_flips_turn_or_finishes(order in cells()) {
        let mut game = active_game();

        for &index in &order {
            if game.status == GameStatus::Finished {
                break;
            }
            let before = game.active_player().unwrap().id.clone();
            game.make_move(&before, coord_at(index), t0()).unwrap();

            match game.status {
                GameStatus::Finished => prop_assert!(game.active_player().is_none()),
                GameStatus::Active => {
                    let after = game.active_player().unwrap().id.clone();
                    prop_assert_ne!(before.clone(), after);
                }
                GameStatus::Waiting => prop_assert!(false, "status went backwards"),
            }
        }
    }

    /// A rejected move never mutates the game.
    #[test]
    fn rejected_move_leaves_game_unchanged(index in 0..9usize) {
        let mut game = active_game();
        game.make_move("u1", coord_at(index), t0()).unwrap();
        let snapshot = game.clone();

        // Occupied cell, by the player now on turn.
        prop_assert!(game.make_move("u2", coord_at(index), t0()).is_err());
        prop_assert_eq!(&game, &snapshot);

        // Out of turn, on a free cell.
        let free = game.board.empty_cells()[0];
        prop_assert!(game.make_move("u1", free, t0()).is_err());
        prop_assert_eq!(&game, &snapshot);
    }
}
