//! Per-player projection of game state.
//!
//! `project_view` derives what one member sees after any mutation: the
//! rendered board, a status-dependent message, and the actions available to
//! them. Pure and deterministic given `(game, viewer)`.

use crate::domain::board::Board;
use crate::domain::game::{Game, GameStatus};
use crate::errors::domain::{DomainError, RuleViolation};

/// An action offered to the viewer, rendered as a chat button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewAction {
    pub label: String,
    pub command: String,
}

impl ViewAction {
    fn new(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
        }
    }
}

/// What one member sees: addressed to `user_id`, ready for the transport
/// collaborator to format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub user_id: String,
    pub text: String,
    pub actions: Vec<ViewAction>,
}

/// Project the view for `viewer_id`, failing with `NotAMember` if the viewer
/// occupies neither player slot.
pub fn project_view(game: &Game, viewer_id: &str) -> Result<PlayerView, DomainError> {
    let viewer = game
        .player(viewer_id)
        .ok_or_else(|| DomainError::rule(RuleViolation::NotAMember))?;

    let board = render_board(&game.board);

    let (text, actions) = match game.status {
        GameStatus::Finished => {
            let outcome = match (game.winner(), viewer.mark) {
                (Some(winner), Some(mine)) if winner == mine => "Congratulations, you won!",
                (Some(_), _) => "Game over. Your opponent won.",
                (None, _) => "Game over. It's a draw!",
            };
            (
                format!("{board}\n{outcome}"),
                vec![
                    ViewAction::new("New game", "/new"),
                    ViewAction::new("Games list", "/list"),
                ],
            )
        }
        GameStatus::Waiting => (
            format!("{board}\nWaiting for a second player..."),
            vec![
                ViewAction::new("Games list", "/list"),
                ViewAction::new("My game", "/mygame"),
            ],
        ),
        GameStatus::Active if viewer.is_active => {
            let mark = viewer.mark.map(|m| m.as_str()).unwrap_or("?");
            (
                format!("{board}\nYour move! You are playing {mark}"),
                move_actions(game),
            )
        }
        GameStatus::Active => {
            let mark = viewer.mark.map(|m| m.as_str()).unwrap_or("?");
            (
                format!("{board}\nWaiting for your opponent's move... You are playing {mark}"),
                vec![ViewAction::new("My game", "/mygame")],
            )
        }
    };

    Ok(PlayerView {
        user_id: viewer_id.to_string(),
        text,
        actions,
    })
}

/// Views for every occupied slot, in slot order. Used for notification
/// fan-out after a join or move; delivery is the caller's concern.
pub fn project_all_views(game: &Game) -> Vec<PlayerView> {
    game.players
        .iter()
        .filter(|p| p.is_occupied())
        .map(|p| {
            project_view(game, &p.id).expect("occupied slot is always a member of its own game")
        })
        .collect()
}

/// One coordinate-addressed move action per empty cell.
fn move_actions(game: &Game) -> Vec<ViewAction> {
    game.board
        .empty_cells()
        .into_iter()
        .map(|coord| ViewAction::new(coord.to_string(), format!("/move {} {}", game.id, coord)))
        .collect()
}

fn render_board(board: &Board) -> String {
    let mut out = String::from("   1 2 3\n  +-+-+-+\n");
    let rows = ['A', 'B', 'C'];
    let stored = board.to_stored();
    for (letter, row) in rows.iter().zip(stored.iter()) {
        out.push(*letter);
        out.push_str(" |");
        for cell in row {
            out.push_str(if cell.is_empty() { "_" } else { cell });
            out.push('|');
        }
        out.push('\n');
    }
    out
}
