//! Game command service: lifecycle operations behind the command grammar.
//!
//! Each method computes exactly one synchronous mutation (or a read) against
//! a connection the caller owns, so transaction scope and concurrency
//! control stay with the route layer and the repository. Failures are
//! returned, never retried.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::info;

use crate::domain::coin::{ChaChaCoin, FairCoin};
use crate::domain::coordinate::Coordinate;
use crate::domain::game::{Game, GameStatus};
use crate::domain::player_view::{project_all_views, project_view};
use crate::errors::domain::DomainError;
use crate::protocol::messages::{Button, OutgoingMessage, Reply};
use crate::repos::games as games_repo;

pub struct GameService {
    coin: Box<dyn FairCoin>,
}

impl GameService {
    /// Service with an injected coin; tests pass a fixed one.
    pub fn new(coin: Box<dyn FairCoin>) -> Self {
        Self { coin }
    }

    /// Production service: unbiased coin from OS entropy.
    pub fn with_os_entropy() -> Self {
        Self::new(Box::new(ChaChaCoin::from_os_entropy()))
    }

    /// `/new`: create a game in Waiting with the caller in slot 0.
    pub async fn create_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: &str,
    ) -> Result<Reply, DomainError> {
        let game = Game::new(
            uuid::Uuid::new_v4().to_string(),
            user_id,
            OffsetDateTime::now_utc(),
        );
        let row = games_repo::create_game(conn, &game).await?;
        info!(game_id = %row.game.id, user_id, "game created");

        Ok(Reply::one(OutgoingMessage {
            user_id: user_id.to_string(),
            text: "Game created! Waiting for a second player...".to_string(),
            buttons: vec![button("Games list", "/list")],
        }))
    }

    /// `/list`: waiting games as join buttons.
    pub async fn list_games<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: &str,
    ) -> Result<Reply, DomainError> {
        let rows = games_repo::list_waiting(conn).await?;

        if rows.is_empty() {
            return Ok(Reply::one(OutgoingMessage {
                user_id: user_id.to_string(),
                text: "No games to join right now".to_string(),
                buttons: vec![button("New game", "/new"), button("My game", "/mygame")],
            }));
        }

        let buttons = rows
            .iter()
            .map(|row| {
                let game = &row.game;
                Button {
                    text: format!(
                        "Game {} (created by {})",
                        short_id(&game.id),
                        game.players[0].id
                    ),
                    action: format!("/join {}", game.id),
                }
            })
            .collect();

        Ok(Reply::one(OutgoingMessage {
            user_id: user_id.to_string(),
            text: "Available games:".to_string(),
            buttons,
        }))
    }

    /// `/join <id>`: seat the caller, flip the coin for marks and first
    /// turn, and return both members' views from the same transaction.
    pub async fn join_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: &str,
        game_id: &str,
    ) -> Result<Reply, DomainError> {
        let mut row = games_repo::require_game(conn, game_id).await?;

        let creator_starts = self.coin.flip();
        row.game
            .join(user_id, creator_starts, OffsetDateTime::now_utc())?;
        let row = games_repo::update_game(conn, &row.game, row.lock_version).await?;
        info!(game_id, user_id, creator_starts, "player joined");

        Ok(fan_out(&row.game))
    }

    /// `/move <id> <coord>`: apply one move and return both members' views
    /// from the same transaction.
    pub async fn make_move<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: &str,
        game_id: &str,
        coord_token: &str,
    ) -> Result<Reply, DomainError> {
        let coord: Coordinate = coord_token.parse()?;
        let mut row = games_repo::require_game(conn, game_id).await?;

        row.game
            .make_move(user_id, coord, OffsetDateTime::now_utc())?;
        let row = games_repo::update_game(conn, &row.game, row.lock_version).await?;
        info!(
            game_id,
            user_id,
            coord = %coord,
            finished = row.game.status == GameStatus::Finished,
            "move accepted"
        );

        Ok(fan_out(&row.game))
    }

    /// `/game <id>`: the caller's view of one game; members only.
    pub async fn show_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: &str,
        game_id: &str,
    ) -> Result<Reply, DomainError> {
        let row = games_repo::require_game(conn, game_id).await?;
        let view = project_view(&row.game, user_id)?;
        Ok(Reply::one(view.into()))
    }

    /// `/mygame`: the caller's most recent Waiting/Active game.
    pub async fn my_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: &str,
    ) -> Result<Reply, DomainError> {
        let rows = games_repo::list_for_user(conn, user_id).await?;
        let current = rows
            .iter()
            .find(|row| matches!(row.game.status, GameStatus::Waiting | GameStatus::Active));

        match current {
            Some(row) => {
                let view = project_view(&row.game, user_id)?;
                Ok(Reply::one(view.into()))
            }
            None => Ok(Reply::one(OutgoingMessage {
                user_id: user_id.to_string(),
                text: "You have no active game. Create one or join an existing game."
                    .to_string(),
                buttons: vec![button("New game", "/new"), button("Games list", "/list")],
            })),
        }
    }

    /// `/help`, `/start`, and anything unrecognized.
    pub fn help(&self, user_id: &str) -> Reply {
        Reply::one(OutgoingMessage {
            user_id: user_id.to_string(),
            text: HELP_TEXT.to_string(),
            buttons: vec![
                button("New game", "/new"),
                button("Games list", "/list"),
                button("My game", "/mygame"),
            ],
        })
    }

    /// Out-of-band redelivery for the notify endpoint: fresh read, one view
    /// per member player.
    pub async fn notifications<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
    ) -> Result<Reply, DomainError> {
        let row = games_repo::require_game(conn, game_id).await?;
        Ok(fan_out(&row.game))
    }
}

/// Views for every member player, addressed individually.
fn fan_out(game: &Game) -> Reply {
    Reply::many(project_all_views(game).into_iter().map(Into::into))
}

fn button(text: &str, action: &str) -> Button {
    Button {
        text: text.to_string(),
        action: action.to_string(),
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

const HELP_TEXT: &str = "\
Welcome to tic-tac-toe!

Commands:
- /new - create a new game
- /list - list games waiting for an opponent

How to play:
1. Create a game with /new
2. Share the bot with a friend
3. Your friend joins through /list
4. Take turns making moves

Move coordinates:
   1 2 3
A  . . .
B  . . .
C  . . .

Press the coordinate buttons (A1, B2, C3 and so on) to make a move.

Good luck!";
