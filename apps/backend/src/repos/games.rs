//! Game repository functions for the domain layer.
//!
//! Converts between the domain aggregate and the persisted row, and exposes
//! the repository operations the service layer needs. Adapter functions
//! return DbErr; this layer maps to DomainError via From<DbErr>.

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::adapters::games_sea::{GameUpdate, StoredPlayer};
use crate::domain::board::Board;
use crate::domain::game::{Game, GameStatus, Player, PLAYER_SLOTS};
use crate::entities::games;
use crate::errors::domain::DomainError;

/// A loaded game together with the row version needed to write it back.
///
/// `lock_version` never enters the domain aggregate; it exists only to carry
/// the optimistic-lock token between load and store.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub game: Game,
    pub lock_version: i32,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<GameRow>, DomainError> {
    let model = games_adapter::find_by_id(conn, game_id).await?;
    model.map(from_model).transpose()
}

/// Find game by ID or fail with NotFound.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<GameRow, DomainError> {
    let model = games_adapter::require_game(conn, game_id).await?;
    from_model(model)
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &Game,
) -> Result<GameRow, DomainError> {
    let model = games_adapter::create_game(conn, to_model(game, 0)?).await?;
    from_model(model)
}

/// Persist a mutated aggregate; fails with a Conflict on a lost
/// optimistic-lock race and NotFound if the row disappeared.
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &Game,
    expected_lock_version: i32,
) -> Result<GameRow, DomainError> {
    let update = GameUpdate {
        id: game.id.clone(),
        board: board_to_json(&game.board)?,
        players: players_to_json(game)?,
        status: status_to_stored(game.status),
        updated_at: game.updated_at,
        expected_lock_version,
    };
    let model = games_adapter::update_game(conn, update).await?;
    from_model(model)
}

pub async fn list_waiting<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<GameRow>, DomainError> {
    let models = games_adapter::list_waiting(conn).await?;
    models.into_iter().map(from_model).collect()
}

/// Games where `user_id` occupies a slot, most recently touched first.
pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<GameRow>, DomainError> {
    let models = games_adapter::list_for_user(conn, user_id).await?;
    models.into_iter().map(from_model).collect()
}

// Conversions between stored rows and the domain aggregate. Pure, so the
// round-trip guarantee is testable without a database.

fn status_to_stored(status: GameStatus) -> games::GameStatus {
    match status {
        GameStatus::Waiting => games::GameStatus::Waiting,
        GameStatus::Active => games::GameStatus::Active,
        GameStatus::Finished => games::GameStatus::Finished,
    }
}

fn status_from_stored(status: games::GameStatus) -> GameStatus {
    match status {
        games::GameStatus::Waiting => GameStatus::Waiting,
        games::GameStatus::Active => GameStatus::Active,
        games::GameStatus::Finished => GameStatus::Finished,
    }
}

fn board_to_json(board: &Board) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(board.to_stored())
        .map_err(|e| DomainError::infra_corrupt(format!("board encode: {e}")))
}

fn players_to_json(game: &Game) -> Result<serde_json::Value, DomainError> {
    let stored: Vec<StoredPlayer> = game
        .players
        .iter()
        .map(|p| StoredPlayer {
            id: p.id.clone(),
            mark: p.mark.map(|m| m.as_str().to_string()).unwrap_or_default(),
            is_active: p.is_active,
        })
        .collect();
    serde_json::to_value(stored)
        .map_err(|e| DomainError::infra_corrupt(format!("players encode: {e}")))
}

pub fn to_model(game: &Game, lock_version: i32) -> Result<games::Model, DomainError> {
    Ok(games::Model {
        id: game.id.clone(),
        board: board_to_json(&game.board)?,
        players: players_to_json(game)?,
        status: status_to_stored(game.status),
        created_at: game.created_at,
        updated_at: game.updated_at,
        lock_version,
    })
}

pub fn from_model(model: games::Model) -> Result<GameRow, DomainError> {
    let cells: [[String; 3]; 3] = serde_json::from_value(model.board)
        .map_err(|e| DomainError::infra_corrupt(format!("board decode: {e}")))?;
    let board = Board::from_stored(&cells)?;

    let stored: [StoredPlayer; PLAYER_SLOTS] = serde_json::from_value(model.players)
        .map_err(|e| DomainError::infra_corrupt(format!("players decode: {e}")))?;
    let mut players = Vec::with_capacity(PLAYER_SLOTS);
    for p in stored {
        let mark = if p.mark.is_empty() {
            None
        } else {
            Some(p.mark.parse()?)
        };
        players.push(Player {
            id: p.id,
            mark,
            is_active: p.is_active,
        });
    }
    let players: [Player; PLAYER_SLOTS] = players
        .try_into()
        .map_err(|_| DomainError::infra_corrupt("players pair has wrong arity"))?;

    Ok(GameRow {
        game: Game {
            id: model.id,
            board,
            players,
            status: status_from_stored(model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        },
        lock_version: model.lock_version,
    })
}
