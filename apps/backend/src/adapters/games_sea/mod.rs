//! SeaORM adapter for the game repository - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, Order, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::games;
use crate::errors::domain::OPTIMISTIC_LOCK_PREFIX;

pub mod dto;

pub use dto::{GameUpdate, StoredPlayer};

// Adapter functions return DbErr; the repos layer maps to DomainError via
// From<DbErr>, including the OPTIMISTIC_LOCK custom payload emitted here.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or return RecordNotFound error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("Game {game_id} not found")))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    model: games::Model,
) -> Result<games::Model, sea_orm::DbErr> {
    let active = games::ActiveModel {
        id: Set(model.id),
        board: Set(model.board),
        players: Set(model.players),
        status: Set(model.status),
        created_at: Set(model.created_at),
        updated_at: Set(model.updated_at),
        lock_version: Set(0),
    };
    active.insert(conn).await
}

/// Persist a mutated game with an optimistic lock check.
///
/// The whole aggregate payload (board, players, status, updated_at) is
/// written in one statement filtered on `expected_lock_version`; zero rows
/// affected with an existing row means a concurrent writer won the race.
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    update: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    let result = games::Entity::update_many()
        .col_expr(games::Column::Board, Expr::val(update.board).into())
        .col_expr(games::Column::Players, Expr::val(update.players).into())
        .col_expr(games::Column::Status, Expr::val(update.status).into())
        .col_expr(games::Column::UpdatedAt, Expr::val(update.updated_at).into())
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(update.id.as_str()))
        .filter(games::Column::LockVersion.eq(update.expected_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        // Either the game doesn't exist or the lock version doesn't match.
        let game = games::Entity::find_by_id(update.id.as_str()).one(conn).await?;
        return match game {
            Some(game) => Err(sea_orm::DbErr::Custom(format!(
                "{OPTIMISTIC_LOCK_PREFIX}expected version {}, row has {}",
                update.expected_lock_version, game.lock_version
            ))),
            None => Err(sea_orm::DbErr::RecordNotFound(format!(
                "Game {} not found",
                update.id
            ))),
        };
    }

    games::Entity::find_by_id(update.id.as_str())
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("Game {} not found", update.id)))
}

/// Joinable games, oldest first.
pub async fn list_waiting<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Status.eq(games::GameStatus::Waiting))
        .order_by(games::Column::CreatedAt, Order::Asc)
        .all(conn)
        .await
}

/// Games where `user_id` occupies either player slot, newest first.
///
/// Membership lives inside the `players` JSON pair, so the filter matches on
/// the two possible slot positions.
pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    let slot = |index: u8| {
        Expr::cust_with_values(
            format!("players -> {index} ->> 'id' = ?"),
            [user_id.to_string()],
        )
    };
    games::Entity::find()
        .filter(Condition::any().add(slot(0)).add(slot(1)))
        .order_by(games::Column::UpdatedAt, Order::Desc)
        .all(conn)
        .await
}
