//! SeaORM entity for the `games` table.
//!
//! Expected schema (owned by the persistence collaborator):
//!
//! ```sql
//! CREATE TABLE games (
//!     id           TEXT PRIMARY KEY,
//!     board        JSONB NOT NULL,
//!     players      JSONB NOT NULL,
//!     status       TEXT NOT NULL,
//!     created_at   TIMESTAMPTZ NOT NULL,
//!     updated_at   TIMESTAMPTZ NOT NULL,
//!     lock_version INT NOT NULL DEFAULT 0
//! );
//! ```
//!
//! `board` is a 3x3 array of single-character strings ("" = unmarked);
//! `players` is an ordered pair of `{id, mark, is_active}` records.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum GameStatus {
    #[sea_orm(string_value = "waiting")]
    Waiting,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "finished")]
    Finished,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub board: Json,
    pub players: Json,
    pub status: GameStatus,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
    #[sea_orm(column_name = "lock_version")]
    pub lock_version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
