//! DTOs for the games_sea adapter, including the stored JSON shapes.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::entities::games::GameStatus;

/// Stored form of one player slot inside the `players` JSON pair.
///
/// `mark` is a single-character string, empty while unassigned;
/// an all-empty record is a vacant slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPlayer {
    pub id: String,
    pub mark: String,
    pub is_active: bool,
}

/// Full-aggregate update with optimistic locking.
///
/// Every accepted mutation rewrites board, players, status, and `updated_at`
/// together; `expected_lock_version` must match the stored row.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: String,
    pub board: serde_json::Value,
    pub players: serde_json::Value,
    pub status: GameStatus,
    pub updated_at: OffsetDateTime,
    pub expected_lock_version: i32,
}
