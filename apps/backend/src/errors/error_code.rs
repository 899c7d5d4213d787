//! Error codes for the game service API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the game service API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Malformed or unparseable coordinate token
    InvalidCoordinate,
    /// Move on an occupied cell
    InvalidMove,
    /// Move attempted before the game started
    GameNotActive,
    /// Move attempted after the game finished
    GameFinished,
    /// Move attempted by the non-active player
    NotPlayerTurn,
    /// Creator attempted to join their own game
    AlreadyInGame,
    /// Join attempted on a non-waiting game
    CannotJoin,
    /// General bad request error
    BadRequest,

    // Authorization
    /// Caller is not a member of the game
    NotAMember,

    // Resource not found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Lost a concurrent-update race
    ConcurrentModification,
    /// General conflict error
    Conflict,

    // Infrastructure
    /// Database error
    DbError,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Canonical string form used in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCoordinate => "INVALID_COORDINATE",
            Self::InvalidMove => "INVALID_MOVE",
            Self::GameNotActive => "GAME_NOT_ACTIVE",
            Self::GameFinished => "GAME_FINISHED",
            Self::NotPlayerTurn => "NOT_PLAYER_TURN",
            Self::AlreadyInGame => "ALREADY_IN_GAME",
            Self::CannotJoin => "CANNOT_JOIN",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotAMember => "NOT_A_MEMBER",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::ConcurrentModification => "CONCURRENT_MODIFICATION",
            Self::Conflict => "CONFLICT",
            Self::DbError => "DB_ERROR",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorCode> for &'static str {
    fn from(code: ErrorCode) -> Self {
        code.as_str()
    }
}
