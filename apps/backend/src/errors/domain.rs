//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Game rule violations. Each carries a fixed, user-facing message that is
/// surfaced verbatim as the command's response text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    InvalidCoordinate,
    InvalidMove,
    GameNotActive,
    GameFinished,
    NotPlayerTurn,
    AlreadyInGame,
    CannotJoin,
    NotAMember,
}

impl RuleViolation {
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidCoordinate => {
                "Invalid coordinate: use a row letter A-C and a column digit 1-3, e.g. B2"
            }
            Self::InvalidMove => "That cell is already taken",
            Self::GameNotActive => "The game has not started yet",
            Self::GameFinished => "The game is already over",
            Self::NotPlayerTurn => "It is not your turn",
            Self::AlreadyInGame => "You are already in this game",
            Self::CannotJoin => "This game cannot be joined",
            Self::NotAMember => "You are not a member of this game",
        }
    }
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Lost a concurrent-update race on the same game row.
    OptimisticLock,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Game rule violation reported back to the player
    Rule(RuleViolation),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Semantic conflict (concurrent modification)
    Conflict(ConflictKind, String),
    /// Infrastructure/operational failures (persistence and the like)
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Rule(v) => f.write_str(v.message()),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn rule(violation: RuleViolation) -> Self {
        Self::Rule(violation)
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
    pub fn infra_corrupt(detail: impl Into<String>) -> Self {
        Self::Infra(InfraErrorKind::DataCorruption, detail.into())
    }
}

/// Marker prefix used by the sea adapter to report a lost optimistic-lock
/// race through `DbErr::Custom`.
pub const OPTIMISTIC_LOCK_PREFIX: &str = "OPTIMISTIC_LOCK:";

// Adapter functions return DbErr; the repos layer maps to DomainError here.
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotFound(detail) => {
                DomainError::not_found(NotFoundKind::Game, detail)
            }
            sea_orm::DbErr::Custom(payload) if payload.starts_with(OPTIMISTIC_LOCK_PREFIX) => {
                DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    payload[OPTIMISTIC_LOCK_PREFIX.len()..].to_string(),
                )
            }
            other => DomainError::infra(InfraErrorKind::Other(other.to_string()), "db error"),
        }
    }
}
