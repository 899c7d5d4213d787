use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, RuleViolation};
use crate::errors::ErrorCode;

#[test]
fn rule_violations_map_to_stable_codes() {
    let cases = [
        (RuleViolation::InvalidCoordinate, ErrorCode::InvalidCoordinate),
        (RuleViolation::InvalidMove, ErrorCode::InvalidMove),
        (RuleViolation::GameNotActive, ErrorCode::GameNotActive),
        (RuleViolation::GameFinished, ErrorCode::GameFinished),
        (RuleViolation::NotPlayerTurn, ErrorCode::NotPlayerTurn),
        (RuleViolation::AlreadyInGame, ErrorCode::AlreadyInGame),
        (RuleViolation::CannotJoin, ErrorCode::CannotJoin),
    ];
    for (violation, code) in cases {
        let err = AppError::from(DomainError::rule(violation));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST, "{violation:?}");
        assert_eq!(err.code(), code, "{violation:?}");
        assert_eq!(err.detail(), violation.message(), "{violation:?}");
    }
}

#[test]
fn non_member_is_forbidden() {
    let err = AppError::from(DomainError::rule(RuleViolation::NotAMember));
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
    assert_eq!(err.code(), ErrorCode::NotAMember);
}

#[test]
fn missing_game_is_not_found() {
    let err = AppError::from(DomainError::not_found(NotFoundKind::Game, "g1"));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.code(), ErrorCode::GameNotFound);
}

#[test]
fn lost_race_is_a_conflict_with_generic_text() {
    let err = AppError::from(DomainError::conflict(
        ConflictKind::OptimisticLock,
        "expected version 3, row has 4",
    ));
    assert_eq!(err.status(), StatusCode::CONFLICT);
    assert_eq!(err.code(), ErrorCode::ConcurrentModification);
    // The raw version payload stays out of the user-facing text.
    assert!(!err.detail().contains("version 3"));
}

#[test]
fn optimistic_lock_payload_survives_the_dberr_channel() {
    let db_err =
        sea_orm::DbErr::Custom("OPTIMISTIC_LOCK:expected version 1, row has 2".to_string());
    let domain = DomainError::from(db_err);
    assert!(matches!(
        domain,
        DomainError::Conflict(ConflictKind::OptimisticLock, _)
    ));

    let not_found = DomainError::from(sea_orm::DbErr::RecordNotFound("Game g1 not found".into()));
    assert!(matches!(
        not_found,
        DomainError::NotFound(NotFoundKind::Game, _)
    ));
}

#[test]
fn rule_messages_are_human_readable() {
    // These texts are surfaced verbatim to the player.
    assert_eq!(
        DomainError::rule(RuleViolation::NotPlayerTurn).to_string(),
        "It is not your turn"
    );
    assert_eq!(
        DomainError::rule(RuleViolation::InvalidMove).to_string(),
        "That cell is already taken"
    );
}
