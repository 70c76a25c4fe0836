// Unit tests for DomainError -> AppError mapping; no HTTP or database involved.
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400_with_specific_codes() {
    let cases = [
        (ValidationKind::PlayerCount, ErrorCode::InvalidPlayerCount),
        (ValidationKind::InitialDealer, ErrorCode::InvalidInitialDealer),
        (ValidationKind::InvalidDealer, ErrorCode::InvalidDealer),
        (ValidationKind::IncompleteScores, ErrorCode::IncompleteScores),
        (ValidationKind::ClaimRejected, ErrorCode::ClaimRejected),
        (ValidationKind::Other("x".into()), ErrorCode::ValidationError),
    ];

    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "nope").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status().as_u16(), 400);
        assert_eq!(app.detail(), "nope");
    }
}

#[test]
fn maps_conflicts() {
    let app: AppError = DomainError::conflict(ConflictKind::HandNumber, "race").into();
    assert_eq!(app.code().as_str(), "HAND_NUMBER_CONFLICT");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError = DomainError::conflict(ConflictKind::PlayerClaim, "taken").into();
    assert_eq!(app.code().as_str(), "PLAYER_ALREADY_CLAIMED");

    let app: AppError = DomainError::conflict(ConflictKind::Other("x".into()), "generic").into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "Game not found").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(app.detail(), "Game not found");
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::infra(InfraErrorKind::Other("x".into()), "boom").into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
    // generic message for 5xx
    assert_eq!(app.detail(), "Internal server error");
}

#[test]
fn domain_error_detail_drops_kind() {
    let e = DomainError::validation(ValidationKind::PlayerCount, "Game must have 2-4 players");
    assert_eq!(e.detail(), "Game must have 2-4 players");
    assert!(e.to_string().contains("PlayerCount"));
}
