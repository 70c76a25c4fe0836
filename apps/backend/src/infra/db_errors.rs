//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here and higher layers
//! map `DomainError` to `AppError` via `From`. Raw driver messages are logged
//! server-side and never handed to clients.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Match a unique violation to the constraint it hit.
///
/// SQLite reports `UNIQUE constraint failed: table.col[, table.col]`;
/// Postgres reports the index or constraint name.
fn classify_unique_violation(error_msg: &str) -> (ConflictKind, &'static str) {
    if error_msg.contains("hands.game_id") || error_msg.contains("ux_hands_game_hand_number") {
        return (
            ConflictKind::HandNumber,
            "Another hand was recorded at the same time; please retry",
        );
    }
    if error_msg.contains("player_claims.player_id")
        || error_msg.contains("player_claims_player_id_key")
    {
        return (ConflictKind::PlayerClaim, "Player is already claimed");
    }
    if error_msg.contains("user_game_stats.user_id")
        || error_msg.contains("ux_user_game_stats_user_game")
    {
        return (
            ConflictKind::PlayerClaim,
            "You have already claimed a player in this game",
        );
    }
    (
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(what) => {
            warn!(trace_id = %trace_id, what = %what, "Record not found");
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        let (kind, detail) = classify_unique_violation(&error_msg);
        return DomainError::conflict(kind, detail);
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::conflict(
            ConflictKind::Other("ForeignKey".into()),
            "Referenced record does not exist",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbErr, RuntimeErr};

    use super::*;

    fn exec_err(msg: &str) -> DbErr {
        DbErr::Exec(RuntimeErr::Internal(msg.to_string()))
    }

    #[test]
    fn sqlite_hand_number_race_is_a_hand_conflict() {
        let e = exec_err("UNIQUE constraint failed: hands.game_id, hands.hand_number");
        assert!(matches!(
            map_db_err(e),
            DomainError::Conflict(ConflictKind::HandNumber, _)
        ));
    }

    #[test]
    fn postgres_claim_violation_is_a_claim_conflict() {
        let e = exec_err(
            "duplicate key value violates unique constraint \"player_claims_player_id_key\"",
        );
        assert_eq!(
            map_db_err(e),
            DomainError::conflict(ConflictKind::PlayerClaim, "Player is already claimed")
        );
    }

    #[test]
    fn unknown_unique_violation_falls_back() {
        let e = exec_err("UNIQUE constraint failed: other.col");
        assert!(matches!(
            map_db_err(e),
            DomainError::Conflict(ConflictKind::Other(_), _)
        ));
    }

    #[test]
    fn connection_errors_are_unavailable() {
        let e = DbErr::Conn(RuntimeErr::Internal("refused".into()));
        assert!(matches!(
            map_db_err(e),
            DomainError::Infra(InfraErrorKind::DbUnavailable, _)
        ));
    }

    #[test]
    fn everything_else_is_generic_infra() {
        let e = exec_err("syntax error at or near \"SELEC\"");
        match map_db_err(e) {
            DomainError::Infra(InfraErrorKind::Other(_), detail) => {
                assert_eq!(detail, "Database operation failed");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
