//! Error codes for the scorepad API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,

    // Request Validation
    /// Player list outside 2-4
    InvalidPlayerCount,
    /// Initial dealer is not one of the players
    InvalidInitialDealer,
    /// Dealer id does not belong to the game
    InvalidDealer,
    /// Score set does not cover exactly the game's players
    IncompleteScores,
    /// Claim refused by a domain rule
    ClaimRejected,
    /// General validation error
    ValidationError,
    /// Malformed request body
    BadRequest,

    // Resource Not Found
    GameNotFound,
    PlayerNotFound,
    NotFound,

    // Conflicts
    /// Concurrent hand insert lost the hand-number race
    HandNumberConflict,
    /// Player already bound to a user
    PlayerAlreadyClaimed,
    /// Generic conflict (fallback)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    InternalError,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidInitialDealer => "INVALID_INITIAL_DEALER",
            Self::InvalidDealer => "INVALID_DEALER",
            Self::IncompleteScores => "INCOMPLETE_SCORES",
            Self::ClaimRejected => "CLAIM_REJECTED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::HandNumberConflict => "HAND_NUMBER_CONFLICT",
            Self::PlayerAlreadyClaimed => "PLAYER_ALREADY_CLAIMED",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
