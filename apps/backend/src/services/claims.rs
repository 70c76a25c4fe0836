//! Seat claims.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::{claims, games, hands, players, stats};
use crate::services::users::UserService;

/// Why a claim was refused. Nothing is written for a refused claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimRejection {
    GameNotFound,
    PlayerNotInGame,
    AlreadyClaimed,
    UserAlreadyClaimedInGame,
}

impl ClaimRejection {
    pub fn message(&self) -> &'static str {
        match self {
            ClaimRejection::GameNotFound => "Game not found",
            ClaimRejection::PlayerNotInGame => "Player not found in this game",
            ClaimRejection::AlreadyClaimed => "Player is already claimed",
            ClaimRejection::UserAlreadyClaimedInGame => {
                "You have already claimed a player in this game"
            }
        }
    }
}

impl From<ClaimRejection> for DomainError {
    fn from(r: ClaimRejection) -> Self {
        DomainError::validation(ValidationKind::ClaimRejected, r.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed,
    Rejected(ClaimRejection),
}

pub struct ClaimService;

impl ClaimService {
    pub fn new() -> Self {
        Self
    }

    /// Bind `user_id` to a seat of `game_id`.
    ///
    /// On success the seat is marked, the claim row is written, the user's
    /// per-game row is seeded with the seat's current total and the game's
    /// hand count, and the user's aggregate is recomputed. Run inside a
    /// transaction.
    pub async fn claim_player<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
        player_id: i64,
        user_id: &str,
    ) -> Result<ClaimOutcome, DomainError> {
        if games::find_by_id(conn, game_id).await?.is_none() {
            return Ok(ClaimOutcome::Rejected(ClaimRejection::GameNotFound));
        }

        let Some(player) = players::find_in_game(conn, game_id, player_id).await? else {
            return Ok(ClaimOutcome::Rejected(ClaimRejection::PlayerNotInGame));
        };
        if player.user_id.is_some() {
            return Ok(ClaimOutcome::Rejected(ClaimRejection::AlreadyClaimed));
        }
        if claims::find_for_user_in_game(conn, game_id, user_id)
            .await?
            .is_some()
        {
            return Ok(ClaimOutcome::Rejected(
                ClaimRejection::UserAlreadyClaimedInGame,
            ));
        }

        players::set_user(conn, player_id, user_id).await?;
        claims::create_claim(conn, player_id, user_id).await?;

        let total = players::total_for_player(conn, game_id, player_id).await?;
        let hand_count = hands::count_by_game(conn, game_id).await?;
        stats::create_game_stats(
            conn,
            user_id,
            game_id,
            player_id,
            total,
            i32::try_from(hand_count).unwrap_or(i32::MAX),
        )
        .await?;

        UserService::new().update_user_stats(conn, user_id).await?;

        info!(game_id = %game_id, player_id, "player claimed");
        Ok(ClaimOutcome::Claimed)
    }
}

impl Default for ClaimService {
    fn default() -> Self {
        Self::new()
    }
}
