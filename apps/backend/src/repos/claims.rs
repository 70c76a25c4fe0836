//! Player claim repository functions for domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::claims_sea;
use crate::entities::player_claims;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerClaim {
    pub id: i64,
    pub player_id: i64,
    pub user_id: String,
    pub claimed_at: OffsetDateTime,
}

pub async fn create_claim<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    user_id: &str,
) -> Result<PlayerClaim, DomainError> {
    let claim = claims_sea::create_claim(conn, player_id, user_id).await?;
    Ok(PlayerClaim::from(claim))
}

pub async fn find_by_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<PlayerClaim>, DomainError> {
    let claims = claims_sea::find_by_players(conn, player_ids).await?;
    Ok(claims.into_iter().map(PlayerClaim::from).collect())
}

pub async fn find_for_user_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    user_id: &str,
) -> Result<Option<PlayerClaim>, DomainError> {
    let claim = claims_sea::find_for_user_in_game(conn, game_id, user_id).await?;
    Ok(claim.map(PlayerClaim::from))
}

impl From<player_claims::Model> for PlayerClaim {
    fn from(model: player_claims::Model) -> Self {
        Self {
            id: model.id,
            player_id: model.player_id,
            user_id: model.user_id,
            claimed_at: model.claimed_at,
        }
    }
}
