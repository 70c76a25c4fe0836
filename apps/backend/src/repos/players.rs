//! Player repository functions for domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::{players_sea, scores_sea};
use crate::entities::players;
use crate::errors::domain::DomainError;

/// Player seat domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: i64,
    pub game_id: String,
    pub name: String,
    /// Claiming user, once claimed
    pub user_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerWithScore {
    #[serde(flatten)]
    pub player: Player,
    pub total_score: i64,
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    name: &str,
) -> Result<Player, DomainError> {
    let player =
        players_sea::create_player(conn, players_sea::PlayerCreate::new(game_id, name)).await?;
    Ok(Player::from(player))
}

/// Seats of a game ordered by id.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<Player>, DomainError> {
    let rows = players_sea::find_all_by_game(conn, game_id).await?;
    Ok(rows.into_iter().map(Player::from).collect())
}

pub async fn find_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let player = players_sea::find_in_game(conn, game_id, player_id).await?;
    Ok(player.map(Player::from))
}

pub async fn find_claimed_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    user_id: &str,
) -> Result<Option<Player>, DomainError> {
    let player = players_sea::find_claimed_by_user(conn, game_id, user_id).await?;
    Ok(player.map(Player::from))
}

pub async fn set_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    user_id: &str,
) -> Result<(), DomainError> {
    players_sea::set_user(conn, player_id, user_id).await?;
    Ok(())
}

/// Seats of a game with their running totals, ordered by id. Seats without
/// scores total 0.
pub async fn find_with_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<PlayerWithScore>, DomainError> {
    let players = find_all_by_game(conn, game_id).await?;
    let totals: HashMap<i64, i64> = scores_sea::totals_by_game(conn, game_id)
        .await?
        .into_iter()
        .map(|row| (row.player_id, row.total_score.unwrap_or(0)))
        .collect();

    Ok(players
        .into_iter()
        .map(|player| PlayerWithScore {
            total_score: totals.get(&player.id).copied().unwrap_or(0),
            player,
        })
        .collect())
}

/// One seat's total within a game.
pub async fn total_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    player_id: i64,
) -> Result<i64, DomainError> {
    Ok(scores_sea::total_for_player(conn, game_id, player_id).await?)
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            name: model.name,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}
