//! Per-game and aggregate user statistics.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::stats_sea::{self, GameStatsCreate, UserStatsUpsert};
use crate::domain::stats::StatsSummary;
use crate::entities::{user_game_stats, user_stats};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserGameStats {
    pub id: i64,
    pub user_id: String,
    pub game_id: String,
    pub player_id: i64,
    pub total_score: i64,
    pub hands_played: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_id: String,
    pub total_games: i32,
    pub total_hands_played: i32,
    pub best_score: Option<i64>,
    pub worst_score: Option<i64>,
    pub average_score: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl UserStats {
    /// Zeroed stats for a user with no claimed seats.
    pub fn empty(user_id: String, now: OffsetDateTime) -> Self {
        Self {
            user_id,
            total_games: 0,
            total_hands_played: 0,
            best_score: None,
            worst_score: None,
            average_score: None,
            created_at: now,
            updated_at: now,
        }
    }
}

pub async fn create_game_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
    game_id: &str,
    player_id: i64,
    total_score: i64,
    hands_played: i32,
) -> Result<UserGameStats, DomainError> {
    let row = stats_sea::create_game_stats(
        conn,
        GameStatsCreate {
            user_id: user_id.to_string(),
            game_id: game_id.to_string(),
            player_id,
            total_score,
            hands_played,
        },
    )
    .await?;
    Ok(UserGameStats::from(row))
}

pub async fn record_hand<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
    game_id: &str,
    player_id: i64,
    score: i32,
) -> Result<(), DomainError> {
    stats_sea::record_hand(conn, user_id, game_id, player_id, score).await?;
    Ok(())
}

/// Per-game rows of a user, most recently updated first.
pub async fn find_game_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<UserGameStats>, DomainError> {
    let rows = stats_sea::find_game_stats_for_user(conn, user_id).await?;
    Ok(rows.into_iter().map(UserGameStats::from).collect())
}

pub async fn find_user_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Option<UserStats>, DomainError> {
    let row = stats_sea::find_user_stats(conn, user_id).await?;
    Ok(row.map(UserStats::from))
}

pub async fn save_user_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
    summary: StatsSummary,
) -> Result<(), DomainError> {
    stats_sea::upsert_user_stats(
        conn,
        UserStatsUpsert {
            user_id: user_id.to_string(),
            total_games: summary.total_games,
            total_hands_played: summary.total_hands_played,
            best_score: summary.best_score,
            worst_score: summary.worst_score,
            average_score: summary.average_score,
        },
    )
    .await?;
    Ok(())
}

impl From<user_game_stats::Model> for UserGameStats {
    fn from(model: user_game_stats::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            game_id: model.game_id,
            player_id: model.player_id,
            total_score: model.total_score,
            hands_played: model.hands_played,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<user_stats::Model> for UserStats {
    fn from(model: user_stats::Model) -> Self {
        Self {
            user_id: model.user_id,
            total_games: model.total_games,
            total_hands_played: model.total_hands_played,
            best_score: model.best_score,
            worst_score: model.worst_score,
            average_score: model.average_score,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
