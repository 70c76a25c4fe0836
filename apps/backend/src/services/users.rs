//! User statistics services.

use sea_orm::ConnectionTrait;

use crate::domain::stats::{summarize, GameTotal};
use crate::errors::domain::DomainError;
use crate::repos::games::GameWithDetails;
use crate::repos::stats::{self, UserStats};
use crate::services::games::GameService;

pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    pub async fn get_user_stats<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: &str,
    ) -> Result<Option<UserStats>, DomainError> {
        stats::find_user_stats(conn, user_id).await
    }

    /// Games the user holds a seat in, most recently updated first.
    pub async fn get_user_games<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: &str,
    ) -> Result<Vec<GameWithDetails>, DomainError> {
        let rows = stats::find_game_stats(conn, user_id).await?;

        let mut game_ids: Vec<String> = Vec::with_capacity(rows.len());
        for row in rows {
            if !game_ids.contains(&row.game_id) {
                game_ids.push(row.game_id);
            }
        }

        let game_service = GameService::new();
        let mut games = Vec::with_capacity(game_ids.len());
        for game_id in &game_ids {
            if let Some(game) = game_service.get_game(conn, game_id).await? {
                games.push(game);
            }
        }
        Ok(games)
    }

    /// Recompute and store the user's cross-game aggregate.
    pub async fn update_user_stats<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: &str,
    ) -> Result<(), DomainError> {
        let rows = stats::find_game_stats(conn, user_id).await?;
        let totals: Vec<GameTotal<'_>> = rows
            .iter()
            .map(|r| GameTotal {
                game_id: &r.game_id,
                total_score: r.total_score,
                hands_played: r.hands_played,
            })
            .collect();

        stats::save_user_stats(conn, user_id, summarize(&totals)).await
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
