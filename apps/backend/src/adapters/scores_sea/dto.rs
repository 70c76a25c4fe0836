//! DTOs for scores_sea adapter.

use sea_orm::FromQueryResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCreate {
    pub player_id: i64,
    pub score: i32,
}

/// Summed score per player over a game's hands.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct PlayerTotalRow {
    pub player_id: i64,
    pub total_score: Option<i64>,
}
