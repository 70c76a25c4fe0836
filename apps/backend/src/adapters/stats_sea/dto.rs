//! DTOs for stats_sea adapter.

/// Seed row written when a user claims a seat.
#[derive(Debug, Clone)]
pub struct GameStatsCreate {
    pub user_id: String,
    pub game_id: String,
    pub player_id: i64,
    pub total_score: i64,
    pub hands_played: i32,
}

/// Full replacement of a user's aggregate row.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStatsUpsert {
    pub user_id: String,
    pub total_games: i32,
    pub total_hands_played: i32,
    pub best_score: Option<i64>,
    pub worst_score: Option<i64>,
    pub average_score: Option<f64>,
}
