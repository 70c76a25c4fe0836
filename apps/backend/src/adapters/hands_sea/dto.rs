//! DTOs for hands_sea adapter.

use sea_orm::FromQueryResult;
use time::OffsetDateTime;

/// DTO for inserting a hand. The hand number is assigned by the caller.
#[derive(Debug, Clone)]
pub struct HandCreate {
    pub game_id: String,
    pub hand_number: i32,
    pub dealer_player_id: i64,
}

/// One row of the hands x hand_scores join, dealer name included.
///
/// Score columns are null for a hand without scores.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct HandScoreRow {
    pub hand_id: i64,
    pub game_id: String,
    pub hand_number: i32,
    pub dealer_player_id: i64,
    pub hand_created_at: OffsetDateTime,
    pub dealer_name: String,
    pub score_id: Option<i64>,
    pub player_id: Option<i64>,
    pub score: Option<i32>,
    pub score_created_at: Option<OffsetDateTime>,
}
