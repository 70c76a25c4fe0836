use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(column_name = "total_games")]
    pub total_games: i32,
    #[sea_orm(column_name = "total_hands_played")]
    pub total_hands_played: i32,
    #[sea_orm(column_name = "best_score")]
    pub best_score: Option<i64>,
    #[sea_orm(column_name = "worst_score")]
    pub worst_score: Option<i64>,
    #[sea_orm(column_name = "average_score", column_type = "Double")]
    pub average_score: Option<f64>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
