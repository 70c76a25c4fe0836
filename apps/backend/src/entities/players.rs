use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_id")]
    pub game_id: String,
    pub name: String,
    /// Claiming user identity, set once by a claim
    #[sea_orm(column_name = "user_id")]
    pub user_id: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id"
    )]
    Game,
    #[sea_orm(has_many = "super::hand_scores::Entity")]
    HandScores,
    #[sea_orm(has_one = "super::player_claims::Entity")]
    PlayerClaims,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::hand_scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HandScores.def()
    }
}

impl Related<super::player_claims::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerClaims.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
