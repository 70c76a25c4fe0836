//! SeaORM adapter for player_claims.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use time::OffsetDateTime;

use crate::entities::{player_claims, players};

pub async fn create_claim<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    user_id: &str,
) -> Result<player_claims::Model, sea_orm::DbErr> {
    let claim_active = player_claims::ActiveModel {
        id: NotSet,
        player_id: Set(player_id),
        user_id: Set(user_id.to_string()),
        claimed_at: Set(OffsetDateTime::now_utc()),
    };

    claim_active.insert(conn).await
}

/// Claims held on any of `player_ids`, ordered by player id.
pub async fn find_by_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<player_claims::Model>, sea_orm::DbErr> {
    if player_ids.is_empty() {
        return Ok(Vec::new());
    }
    player_claims::Entity::find()
        .filter(player_claims::Column::PlayerId.is_in(player_ids.iter().copied()))
        .order_by_asc(player_claims::Column::PlayerId)
        .all(conn)
        .await
}

/// The claim `user_id` holds on a seat of `game_id`, if any.
pub async fn find_for_user_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    user_id: &str,
) -> Result<Option<player_claims::Model>, sea_orm::DbErr> {
    player_claims::Entity::find()
        .join(JoinType::InnerJoin, player_claims::Relation::Player.def())
        .filter(player_claims::Column::UserId.eq(user_id))
        .filter(players::Column::GameId.eq(game_id))
        .one(conn)
        .await
}
