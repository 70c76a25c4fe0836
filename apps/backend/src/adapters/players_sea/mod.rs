//! SeaORM adapter for the players table.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use time::OffsetDateTime;

use crate::entities::{player_claims, players};

pub mod dto;

pub use dto::PlayerCreate;

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let player_active = players::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        name: Set(dto.name),
        user_id: Set(None),
        created_at: Set(OffsetDateTime::now_utc()),
    };

    player_active.insert(conn).await
}

/// All seats of a game in id order; rotation depends on this ordering.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::GameId.eq(game_id))
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

pub async fn find_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Id.eq(player_id))
        .filter(players::Column::GameId.eq(game_id))
        .one(conn)
        .await
}

/// The seat `user_id` holds a claim on within `game_id`, if any.
pub async fn find_claimed_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    user_id: &str,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .join(JoinType::InnerJoin, players::Relation::PlayerClaims.def())
        .filter(players::Column::GameId.eq(game_id))
        .filter(player_claims::Column::UserId.eq(user_id))
        .order_by_asc(players::Column::Id)
        .one(conn)
        .await
}

pub async fn set_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    user_id: &str,
) -> Result<(), sea_orm::DbErr> {
    let result = players::Entity::update_many()
        .col_expr(players::Column::UserId, Expr::value(user_id.to_string()))
        .filter(players::Column::Id.eq(player_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(
            "Player not found".to_string(),
        ));
    }
    Ok(())
}
