//! SeaORM adapter for the games table.

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use time::OffsetDateTime;

use crate::entities::games;

pub mod dto;

pub use dto::GameCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id.to_string()).one(conn).await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: Set(dto.id),
        initial_dealer_id: Set(None),
        admin_id: Set(dto.admin_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

/// Record the initial dealer once the players exist.
pub async fn set_initial_dealer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    player_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let result = games::Entity::update_many()
        .col_expr(games::Column::InitialDealerId, Expr::value(player_id))
        .filter(games::Column::Id.eq(game_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound("Game not found".to_string()));
    }
    Ok(())
}

/// Bump `updated_at`. Missing games are ignored.
pub async fn touch<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<(), sea_orm::DbErr> {
    games::Entity::update_many()
        .col_expr(
            games::Column::UpdatedAt,
            Expr::value(OffsetDateTime::now_utc()),
        )
        .filter(games::Column::Id.eq(game_id))
        .exec(conn)
        .await?;
    Ok(())
}
