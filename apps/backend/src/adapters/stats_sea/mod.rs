//! SeaORM adapter for user_game_stats and user_stats.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::entities::{user_game_stats, user_stats};

pub mod dto;

pub use dto::{GameStatsCreate, UserStatsUpsert};

pub async fn create_game_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameStatsCreate,
) -> Result<user_game_stats::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let stats_active = user_game_stats::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        game_id: Set(dto.game_id),
        player_id: Set(dto.player_id),
        total_score: Set(dto.total_score),
        hands_played: Set(dto.hands_played),
        created_at: Set(now),
        updated_at: Set(now),
    };

    stats_active.insert(conn).await
}

/// Add one hand's score to the claimant's per-game row.
pub async fn record_hand<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
    game_id: &str,
    player_id: i64,
    score: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = user_game_stats::Entity::update_many()
        .col_expr(
            user_game_stats::Column::TotalScore,
            Expr::col(user_game_stats::Column::TotalScore).add(i64::from(score)),
        )
        .col_expr(
            user_game_stats::Column::HandsPlayed,
            Expr::col(user_game_stats::Column::HandsPlayed).add(1),
        )
        .col_expr(
            user_game_stats::Column::UpdatedAt,
            Expr::value(OffsetDateTime::now_utc()),
        )
        .filter(user_game_stats::Column::UserId.eq(user_id))
        .filter(user_game_stats::Column::GameId.eq(game_id))
        .filter(user_game_stats::Column::PlayerId.eq(player_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Every per-game row of a user, most recently updated first.
pub async fn find_game_stats_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<user_game_stats::Model>, sea_orm::DbErr> {
    user_game_stats::Entity::find()
        .filter(user_game_stats::Column::UserId.eq(user_id))
        .order_by_desc(user_game_stats::Column::UpdatedAt)
        .order_by_desc(user_game_stats::Column::Id)
        .all(conn)
        .await
}

pub async fn find_user_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Option<user_stats::Model>, sea_orm::DbErr> {
    user_stats::Entity::find_by_id(user_id.to_string())
        .one(conn)
        .await
}

/// Insert or overwrite the aggregate row keyed by `user_id`.
pub async fn upsert_user_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserStatsUpsert,
) -> Result<(), sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let stats_active = user_stats::ActiveModel {
        user_id: Set(dto.user_id),
        total_games: Set(dto.total_games),
        total_hands_played: Set(dto.total_hands_played),
        best_score: Set(dto.best_score),
        worst_score: Set(dto.worst_score),
        average_score: Set(dto.average_score),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user_stats::Entity::insert(stats_active)
        .on_conflict(
            OnConflict::column(user_stats::Column::UserId)
                .update_columns([
                    user_stats::Column::TotalGames,
                    user_stats::Column::TotalHandsPlayed,
                    user_stats::Column::BestScore,
                    user_stats::Column::WorstScore,
                    user_stats::Column::AverageScore,
                    user_stats::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}
