//! SeaORM adapter for hand_scores.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet, QueryFilter, QuerySelect,
    RelationTrait, Set,
};
use time::OffsetDateTime;

use crate::entities::{hand_scores, hands};

pub mod dto;

pub use dto::{PlayerTotalRow, ScoreCreate};

/// Insert one score row per entry for `hand_id`.
pub async fn create_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hand_id: i64,
    scores: &[ScoreCreate],
) -> Result<(), sea_orm::DbErr> {
    if scores.is_empty() {
        return Ok(());
    }

    let now = OffsetDateTime::now_utc();
    let rows = scores.iter().map(|s| hand_scores::ActiveModel {
        id: NotSet,
        hand_id: Set(hand_id),
        player_id: Set(s.player_id),
        score: Set(s.score),
        created_at: Set(now),
    });

    hand_scores::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

/// Per-player score sums for a game. Players without scores are absent.
pub async fn totals_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<PlayerTotalRow>, sea_orm::DbErr> {
    hand_scores::Entity::find()
        .select_only()
        .column_as(hand_scores::Column::PlayerId, "player_id")
        .column_as(
            Expr::col((hand_scores::Entity, hand_scores::Column::Score)).sum(),
            "total_score",
        )
        .join(JoinType::InnerJoin, hand_scores::Relation::Hand.def())
        .filter(hands::Column::GameId.eq(game_id))
        .group_by(hand_scores::Column::PlayerId)
        .into_model::<PlayerTotalRow>()
        .all(conn)
        .await
}

/// Sum of one player's scores within a game, 0 when none.
pub async fn total_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    player_id: i64,
) -> Result<i64, sea_orm::DbErr> {
    let total: Option<Option<i64>> = hand_scores::Entity::find()
        .select_only()
        .column_as(
            Expr::col((hand_scores::Entity, hand_scores::Column::Score)).sum(),
            "total_score",
        )
        .join(JoinType::InnerJoin, hand_scores::Relation::Hand.def())
        .filter(hands::Column::GameId.eq(game_id))
        .filter(hand_scores::Column::PlayerId.eq(player_id))
        .into_tuple()
        .one(conn)
        .await?;
    Ok(total.flatten().unwrap_or(0))
}
