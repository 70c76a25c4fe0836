//! SeaORM adapter for hands and the hand/score read join.

use sea_orm::sea_query::{Expr, Order};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use time::OffsetDateTime;

use crate::entities::{hand_scores, hands, players};

pub mod dto;

pub use dto::{HandCreate, HandScoreRow};

/// Highest recorded hand number, `None` for a game without hands.
pub async fn max_hand_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<i32>, sea_orm::DbErr> {
    let max: Option<Option<i32>> = hands::Entity::find()
        .select_only()
        .column_as(
            Expr::col((hands::Entity, hands::Column::HandNumber)).max(),
            "max_hand",
        )
        .filter(hands::Column::GameId.eq(game_id))
        .into_tuple()
        .one(conn)
        .await?;
    Ok(max.flatten())
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    hands::Entity::find()
        .filter(hands::Column::GameId.eq(game_id))
        .count(conn)
        .await
}

/// Most recent hand of a game by number.
pub async fn find_last<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<hands::Model>, sea_orm::DbErr> {
    hands::Entity::find()
        .filter(hands::Column::GameId.eq(game_id))
        .order_by_desc(hands::Column::HandNumber)
        .one(conn)
        .await
}

pub async fn create_hand<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: HandCreate,
) -> Result<hands::Model, sea_orm::DbErr> {
    let hand_active = hands::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        hand_number: Set(dto.hand_number),
        dealer_player_id: Set(dto.dealer_player_id),
        created_at: Set(OffsetDateTime::now_utc()),
    };

    hand_active.insert(conn).await
}

fn score_rows(game_id: &str) -> Select<hands::Entity> {
    hands::Entity::find()
        .select_only()
        .column_as(hands::Column::Id, "hand_id")
        .column_as(hands::Column::GameId, "game_id")
        .column_as(hands::Column::HandNumber, "hand_number")
        .column_as(hands::Column::DealerPlayerId, "dealer_player_id")
        .column_as(hands::Column::CreatedAt, "hand_created_at")
        .column_as(players::Column::Name, "dealer_name")
        .column_as(hand_scores::Column::Id, "score_id")
        .column_as(hand_scores::Column::PlayerId, "player_id")
        .column_as(hand_scores::Column::Score, "score")
        .column_as(hand_scores::Column::CreatedAt, "score_created_at")
        .join(JoinType::InnerJoin, hands::Relation::Dealer.def())
        .join(JoinType::LeftJoin, hands::Relation::HandScores.def())
        .filter(hands::Column::GameId.eq(game_id))
}

/// Joined hand/score rows ordered by hand number (`order`), then player id.
///
/// `row_limit` bounds rows, not hands.
pub async fn find_score_rows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    order: Order,
    row_limit: Option<u64>,
) -> Result<Vec<HandScoreRow>, sea_orm::DbErr> {
    let mut query = score_rows(game_id)
        .order_by(hands::Column::HandNumber, order)
        .order_by_asc(hand_scores::Column::PlayerId);

    if let Some(limit) = row_limit {
        query = query.limit(limit);
    }

    query.into_model::<HandScoreRow>().all(conn).await
}
