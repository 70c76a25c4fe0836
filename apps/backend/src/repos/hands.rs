//! Hand repository functions for domain layer.

use sea_orm::sea_query::Order;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::hands_sea::{self, HandCreate, HandScoreRow};
use crate::adapters::scores_sea::{self, ScoreCreate};
use crate::domain::hand_rows::{group_by_hand, newest_ascending};
use crate::domain::MAX_PLAYERS;
use crate::entities::hands;
use crate::errors::domain::DomainError;

/// Hand domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hand {
    pub id: i64,
    pub game_id: String,
    pub hand_number: i32,
    pub dealer_player_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandScore {
    pub id: i64,
    pub hand_id: i64,
    pub player_id: i64,
    pub score: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A hand with its dealer's name and its scores ordered by player id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandWithScores {
    #[serde(flatten)]
    pub hand: Hand,
    pub dealer_name: String,
    pub scores: Vec<HandScore>,
}

/// One entry of a hand being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewScore {
    pub player_id: i64,
    pub score: i32,
}

/// Number the next hand of a game would get.
pub async fn next_hand_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<i32, DomainError> {
    let max = hands_sea::max_hand_number(conn, game_id).await?;
    Ok(max.unwrap_or(0) + 1)
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<u64, DomainError> {
    Ok(hands_sea::count_by_game(conn, game_id).await?)
}

/// Dealer of the highest-numbered hand, if any hand exists.
pub async fn last_dealer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<i64>, DomainError> {
    let last = hands_sea::find_last(conn, game_id).await?;
    Ok(last.map(|h| h.dealer_player_id))
}

/// Insert a hand and its scores.
pub async fn create_hand<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    hand_number: i32,
    dealer_player_id: i64,
    scores: &[NewScore],
) -> Result<Hand, DomainError> {
    let hand = hands_sea::create_hand(
        conn,
        HandCreate {
            game_id: game_id.to_string(),
            hand_number,
            dealer_player_id,
        },
    )
    .await?;

    let rows: Vec<ScoreCreate> = scores
        .iter()
        .map(|s| ScoreCreate {
            player_id: s.player_id,
            score: s.score,
        })
        .collect();
    scores_sea::create_scores(conn, hand.id, &rows).await?;

    Ok(Hand::from(hand))
}

/// Every hand of a game in number order.
pub async fn find_with_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Vec<HandWithScores>, DomainError> {
    let rows = hands_sea::find_score_rows(conn, game_id, Order::Asc, None).await?;
    Ok(group_rows(rows))
}

/// Up to `limit` most recent hands, returned oldest first.
///
/// Reads at most `limit * MAX_PLAYERS` rows, so the oldest hand of the window
/// can come back with only part of its scores when rows run out.
pub async fn find_recent_with_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    limit: u64,
) -> Result<Vec<HandWithScores>, DomainError> {
    let row_limit = limit.saturating_mul(MAX_PLAYERS as u64);
    let rows = hands_sea::find_score_rows(conn, game_id, Order::Desc, Some(row_limit)).await?;
    let newest_first = group_rows(rows);
    Ok(newest_ascending(
        newest_first,
        usize::try_from(limit).unwrap_or(usize::MAX),
    ))
}

fn group_rows(rows: Vec<HandScoreRow>) -> Vec<HandWithScores> {
    let keyed = rows.into_iter().map(|row| {
        let score = match (row.score_id, row.player_id, row.score) {
            (Some(id), Some(player_id), Some(score)) => Some(HandScore {
                id,
                hand_id: row.hand_id,
                player_id,
                score,
                created_at: row.score_created_at.unwrap_or(row.hand_created_at),
            }),
            _ => None,
        };
        let head = (
            Hand {
                id: row.hand_id,
                game_id: row.game_id,
                hand_number: row.hand_number,
                dealer_player_id: row.dealer_player_id,
                created_at: row.hand_created_at,
            },
            row.dealer_name,
        );
        (row.hand_id, head, score)
    });

    group_by_hand(keyed)
        .into_iter()
        .map(|((hand, dealer_name), scores)| HandWithScores {
            hand,
            dealer_name,
            scores,
        })
        .collect()
}

impl From<hands::Model> for Hand {
    fn from(model: hands::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            hand_number: model.hand_number,
            dealer_player_id: model.dealer_player_id,
            created_at: model.created_at,
        }
    }
}
