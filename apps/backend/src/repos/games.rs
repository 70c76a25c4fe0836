//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::entities::games;
use crate::errors::domain::DomainError;
use crate::repos::hands::HandWithScores;
use crate::repos::players::PlayerWithScore;

/// Game domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: String,
    pub initial_dealer_id: Option<i64>,
    pub admin_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Full read view: the game plus its players (with totals) and hands (with scores).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameWithDetails {
    #[serde(flatten)]
    pub game: Game,
    pub players: Vec<PlayerWithScore>,
    pub hands: Vec<HandWithScores>,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    admin_id: Option<String>,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameCreate::new(id).with_admin(admin_id);
    let game = games_adapter::create_game(conn, dto).await?;
    Ok(Game::from(game))
}

pub async fn set_initial_dealer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
    player_id: i64,
) -> Result<(), DomainError> {
    games_adapter::set_initial_dealer(conn, game_id, player_id).await?;
    Ok(())
}

pub async fn touch<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<(), DomainError> {
    games_adapter::touch(conn, game_id).await?;
    Ok(())
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            initial_dealer_id: model.initial_dealer_id,
            admin_id: model.admin_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
