use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::repos::games::GameWithDetails;
use crate::repos::hands::NewScore;
use crate::repos::players::Player;
use crate::services::claims::{ClaimOutcome, ClaimService};
use crate::services::games::GameService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub player_names: Vec<String>,
    pub initial_dealer_name: String,
}

#[derive(Debug, Serialize)]
struct CreateGameResponse {
    game_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreEntry {
    pub player_id: i64,
    pub score: i32,
}

#[derive(Debug, Deserialize)]
pub struct AddHandRequest {
    /// Absent or 0: use the next dealer in rotation
    #[serde(default)]
    pub dealer_player_id: Option<i64>,
    pub scores: Vec<ScoreEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ClaimPlayerRequest {
    pub player_id: i64,
}

#[derive(Debug, Serialize)]
struct ClaimPlayerResponse {
    success: bool,
}

#[derive(Debug, Serialize)]
struct GameContextResponse {
    game: GameWithDetails,
    is_admin: bool,
    claimed_player: Option<Player>,
}

fn game_not_found() -> AppError {
    AppError::not_found(ErrorCode::GameNotFound, "Game not found")
}

/// POST /api/games
///
/// A signed-in caller becomes the game's admin.
async fn create_game(
    app_state: web::Data<AppState>,
    user: Option<CurrentUser>,
    body: ValidatedJson<CreateGameRequest>,
) -> Result<HttpResponse, AppError> {
    let CreateGameRequest {
        player_names,
        initial_dealer_name,
    } = body.into_inner();
    let admin_id = user.map(|u| u.sub);

    let game = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = GameService::new();
            Ok(service
                .create_game(txn, &player_names, &initial_dealer_name, admin_id)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CreateGameResponse { game_id: game.id }))
}

/// GET /api/games/{game_id}
async fn get_game(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let db = require_db(&app_state)?;

    let game = GameService::new()
        .get_game(db, &game_id)
        .await?
        .ok_or_else(game_not_found)?;

    Ok(HttpResponse::Ok().json(game))
}

/// GET /api/games/{game_id}/next-dealer
async fn next_dealer(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let db = require_db(&app_state)?;

    let next = GameService::new().describe_next_dealer(db, &game_id).await?;
    Ok(HttpResponse::Ok().json(next))
}

/// POST /api/games/{game_id}/hands
async fn add_hand(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: ValidatedJson<AddHandRequest>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let AddHandRequest {
        dealer_player_id,
        scores,
    } = body.into_inner();
    let scores: Vec<NewScore> = scores
        .into_iter()
        .map(|s| NewScore {
            player_id: s.player_id,
            score: s.score,
        })
        .collect();

    let hand = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = GameService::new();
            Ok(service
                .add_hand(txn, &game_id, dealer_player_id, &scores)
                .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(hand))
}

/// POST /api/games/{game_id}/claim-player
async fn claim_player(
    app_state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<String>,
    body: ValidatedJson<ClaimPlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let player_id = body.player_id;
    let user_id = user.sub;

    let outcome = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = ClaimService::new();
            Ok(service
                .claim_player(txn, &game_id, player_id, &user_id)
                .await?)
        })
    })
    .await?;

    match outcome {
        ClaimOutcome::Claimed => Ok(HttpResponse::Ok().json(ClaimPlayerResponse { success: true })),
        ClaimOutcome::Rejected(reason) => Err(DomainError::from(reason).into()),
    }
}

/// GET /api/games/{game_id}/context
///
/// Anonymous callers get `is_admin: false` and no claimed player.
async fn game_context(
    app_state: web::Data<AppState>,
    user: Option<CurrentUser>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let db = require_db(&app_state)?;
    let service = GameService::new();

    let game = service
        .get_game(db, &game_id)
        .await?
        .ok_or_else(game_not_found)?;

    let (is_admin, claimed_player) = match user {
        Some(user) => (
            service.is_game_admin(db, &game_id, &user.sub).await?,
            service.get_claimed_player(db, &game_id, &user.sub).await?,
        ),
        None => (false, None),
    };

    Ok(HttpResponse::Ok().json(GameContextResponse {
        game,
        is_admin,
        claimed_player,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_game))
        .route("/{game_id}", web::get().to(get_game))
        .route("/{game_id}/next-dealer", web::get().to(next_dealer))
        .route("/{game_id}/hands", web::post().to(add_hand))
        .route("/{game_id}/claim-player", web::post().to(claim_player))
        .route("/{game_id}/context", web::get().to(game_context));
}
