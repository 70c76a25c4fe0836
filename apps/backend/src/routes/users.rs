use actix_web::{web, HttpResponse};
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::repos::stats::UserStats;
use crate::services::users::UserService;
use crate::state::app_state::AppState;

/// GET /api/users/me/stats
///
/// A user with no claims yet gets zeroed stats rather than a 404.
async fn my_stats(
    app_state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let stats = UserService::new()
        .get_user_stats(db, &user.sub)
        .await?
        .unwrap_or_else(|| UserStats::empty(user.sub, OffsetDateTime::now_utc()));

    Ok(HttpResponse::Ok().json(stats))
}

/// GET /api/users/me/games
async fn my_games(
    app_state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let games = UserService::new().get_user_games(db, &user.sub).await?;
    Ok(HttpResponse::Ok().json(games))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me/stats", web::get().to(my_stats))
        .route("/me/games", web::get().to(my_games));
}
