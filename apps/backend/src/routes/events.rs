//! Live game updates over Server-Sent Events.

use std::future::ready;

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use bytes::Bytes;
use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use tokio_stream::wrappers::IntervalStream;
use tracing::{debug, warn};

use crate::db::require_db;
use crate::repos::games::GameWithDetails;
use crate::services::games::GameService;
use crate::state::app_state::AppState;
use crate::trace_ctx;

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum GameEvent {
    Connected {
        #[serde(rename = "gameId")]
        game_id: String,
    },
    GameUpdate {
        game: GameWithDetails,
    },
}

fn frame(event: &GameEvent) -> Option<Bytes> {
    match serde_json::to_string(event) {
        Ok(json) => Some(Bytes::from(format!("data: {json}\n\n"))),
        Err(e) => {
            warn!(error = %e, "failed to encode game event");
            None
        }
    }
}

/// One poll. Absent games and read failures produce no frame.
async fn poll_game(state: &AppState, game_id: &str) -> Option<Bytes> {
    let db = match require_db(state) {
        Ok(db) => db,
        Err(e) => {
            warn!(game_id = %game_id, error = %e, "game update skipped");
            return None;
        }
    };

    match GameService::new().get_game(db, game_id).await {
        Ok(Some(game)) => frame(&GameEvent::GameUpdate { game }),
        Ok(None) => {
            debug!(game_id = %game_id, "no game to push");
            None
        }
        Err(e) => {
            warn!(game_id = %game_id, error = %e, "game update failed");
            None
        }
    }
}

/// GET /api/games/{game_id}/events
///
/// Sends `connected`, then a full `game_update` right away and on every
/// poll interval. The stream ends when the client goes away and the body is
/// dropped.
async fn game_events(app_state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let game_id = path.into_inner();
    let trace_id = trace_ctx::trace_id();

    let connected = stream::iter(frame(&GameEvent::Connected {
        game_id: game_id.clone(),
    }));

    let interval = tokio::time::interval(app_state.live_update_interval);
    let updates = IntervalStream::new(interval)
        .then(move |_| {
            let state = app_state.clone();
            let game_id = game_id.clone();
            let trace_id = trace_id.clone();
            async move { trace_ctx::with_trace_id(trace_id, poll_game(&state, &game_id)).await }
        })
        .filter_map(ready);

    let body = connected
        .chain(updates)
        .map(Ok::<Bytes, actix_web::Error>);

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(body)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{game_id}/events", web::get().to(game_events));
}
