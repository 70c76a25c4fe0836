mod common;
mod support;

use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::http::{header, StatusCode};
use actix_web::test;
use futures_util::future::poll_fn;
use serde_json::Value;
use support::factory::{record_hand, seed_three_player_game};
use support::{build_test_state, create_test_app};

/// Next SSE frame as JSON; `None` when nothing arrives within `wait`.
async fn next_event<B: MessageBody>(
    body: &mut std::pin::Pin<Box<B>>,
    wait: Duration,
) -> Option<Value> {
    let chunk = tokio::time::timeout(wait, poll_fn(|cx| body.as_mut().poll_next(cx)))
        .await
        .ok()?;
    let bytes = match chunk {
        Some(Ok(bytes)) => bytes,
        _ => panic!("event stream ended or failed"),
    };
    let text = std::str::from_utf8(&bytes).expect("utf-8 frame");
    let json = text
        .strip_prefix("data: ")
        .and_then(|rest| rest.strip_suffix("\n\n"))
        .expect("SSE data frame");
    Some(serde_json::from_str(json).expect("frame JSON"))
}

#[actix_web::test]
async fn stream_announces_then_pushes_the_game() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap().clone();
    let (game, seats) = seed_three_player_game(&db).await;
    record_hand(&db, &game.id, &seats, &[4, 0, -4]).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}/events", game.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/event-stream"
    );
    assert_eq!(
        resp.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-cache"
    );

    let mut body = Box::pin(resp.into_body());

    let connected = next_event(&mut body, Duration::from_secs(2)).await.unwrap();
    assert_eq!(connected["type"], "connected");
    assert_eq!(connected["gameId"], game.id.as_str());

    let update = next_event(&mut body, Duration::from_secs(2)).await.unwrap();
    assert_eq!(update["type"], "game_update");
    assert_eq!(update["game"]["id"], game.id.as_str());
    assert_eq!(update["game"]["hands"].as_array().unwrap().len(), 1);

    // later polls see new hands
    record_hand(&db, &game.id, &seats, &[1, 1, 1]).await;
    let mut hands = 1;
    for _ in 0..10 {
        let update = next_event(&mut body, Duration::from_secs(2)).await.unwrap();
        hands = update["game"]["hands"].as_array().unwrap().len();
        if hands == 2 {
            break;
        }
    }
    assert_eq!(hands, 2);
}

#[actix_web::test]
async fn unknown_game_only_gets_connected() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/games/missing/events")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let mut body = Box::pin(resp.into_body());
    let connected = next_event(&mut body, Duration::from_secs(2)).await.unwrap();
    assert_eq!(connected["gameId"], "missing");

    assert!(next_event(&mut body, Duration::from_millis(150))
        .await
        .is_none());
}
