mod common;
mod support;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use backend_test_support::unique_helpers::unique_user_sub;
use serde_json::{json, Value};
use support::auth::bearer_header;
use support::{build_test_state, create_test_app};

#[actix_web::test]
async fn new_user_gets_zeroed_stats_and_no_games() {
    let state = build_test_state().await.unwrap();
    let security = state.security.clone();
    let app = create_test_app(state).await;
    let user = unique_user_sub();
    let auth = bearer_header(&user, &security);

    let req = test::TestRequest::get()
        .uri("/api/users/me/stats")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["user_id"], user.as_str());
    assert_eq!(stats["total_games"], 0);
    assert_eq!(stats["total_hands_played"], 0);
    assert_eq!(stats["best_score"], Value::Null);
    assert_eq!(stats["worst_score"], Value::Null);
    assert_eq!(stats["average_score"], Value::Null);
    assert!(stats["created_at"].is_string());

    let req = test::TestRequest::get()
        .uri("/api/users/me/games")
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    let games: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(games, json!([]));
}

#[actix_web::test]
async fn claimed_games_show_up_for_the_user() {
    let state = build_test_state().await.unwrap();
    let security = state.security.clone();
    let app = create_test_app(state).await;
    let user = unique_user_sub();
    let auth = bearer_header(&user, &security);

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(json!({ "player_names": ["Alice", "Bob"], "initial_dealer_name": "Bob" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let game_id = created["game_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{game_id}"))
        .to_request();
    let game: Value = test::call_and_read_body_json(&app, req).await;
    let alice = game["players"][0]["id"].as_i64().unwrap();
    let bob = game["players"][1]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{game_id}/claim-player"))
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(json!({ "player_id": alice }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{game_id}/hands"))
        .set_json(json!({
            "scores": [
                { "player_id": alice, "score": 7 },
                { "player_id": bob, "score": 2 }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/users/me/stats")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["total_games"], 1);
    assert_eq!(stats["total_hands_played"], 1);
    assert_eq!(stats["best_score"], 7);
    assert_eq!(stats["average_score"], 7.0);

    let req = test::TestRequest::get()
        .uri("/api/users/me/games")
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    let games: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(games.as_array().unwrap().len(), 1);
    assert_eq!(games[0]["id"], game_id.as_str());
    assert_eq!(games[0]["players"][0]["user_id"], user.as_str());
}

#[actix_web::test]
async fn user_routes_require_a_session() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).await;

    for uri in ["/api/users/me/stats", "/api/users/me/games"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            "UNAUTHORIZED_MISSING_BEARER",
            StatusCode::UNAUTHORIZED,
            Some("Bearer"),
        )
        .await;
    }
}
