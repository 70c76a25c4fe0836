mod common;
mod support;

use backend_test_support::unique_helpers::{unique_str, unique_user_sub};
use scorepad::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use scorepad::repos::hands::NewScore;
use scorepad::services::games::GameService;
use support::build_test_state;
use support::factory::{names, record_hand, seed_game, seed_three_player_game};

#[tokio::test]
async fn create_game_seats_players_in_order() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap();

    let (game, seats) = seed_game(db, &["Dana", "Eli", "Dana"], "Dana").await;

    assert_eq!(game.id.len(), 26);
    assert_eq!(game.id, game.id.to_lowercase());
    assert_eq!(game.admin_id, None);

    let seat_names: Vec<&str> = seats.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(seat_names, ["Dana", "Eli", "Dana"]);
    // first matching name deals
    assert_eq!(game.initial_dealer_id, Some(seats[0].id));
    assert!(seats.iter().all(|p| p.user_id.is_none()));
}

#[tokio::test]
async fn create_game_rejects_bad_input() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap();
    let service = GameService::new();

    let err = service
        .create_game(db, &names(&["Solo"]), "Solo", None)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::validation(ValidationKind::PlayerCount, "Game must have 2-4 players")
    );

    let err = service
        .create_game(db, &names(&["Alice", "Bob"]), "Zed", None)
        .await
        .unwrap_err();
    assert_eq!(err.detail(), "Initial dealer must be one of the players");
}

#[tokio::test]
async fn create_game_records_admin() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap();
    let service = GameService::new();
    let admin = unique_user_sub();
    let other = unique_user_sub();

    let game = service
        .create_game(db, &names(&["Alice", "Bob"]), "Bob", Some(admin.clone()))
        .await
        .unwrap();

    assert!(service.is_game_admin(db, &game.id, &admin).await.unwrap());
    assert!(!service.is_game_admin(db, &game.id, &other).await.unwrap());
    assert!(!service
        .is_game_admin(db, &unique_str("game"), &admin)
        .await
        .unwrap());
}

#[tokio::test]
async fn dealer_rotates_and_totals_accumulate() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap();
    let service = GameService::new();
    let (game, seats) = seed_three_player_game(db).await;
    let (alice, bob, carol) = (seats[0].id, seats[1].id, seats[2].id);

    assert_eq!(service.get_next_dealer(db, &game.id).await.unwrap(), alice);

    let h1 = record_hand(db, &game.id, &seats, &[10, -5, 0]).await;
    let h2 = record_hand(db, &game.id, &seats, &[3, 3, -6]).await;
    let h3 = record_hand(db, &game.id, &seats, &[0, 0, 20]).await;

    assert_eq!(
        [h1.hand_number, h2.hand_number, h3.hand_number],
        [1, 2, 3]
    );
    assert_eq!(
        [h1.dealer_player_id, h2.dealer_player_id, h3.dealer_player_id],
        [alice, bob, carol]
    );
    // wraps back to the first seat
    assert_eq!(service.get_next_dealer(db, &game.id).await.unwrap(), alice);

    let totals: Vec<(String, i64)> = service
        .get_players_with_scores(db, &game.id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| (p.player.name, p.total_score))
        .collect();
    assert_eq!(
        totals,
        [
            ("Alice".to_string(), 13),
            ("Bob".to_string(), -2),
            ("Carol".to_string(), 14)
        ]
    );

    let details = service.get_game(db, &game.id).await.unwrap().unwrap();
    assert_eq!(details.hands.len(), 3);
    assert_eq!(details.hands[1].dealer_name, "Bob");
    let h2_scores: Vec<(i64, i32)> = details.hands[1]
        .scores
        .iter()
        .map(|s| (s.player_id, s.score))
        .collect();
    assert_eq!(h2_scores, [(alice, 3), (bob, 3), (carol, -6)]);
}

#[tokio::test]
async fn explicit_dealer_overrides_rotation() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap();
    let service = GameService::new();
    let (game, seats) = seed_three_player_game(db).await;
    let scores: Vec<NewScore> = seats
        .iter()
        .map(|p| NewScore {
            player_id: p.id,
            score: 1,
        })
        .collect();

    let hand = service
        .add_hand(db, &game.id, Some(seats[2].id), &scores)
        .await
        .unwrap();
    assert_eq!(hand.dealer_player_id, seats[2].id);

    // rotation continues from the chosen dealer
    assert_eq!(service.get_next_dealer(db, &game.id).await.unwrap(), seats[0].id);

    // zero means "next in rotation"
    let hand = service
        .add_hand(db, &game.id, Some(0), &scores)
        .await
        .unwrap();
    assert_eq!(hand.dealer_player_id, seats[0].id);
}

#[tokio::test]
async fn add_hand_validates_input() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap();
    let service = GameService::new();
    let (game, seats) = seed_three_player_game(db).await;
    let (other_game, other_seats) = seed_game(db, &["Xavier", "Yara"], "Yara").await;

    let full: Vec<NewScore> = seats
        .iter()
        .map(|p| NewScore {
            player_id: p.id,
            score: 5,
        })
        .collect();

    let err = service
        .add_hand(db, &unique_str("game"), None, &full)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::not_found(NotFoundKind::Game, "Game not found")
    );

    let err = service
        .add_hand(db, &game.id, Some(other_seats[0].id), &full)
        .await
        .unwrap_err();
    assert_eq!(err.detail(), "Invalid dealer player");

    let err = service
        .add_hand(db, &game.id, None, &full[..2])
        .await
        .unwrap_err();
    assert_eq!(err.detail(), "Scores must be provided for all players");

    let mut wrong_seat = full.clone();
    wrong_seat[2].player_id = other_seats[1].id;
    let err = service
        .add_hand(db, &game.id, None, &wrong_seat)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::IncompleteScores, _)
    ));

    // nothing was written by the refused calls
    assert!(service
        .get_hands_with_scores(db, &game.id)
        .await
        .unwrap()
        .is_empty());
    assert!(service
        .get_hands_with_scores(db, &other_game.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn recent_hands_keep_the_newest_in_ascending_order() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap();
    let service = GameService::new();
    let (game, seats) = seed_three_player_game(db).await;

    for n in 1..=5 {
        record_hand(db, &game.id, &seats, &[n, -n, 0]).await;
    }

    let recent = service
        .get_recent_hands_with_scores(db, &game.id, Some(2))
        .await
        .unwrap();
    let numbers: Vec<i32> = recent.iter().map(|h| h.hand.hand_number).collect();
    assert_eq!(numbers, [4, 5]);
    assert!(recent.iter().all(|h| h.scores.len() == 3));

    let all = service
        .get_recent_hands_with_scores(db, &game.id, None)
        .await
        .unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all[0].hand.hand_number, 1);
}

#[tokio::test]
async fn next_dealer_fallbacks() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap();
    let service = GameService::new();
    let missing = unique_str("game");

    // unknown game: no seats, literal fallback
    assert_eq!(service.get_next_dealer(db, &missing).await.unwrap(), 1);

    let err = service
        .describe_next_dealer(db, &missing)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));

    let (game, seats) = seed_game(db, &["Alice", "Bob"], "Bob").await;
    let next = service.describe_next_dealer(db, &game.id).await.unwrap();
    assert_eq!(next.dealer_id, seats[1].id);
    assert_eq!(next.dealer_name, "Bob");
}

#[tokio::test]
async fn get_game_for_unknown_id_is_none() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap();

    assert!(GameService::new()
        .get_game(db, "01hzzzzzzzzzzzzzzzzzzzzzzz")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn first_hand_uses_the_initial_dealer() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap();
    let service = GameService::new();
    let (game, seats) = seed_game(db, &["Alice", "Bob", "Carol"], "Bob").await;

    let hand = record_hand(db, &game.id, &seats, &[1, 2, 3]).await;
    assert_eq!(hand.hand_number, 1);
    assert_eq!(hand.dealer_player_id, seats[1].id);

    let next = service.describe_next_dealer(db, &game.id).await.unwrap();
    assert_eq!(next.dealer_id, seats[2].id);
    assert_eq!(next.dealer_name, "Carol");
}

#[tokio::test]
async fn hand_numbers_are_per_game_when_interleaved() {
    let state = build_test_state().await.unwrap();
    let db = state.db().unwrap();
    let service = GameService::new();
    let (pair, pair_seats) = seed_game(db, &["Ann", "Ben"], "Ben").await;
    let (table, table_seats) = seed_game(db, &["Cal", "Dee", "Eve", "Fay"], "Fay").await;

    let mut pair_hands = Vec::new();
    let mut table_hands = Vec::new();
    for round in 0..6 {
        if round < 3 {
            pair_hands.push(record_hand(db, &pair.id, &pair_seats, &[1, -1]).await);
        }
        table_hands.push(record_hand(db, &table.id, &table_seats, &[2, 0, 0, -2]).await);
    }

    let pair_numbers: Vec<i32> = pair_hands.iter().map(|h| h.hand_number).collect();
    let table_numbers: Vec<i32> = table_hands.iter().map(|h| h.hand_number).collect();
    assert_eq!(pair_numbers, [1, 2, 3]);
    assert_eq!(table_numbers, [1, 2, 3, 4, 5, 6]);

    // four seats: Fay, then around from Cal, wrapping back to Fay
    let dealer_names: Vec<&str> = table_hands
        .iter()
        .map(|h| {
            table_seats
                .iter()
                .find(|p| p.id == h.dealer_player_id)
                .map(|p| p.name.as_str())
                .unwrap()
        })
        .collect();
    assert_eq!(dealer_names, ["Fay", "Cal", "Dee", "Eve", "Fay", "Cal"]);

    let pair_dealers: Vec<i64> = pair_hands.iter().map(|h| h.dealer_player_id).collect();
    assert_eq!(
        pair_dealers,
        [pair_seats[1].id, pair_seats[0].id, pair_seats[1].id]
    );

    assert_eq!(
        service.get_hands_with_scores(db, &pair.id).await.unwrap().len(),
        3
    );
    assert_eq!(
        service.get_next_dealer(db, &table.id).await.unwrap(),
        table_seats[1].id
    );
}
