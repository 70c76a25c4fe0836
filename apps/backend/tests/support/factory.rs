//! Seed games through the services, the same path the routes take.

use scorepad::repos::games::Game;
use scorepad::repos::hands::{Hand, NewScore};
use scorepad::repos::players::Player;
use scorepad::services::games::GameService;
use sea_orm::DatabaseConnection;

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Alice, Bob and Carol with Alice dealing first.
pub async fn seed_three_player_game(db: &DatabaseConnection) -> (Game, Vec<Player>) {
    seed_game(db, &["Alice", "Bob", "Carol"], "Alice").await
}

pub async fn seed_game(
    db: &DatabaseConnection,
    players: &[&str],
    dealer: &str,
) -> (Game, Vec<Player>) {
    let service = GameService::new();
    let game = service
        .create_game(db, &names(players), dealer, None)
        .await
        .expect("create game");
    let seats = service
        .get_players_with_scores(db, &game.id)
        .await
        .expect("load players")
        .into_iter()
        .map(|p| p.player)
        .collect();
    (game, seats)
}

/// Record a hand with the rotation's dealer; `points` is in seat order.
pub async fn record_hand(
    db: &DatabaseConnection,
    game_id: &str,
    seats: &[Player],
    points: &[i32],
) -> Hand {
    let scores: Vec<NewScore> = seats
        .iter()
        .zip(points)
        .map(|(p, &score)| NewScore {
            player_id: p.id,
            score,
        })
        .collect();
    GameService::new()
        .add_hand(db, game_id, None, &scores)
        .await
        .expect("add hand")
}
