//! Game, seat and hand orchestration.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::rotation::next_dealer;
use crate::domain::validation::{
    requested_dealer, validate_dealer, validate_new_game, validate_score_set,
};
use crate::domain::DEFAULT_RECENT_HANDS;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::{Game, GameWithDetails};
use crate::repos::hands::{Hand, HandWithScores, NewScore};
use crate::repos::players::{Player, PlayerWithScore};
use crate::repos::{claims, games, hands, players, stats};
use crate::services::users::UserService;
use crate::utils::game_code::new_game_id;

/// Dealer pick with the seat's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextDealer {
    pub dealer_id: i64,
    /// `Unknown` when the id matches no seat
    pub dealer_name: String,
}

fn game_not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Game, "Game not found")
}

/// Game domain service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Create a game with one seat per name, in input order.
    ///
    /// The first seat named `initial_dealer_name` becomes the initial dealer.
    /// Run inside a transaction: the game row, seats and dealer link are
    /// separate writes.
    pub async fn create_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_names: &[String],
        initial_dealer_name: &str,
        admin_id: Option<String>,
    ) -> Result<Game, DomainError> {
        validate_new_game(player_names, initial_dealer_name)?;

        let id = new_game_id();
        let mut game = games::create_game(conn, &id, admin_id).await?;

        let mut initial_dealer = None;
        for name in player_names {
            let player = players::create_player(conn, &id, name).await?;
            if initial_dealer.is_none() && name == initial_dealer_name {
                initial_dealer = Some(player.id);
            }
        }

        if let Some(dealer_id) = initial_dealer {
            games::set_initial_dealer(conn, &id, dealer_id).await?;
            game.initial_dealer_id = Some(dealer_id);
        }

        info!(game_id = %id, players = player_names.len(), "game created");
        Ok(game)
    }

    pub async fn get_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
    ) -> Result<Option<GameWithDetails>, DomainError> {
        let Some(game) = games::find_by_id(conn, game_id).await? else {
            return Ok(None);
        };

        let players = players::find_with_scores(conn, game_id).await?;
        let hands = hands::find_with_scores(conn, game_id).await?;

        Ok(Some(GameWithDetails {
            game,
            players,
            hands,
        }))
    }

    pub async fn get_players_with_scores<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
    ) -> Result<Vec<PlayerWithScore>, DomainError> {
        players::find_with_scores(conn, game_id).await
    }

    pub async fn get_hands_with_scores<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
    ) -> Result<Vec<HandWithScores>, DomainError> {
        hands::find_with_scores(conn, game_id).await
    }

    /// The newest `limit` hands (default 20) in ascending order.
    pub async fn get_recent_hands_with_scores<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
        limit: Option<u64>,
    ) -> Result<Vec<HandWithScores>, DomainError> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_HANDS);
        hands::find_recent_with_scores(conn, game_id, limit).await
    }

    /// Record a hand.
    ///
    /// A missing (or zero) dealer is replaced by the next dealer in rotation.
    /// Scores must name every seat exactly. Claimed seats feed their
    /// claimant's per-game row, then that user's aggregate is recomputed.
    pub async fn add_hand<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
        dealer_player_id: Option<i64>,
        scores: &[NewScore],
    ) -> Result<Hand, DomainError> {
        let game = games::find_by_id(conn, game_id)
            .await?
            .ok_or_else(game_not_found)?;
        let seats = players::find_all_by_game(conn, game_id).await?;
        let seat_ids: Vec<i64> = seats.iter().map(|p| p.id).collect();

        let dealer_id = match requested_dealer(dealer_player_id) {
            Some(id) => {
                validate_dealer(&seat_ids, id)?;
                id
            }
            None => {
                let last = hands::last_dealer(conn, game_id).await?;
                next_dealer(&seat_ids, game.initial_dealer_id, last)
            }
        };

        let score_ids: Vec<i64> = scores.iter().map(|s| s.player_id).collect();
        validate_score_set(&seat_ids, &score_ids)?;

        let hand_number = hands::next_hand_number(conn, game_id).await?;
        let hand = hands::create_hand(conn, game_id, hand_number, dealer_id, scores).await?;
        games::touch(conn, game_id).await?;

        let user_service = UserService::new();
        for claim in claims::find_by_players(conn, &score_ids).await? {
            if let Some(entry) = scores.iter().find(|s| s.player_id == claim.player_id) {
                stats::record_hand(conn, &claim.user_id, game_id, claim.player_id, entry.score)
                    .await?;
            }
            user_service.update_user_stats(conn, &claim.user_id).await?;
        }

        debug!(game_id = %game_id, hand_number, dealer_id, "hand recorded");
        Ok(hand)
    }

    /// Id of the seat that deals next. See [`next_dealer`] for the fallbacks.
    pub async fn get_next_dealer<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
    ) -> Result<i64, DomainError> {
        let initial = games::find_by_id(conn, game_id)
            .await?
            .and_then(|g| g.initial_dealer_id);
        let seats = players::find_all_by_game(conn, game_id).await?;
        let seat_ids: Vec<i64> = seats.iter().map(|p| p.id).collect();
        let last = hands::last_dealer(conn, game_id).await?;

        Ok(next_dealer(&seat_ids, initial, last))
    }

    /// Next dealer with display name; `NotFound` for an unknown game.
    pub async fn describe_next_dealer<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
    ) -> Result<NextDealer, DomainError> {
        if games::find_by_id(conn, game_id).await?.is_none() {
            return Err(game_not_found());
        }

        let dealer_id = self.get_next_dealer(conn, game_id).await?;
        let dealer_name = players::find_all_by_game(conn, game_id)
            .await?
            .into_iter()
            .find(|p| p.id == dealer_id)
            .map(|p| p.name)
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(NextDealer {
            dealer_id,
            dealer_name,
        })
    }

    pub async fn is_game_admin<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
        user_id: &str,
    ) -> Result<bool, DomainError> {
        let game = games::find_by_id(conn, game_id).await?;
        Ok(game.and_then(|g| g.admin_id).as_deref() == Some(user_id))
    }

    pub async fn get_claimed_player<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
        user_id: &str,
    ) -> Result<Option<Player>, DomainError> {
        players::find_claimed_by_user(conn, game_id, user_id).await
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
