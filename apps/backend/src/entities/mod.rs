pub mod games;
pub mod hand_scores;
pub mod hands;
pub mod player_claims;
pub mod players;
pub mod user_game_stats;
pub mod user_stats;

pub use games::Entity as Games;
pub use games::Model as Game;
pub use hand_scores::Entity as HandScores;
pub use hand_scores::Model as HandScore;
pub use hands::Entity as Hands;
pub use hands::Model as Hand;
pub use player_claims::Entity as PlayerClaims;
pub use player_claims::Model as PlayerClaim;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use user_game_stats::Entity as UserGameStats;
pub use user_game_stats::Model as UserGameStat;
pub use user_stats::Entity as UserStats;
pub use user_stats::Model as UserStat;
