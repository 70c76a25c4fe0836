//! SeaORM adapters. Every function is generic over `ConnectionTrait` so it
//! runs on the pool or inside a transaction, and returns `DbErr`.

pub mod claims_sea;
pub mod games_sea;
pub mod hands_sea;
pub mod players_sea;
pub mod scores_sea;
pub mod stats_sea;
