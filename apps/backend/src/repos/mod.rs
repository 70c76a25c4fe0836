//! Repository functions: domain models over the SeaORM adapters.

pub mod claims;
pub mod games;
pub mod hands;
pub mod players;
pub mod stats;
