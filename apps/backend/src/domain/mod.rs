//! Domain layer: pure scorekeeping rules, no I/O.

pub mod hand_rows;
pub mod rotation;
pub mod stats;
pub mod validation;

#[cfg(test)]
mod tests_props_rotation;

/// Fewest seats a game may have.
pub const MIN_PLAYERS: usize = 2;
/// Most seats a game may have. Also bounds rows per hand in recent-hand reads.
pub const MAX_PLAYERS: usize = 4;
/// Hands returned by recent-hand reads when the caller gives no limit.
pub const DEFAULT_RECENT_HANDS: u64 = 20;
