//! Game identifiers.
//!
//! Ids are lowercase ULIDs: 26 characters of Crockford's Base32, time
//! ordered, safe to put in URLs.

use ulid::Ulid;

/// Generate a fresh game id.
pub fn new_game_id() -> String {
    Ulid::new().to_string().to_lowercase()
}
