//! DTOs for players_sea adapter.

/// DTO for inserting a player seat.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub game_id: String,
    pub name: String,
}

impl PlayerCreate {
    pub fn new(game_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            name: name.into(),
        }
    }
}
