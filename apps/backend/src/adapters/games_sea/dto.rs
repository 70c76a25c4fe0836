//! DTOs for games_sea adapter.

/// DTO for inserting a game row.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub id: String,
    pub admin_id: Option<String>,
}

impl GameCreate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            admin_id: None,
        }
    }

    pub fn with_admin(mut self, admin_id: Option<String>) -> Self {
        self.admin_id = admin_id;
        self
    }
}
