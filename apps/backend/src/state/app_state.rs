use std::time::Duration;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::config::app::DEFAULT_LIVE_UPDATE_INTERVAL_MS;

/// Application state shared by every worker
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in DB-less test scenarios)
    db: Option<DatabaseConnection>,
    /// JWT verification settings
    pub security: SecurityConfig,
    /// Poll period of `/games/{id}/events`
    pub live_update_interval: Duration,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
            live_update_interval: Duration::from_millis(DEFAULT_LIVE_UPDATE_INTERVAL_MS),
        }
    }

    pub fn new_without_db(security: SecurityConfig) -> Self {
        Self {
            db: None,
            security,
            live_update_interval: Duration::from_millis(DEFAULT_LIVE_UPDATE_INTERVAL_MS),
        }
    }

    pub fn with_live_update_interval(mut self, interval: Duration) -> Self {
        self.live_update_interval = interval;
        self
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
