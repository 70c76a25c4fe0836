//! Process configuration loaded once from environment variables.

use std::env;
use std::time::Duration;

use crate::config::db::{db_kind_from_env, DbKind};
use crate::error::AppError;

pub const DEFAULT_LIVE_UPDATE_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    /// HS256 secret shared with the session provider
    pub jwt_secret: String,
    /// Poll period of the live game event stream
    pub live_update_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_str = env::var("BACKEND_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let jwt_secret = env::var("SESSION_JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::config("SESSION_JWT_SECRET must be set"))?;

        Ok(Self {
            host,
            port,
            db_kind: db_kind_from_env()?,
            jwt_secret,
            live_update_interval: live_update_interval_from_env()?,
        })
    }
}

fn live_update_interval_from_env() -> Result<Duration, AppError> {
    let Ok(raw) = env::var("LIVE_UPDATE_INTERVAL_MS") else {
        return Ok(Duration::from_millis(DEFAULT_LIVE_UPDATE_INTERVAL_MS));
    };
    match raw.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(AppError::config(format!(
            "LIVE_UPDATE_INTERVAL_MS must be a positive integer, got '{raw}'"
        ))),
    }
}
