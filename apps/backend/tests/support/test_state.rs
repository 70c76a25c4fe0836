use std::time::Duration;

use scorepad::{build_state, AppError, AppState, DbKind, DbProfile};

/// Fresh in-memory database with the schema applied. Every call is isolated.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_db(DbKind::SqliteMemory, DbProfile::Test)
        .with_live_update_interval(Duration::from_millis(20))
        .build()
        .await
}

/// State with no database, for routes that must answer 503.
pub async fn build_state_without_db() -> Result<AppState, AppError> {
    build_state().build().await
}
