use std::time::{Duration, Instant};

use migration::MigrationCommand;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, DbOwner, DbProfile};
use crate::error::AppError;

fn engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

fn connect_options(kind: DbKind, url: String) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false)
        .acquire_timeout(Duration::from_secs(5));

    match kind {
        // Every pooled connection to `sqlite::memory:` is its own database,
        // so the pool must hold exactly one.
        DbKind::SqliteMemory => {
            opts.max_connections(1).min_connections(1);
        }
        DbKind::SqliteFile => {
            opts.max_connections(4);
        }
        DbKind::Postgres => {
            opts.max_connections(16).min_connections(1);
        }
    }
    opts
}

/// Connect without touching the schema.
pub async fn connect_db(
    kind: DbKind,
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind, profile, owner)?;
    let conn = Database::connect(connect_options(kind, url)).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date. Single entrypoint for main and tests.
pub async fn bootstrap_db(
    kind: DbKind,
    profile: DbProfile,
) -> Result<DatabaseConnection, AppError> {
    let started = Instant::now();
    let conn = connect_db(kind, profile, DbOwner::App).await?;

    migration::migrate(&conn, MigrationCommand::Up).await?;

    info!(
        db.engine = engine(kind),
        db.profile = ?profile,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "database ready"
    );
    Ok(conn)
}
