use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("scorepad backend"))
}

/// Liveness document. Always 200; a broken store shows up in `db`.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: DbHealth,
    time: String,
}

#[derive(Debug, Serialize)]
struct DbHealth {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    engine: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    migrations: String,
}

impl DbHealth {
    fn failed(engine: Option<&'static str>, error: String) -> Self {
        Self {
            status: "error",
            engine,
            error: Some(error),
            migrations: "unknown".to_string(),
        }
    }
}

fn engine_name(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => "postgresql",
        DatabaseBackend::Sqlite => "sqlite",
        DatabaseBackend::MySql => "mysql",
    }
}

async fn check_db(db: &DatabaseConnection) -> DbHealth {
    let backend = db.get_database_backend();
    let engine = Some(engine_name(backend));

    let ping = Statement::from_string(backend, "SELECT 1 AS health_check".to_string());
    if let Err(e) = db.query_one(ping).await {
        return DbHealth::failed(engine, format!("DB query failed: {e}"));
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };

    DbHealth {
        status: "ok",
        engine,
        error: None,
        migrations,
    }
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = match require_db(&app_state) {
        Ok(db) => check_db(db).await,
        Err(e) => DbHealth::failed(None, format!("DB unavailable: {e}")),
    };

    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}
