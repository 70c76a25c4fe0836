use actix_web::{web, App, HttpServer};
use scorepad::config::app::AppConfig;
use scorepad::config::db::DbProfile;
use scorepad::infra::state::build_state;
use scorepad::middleware::{
    cors_middleware, RequestTrace, SessionExtract, StructuredLogger, TraceSpan,
};
use scorepad::routes;
use scorepad::state::security_config::SecurityConfig;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(config.db_kind, DbProfile::Prod)
        .with_security(SecurityConfig::new(config.jwt_secret.as_bytes()))
        .with_live_update_interval(config.live_update_interval)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "starting scorepad backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(SessionExtract)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
