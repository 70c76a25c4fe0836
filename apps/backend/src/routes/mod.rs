use actix_web::web;

pub mod events;
pub mod games;
pub mod health;
pub mod users;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /, /health
    cfg.configure(health::configure_routes);

    // Games routes: /api/games/**
    cfg.service(
        web::scope("/api/games")
            .configure(games::configure_routes)
            .configure(events::configure_routes),
    );

    // User routes: /api/users/**
    cfg.service(web::scope("/api/users").configure(users::configure_routes));
}
