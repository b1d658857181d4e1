use actix_web::web;

pub mod health;
pub mod matches;
pub mod realtime;
pub mod stages;

/// Configure application routes for production and test contexts alike.
///
/// `main.rs` wires these under the full middleware stack (CORS, trace id,
/// request logging); tests register the same paths so endpoint behavior can
/// be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Catalog routes: /api/stages/**
    cfg.service(web::scope("/api/stages").configure(stages::configure_routes));

    // Match state routes: /api/matches/**
    cfg.service(web::scope("/api/matches").configure(matches::configure_routes));

    // Realtime routes: /api/ws
    cfg.service(web::scope("/api/ws").configure(realtime::configure_routes));
}
