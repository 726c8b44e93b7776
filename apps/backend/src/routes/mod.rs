use actix_web::web;

pub mod compare;
pub mod health;

/// Configure application routes, shared by `main.rs` and the test suites.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check route: /health
    cfg.route("/health", web::get().to(health::health));

    // Comparison routes: /compare/**
    cfg.service(web::scope("/compare").configure(compare::configure_routes));
}
