use actix_web::web;

pub mod commands;
pub mod health;

/// Configure application routes.
///
/// `main.rs` and the HTTP tests register the same paths through here, so
/// endpoint behavior can be exercised without a running server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Command dispatch: /command and /notify
    cfg.configure(commands::configure_routes);

    // Health check: /health
    cfg.configure(health::configure_routes);
}
