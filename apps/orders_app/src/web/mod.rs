// apps/orders_app/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod routes;

// Re-export key items if desired.
pub use routes::configure_app_routes;
