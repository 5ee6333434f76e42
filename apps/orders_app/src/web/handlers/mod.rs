// apps/orders_app/src/web/handlers/mod.rs

// Declare handler modules
pub mod health_handlers;
pub mod order_handlers;
