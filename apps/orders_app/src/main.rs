// apps/orders_app/src/main.rs

// Declare modules for the application
mod config;
mod db;
mod errors;
mod models;
mod state;
mod web;

use crate::config::AppConfig;
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use order_intake::{InMemoryOrderStore, LoggingDispatcher, OrderStore};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting orders server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  // Pick the order store: Postgres when configured, otherwise in memory.
  let store: Arc<dyn OrderStore> = match &app_config.database_url {
    Some(url) => {
      let pool = match db::connect(url).await {
        Ok(pool) => pool,
        Err(e) => {
          tracing::error!(error = %e, "Failed to connect to the database.");
          return Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string()));
        }
      };
      if app_config.init_schema {
        if let Err(e) = db::init_schema(&pool).await {
          tracing::error!(error = %e, "Failed to initialize database schema.");
          return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
      }
      Arc::new(db::PgOrderStore::new(pool))
    }
    None => {
      tracing::warn!("DATABASE_URL not set; orders are kept in memory and lost on restart.");
      Arc::new(InMemoryOrderStore::new())
    }
  };

  let app_state = AppState::new(app_config.clone(), store, Arc::new(LoggingDispatcher::default()));
  tracing::info!(policy = %app_state.intake.policy(), "Order intake ready.");

  // Configure and Start Actix Web Server
  let server_address = app_config.bind_address();
  tracing::info!("[Orders] HTTP server binding to http://{}", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
