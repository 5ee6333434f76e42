// apps/orders_app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use order_intake::{CustomerId, FailurePolicy, PLACEHOLDER_CUSTOMER_ID};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// `None` runs the service on the in-memory order store.
  pub database_url: Option<String>,
  /// Create the `orders` table at startup.
  pub init_schema: bool,

  pub placeholder_customer_id: CustomerId,
  pub failure_policy: FailurePolicy,
  pub trace_demo_delay: Duration,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "0.0.0.0".to_string(),
      server_port: 3333,
      database_url: None,
      init_schema: false,
      placeholder_customer_id: CustomerId::new(PLACEHOLDER_CUSTOMER_ID),
      failure_policy: FailurePolicy::FailRequest,
      trace_demo_delay: Duration::ZERO,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source. Unset variables take their defaults.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let defaults = Self::default();

    let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match lookup("SERVER_PORT") {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT '{}': {}", raw, e)))?,
      None => defaults.server_port,
    };
    let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
    let init_schema = match lookup("INIT_SCHEMA") {
      Some(raw) => raw
        .parse::<bool>()
        .map_err(|e| AppError::Config(format!("Invalid INIT_SCHEMA value '{}': {}", raw, e)))?,
      None => defaults.init_schema,
    };

    let placeholder_customer_id = match lookup("PLACEHOLDER_CUSTOMER_ID") {
      Some(raw) if raw.trim().is_empty() => {
        return Err(AppError::Config("PLACEHOLDER_CUSTOMER_ID must not be empty".to_string()))
      }
      Some(raw) => CustomerId::new(raw.trim()),
      None => defaults.placeholder_customer_id,
    };
    let failure_policy = match lookup("ORDER_FAILURE_POLICY") {
      Some(raw) => raw
        .parse::<FailurePolicy>()
        .map_err(|e| AppError::Config(format!("Invalid ORDER_FAILURE_POLICY: {}", e)))?,
      None => defaults.failure_policy,
    };
    let trace_demo_delay = match lookup("TRACE_DEMO_DELAY_MS") {
      Some(raw) => Duration::from_millis(
        raw
          .parse::<u64>()
          .map_err(|e| AppError::Config(format!("Invalid TRACE_DEMO_DELAY_MS '{}': {}", raw, e)))?,
      ),
      None => defaults.trace_demo_delay,
    };

    if init_schema && database_url.is_none() {
      tracing::warn!("INIT_SCHEMA is set but DATABASE_URL is not; nothing to initialize.");
    }

    tracing::info!("Application configuration loaded successfully.");
    // The database URL can hold credentials; only log whether it is set.
    tracing::debug!(
      server_host = %server_host,
      server_port,
      database_configured = database_url.is_some(),
      init_schema,
      failure_policy = %failure_policy,
      trace_demo_delay_ms = trace_demo_delay.as_millis() as u64,
      "Loaded config details"
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      init_schema,
      placeholder_customer_id,
      failure_policy,
      trace_demo_delay,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
