// order_intake/src/dispatch/logging.rs
use async_trait::async_trait;
use tracing::{info, warn};

use super::EventDispatcher;
use crate::core::event::OrderCreatedEvent;

pub const DEFAULT_CHANNEL: &str = "orders";

/// Publishes events as structured log records on a named channel.
#[derive(Debug, Clone)]
pub struct LoggingDispatcher {
  channel: String,
}

impl LoggingDispatcher {
  pub fn new(channel: impl Into<String>) -> Self {
    Self { channel: channel.into() }
  }

  pub fn channel(&self) -> &str {
    &self.channel
  }
}

impl Default for LoggingDispatcher {
  fn default() -> Self {
    Self::new(DEFAULT_CHANNEL)
  }
}

#[async_trait]
impl EventDispatcher for LoggingDispatcher {
  async fn dispatch(&self, event: OrderCreatedEvent) {
    match serde_json::to_string(&event) {
      Ok(payload) => info!(
        channel = %self.channel,
        order_id = %event.order_id,
        %payload,
        "Order created event dispatched."
      ),
      Err(e) => warn!(
        channel = %self.channel,
        order_id = %event.order_id,
        error = %e,
        "Could not serialize order created event; dropped."
      ),
    }
  }
}
