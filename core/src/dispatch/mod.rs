// order_intake/src/dispatch/mod.rs

//! Fire-and-forget delivery of `OrderCreatedEvent`s.

mod logging;
mod recording;

pub use logging::LoggingDispatcher;
pub use recording::RecordingDispatcher;

use crate::core::event::OrderCreatedEvent;
use async_trait::async_trait;

/// Hands an event to a downstream consumer. There is no acknowledgment and
/// no error path; implementations log their own delivery problems.
#[async_trait]
pub trait EventDispatcher: Send + Sync {
  async fn dispatch(&self, event: OrderCreatedEvent);
}
