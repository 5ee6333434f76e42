// order_intake/src/dispatch/recording.rs
use async_trait::async_trait;
use parking_lot::Mutex;

use super::EventDispatcher;
use crate::core::event::OrderCreatedEvent;

/// Keeps every dispatched event in memory so callers can inspect them.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
  events: Mutex<Vec<OrderCreatedEvent>>,
}

impl RecordingDispatcher {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn events(&self) -> Vec<OrderCreatedEvent> {
    self.events.lock().clone()
  }

  pub fn len(&self) -> usize {
    self.events.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.events.lock().is_empty()
  }
}

#[async_trait]
impl EventDispatcher for RecordingDispatcher {
  async fn dispatch(&self, event: OrderCreatedEvent) {
    self.events.lock().push(event);
  }
}
