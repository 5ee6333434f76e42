// order_intake/src/pipeline/hooks.rs

//! Instrumentation hooks observed around each intake step.
//!
//! Hooks see the `IntakeContext` read-only and cannot fail, so they never
//! change the outcome of an intake. They run in registration order, inside the
//! `OrderIntake::create_order` span.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{event, info_span, Instrument, Level, Span};

use crate::core::context::IntakeContext;
use crate::core::step::IntakeStep;
use crate::pipeline::definition::OrderIntake;

#[async_trait]
pub trait IntakeHook: Send + Sync {
  async fn before_step(&self, _step: IntakeStep, _ctx: &IntakeContext) {}

  /// `succeeded` is false when the step returned an error.
  async fn after_step(&self, _step: IntakeStep, _ctx: &IntakeContext, _succeeded: bool) {}
}

/// A hook that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

#[async_trait]
impl IntakeHook for NoopHook {}

/// Annotates traces with intake details.
///
/// Once the id exists it is recorded as `order_id` on the current span. After
/// a successful write it opens an `order_trace_demo` span carrying the
/// order id and holds it open for `demo_delay`, which lets an exporter show a
/// visible child span. The delay defaults to zero.
#[derive(Debug, Clone, Default)]
pub struct SpanAnnotationHook {
  demo_delay: Duration,
}

impl SpanAnnotationHook {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_demo_delay(mut self, demo_delay: Duration) -> Self {
    self.demo_delay = demo_delay;
    self
  }

  pub fn demo_delay(&self) -> Duration {
    self.demo_delay
  }
}

#[async_trait]
impl IntakeHook for SpanAnnotationHook {
  async fn after_step(&self, step: IntakeStep, ctx: &IntakeContext, succeeded: bool) {
    let Some(order_id) = ctx.order_id else {
      return;
    };
    event!(Level::DEBUG, step = step.name(), %order_id, succeeded, "Intake step annotated.");

    if step == IntakeStep::GenerateOrderId {
      Span::current().record("order_id", tracing::field::display(order_id));
    }

    if step == IntakeStep::PersistOrder && succeeded && ctx.persisted.is_some() {
      let span = info_span!("order_trace_demo", %order_id, demo_attribute = "order-intake");
      let delay = self.demo_delay;
      async move {
        if !delay.is_zero() {
          tokio::time::sleep(delay).await;
        }
        event!(Level::INFO, delay_ms = delay.as_millis() as u64, "Trace demo span closed.");
      }
      .instrument(span)
      .await;
    }
  }
}

impl OrderIntake {
  /// Registers an instrumentation hook. Hooks run in the order they were added.
  pub fn with_hook(mut self, hook: Arc<dyn IntakeHook>) -> Self {
    self.hooks.push(hook);
    self
  }

  pub fn hook_count(&self) -> usize {
    self.hooks.len()
  }
}
