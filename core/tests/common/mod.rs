// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use order_intake::{
  CustomerId, CustomerResolver, InMemoryOrderStore, IntakeContext, IntakeError, IntakeHook,
  IntakeResult, IntakeStep, NewOrder, Order, OrderIntake, OrderRequest, OrderStore, RecordingDispatcher, StoreError,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{span, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

// --- Collaborator doubles ---

/// A store whose every write fails with a backend error.
#[derive(Debug, Default)]
pub struct FailingStore {
  pub attempts: AtomicUsize,
}

#[async_trait]
impl OrderStore for FailingStore {
  async fn insert(&self, _order: NewOrder) -> Result<Order, StoreError> {
    self.attempts.fetch_add(1, Ordering::SeqCst);
    Err(StoreError::Backend(anyhow::anyhow!("connection refused")))
  }
}

/// A resolver that counts calls and answers with a fixed id.
#[derive(Debug)]
pub struct CountingResolver {
  pub customer_id: CustomerId,
  pub calls: AtomicUsize,
}

impl CountingResolver {
  pub fn new(id: &str) -> Self {
    Self {
      customer_id: CustomerId::new(id),
      calls: AtomicUsize::new(0),
    }
  }
}

#[async_trait]
impl CustomerResolver for CountingResolver {
  async fn resolve(&self, _request: &OrderRequest) -> IntakeResult<CustomerId> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Ok(self.customer_id.clone())
  }
}

#[derive(Debug, Default)]
pub struct UnreachableResolver;

#[async_trait]
impl CustomerResolver for UnreachableResolver {
  async fn resolve(&self, _request: &OrderRequest) -> IntakeResult<CustomerId> {
    Err(IntakeError::CustomerResolution {
      source: anyhow::anyhow!("customer directory unreachable"),
    })
  }
}

/// Records every hook call as "before:<step>" / "after:<step>:<ok|err>".
#[derive(Debug, Default)]
pub struct RecordingHook {
  pub calls: Mutex<Vec<String>>,
}

impl RecordingHook {
  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().clone()
  }
}

#[async_trait]
impl IntakeHook for RecordingHook {
  async fn before_step(&self, step: IntakeStep, _ctx: &IntakeContext) {
    self.calls.lock().push(format!("before:{}", step));
  }

  async fn after_step(&self, step: IntakeStep, _ctx: &IntakeContext, succeeded: bool) {
    let status = if succeeded { "ok" } else { "err" };
    self.calls.lock().push(format!("after:{}:{}", step, status));
  }
}

// --- Span capture ---

/// Collects every `order_id` recorded on an `OrderIntake::create_order` span
/// after the span was opened.
#[derive(Debug, Clone, Default)]
pub struct RecordedOrderIds(Arc<Mutex<Vec<String>>>);

impl RecordedOrderIds {
  pub fn values(&self) -> Vec<String> {
    self.0.lock().clone()
  }
}

impl<S> Layer<S> for RecordedOrderIds
where
  S: Subscriber + for<'a> LookupSpan<'a>,
{
  fn on_record(&self, id: &span::Id, values: &span::Record<'_>, ctx: Context<'_, S>) {
    if ctx.span(id).map_or(false, |s| s.name() == "OrderIntake::create_order") {
      values.record(&mut OrderIdVisitor(&self.0));
    }
  }
}

struct OrderIdVisitor<'a>(&'a Mutex<Vec<String>>);

impl Visit for OrderIdVisitor<'_> {
  fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
    if field.name() == "order_id" {
      self.0.lock().push(format!("{:?}", value));
    }
  }
}

// --- Wiring helpers ---

pub struct Harness {
  pub store: Arc<InMemoryOrderStore>,
  pub dispatcher: Arc<RecordingDispatcher>,
  pub intake: OrderIntake,
}

pub fn in_memory_harness() -> Harness {
  let store = Arc::new(InMemoryOrderStore::new());
  let dispatcher = Arc::new(RecordingDispatcher::new());
  let intake = OrderIntake::new(store.clone(), dispatcher.clone());
  Harness {
    store,
    dispatcher,
    intake,
  }
}

pub fn request(amount: i64) -> OrderRequest {
  OrderRequest { amount: amount.into() }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
