// order_intake/examples/basic_intake.rs

use order_intake::{
  FailurePolicy, InMemoryOrderStore, IntakeResult, LoggingDispatcher, OrderIntake, OrderRequest, SpanAnnotationHook,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> IntakeResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  info!("--- Basic Order Intake Example ---");

  let store = Arc::new(InMemoryOrderStore::new());
  let intake = OrderIntake::new(store.clone(), Arc::new(LoggingDispatcher::default()))
    .with_policy(FailurePolicy::FailRequest)
    .with_hook(Arc::new(SpanAnnotationHook::new().with_demo_delay(Duration::from_millis(50))));

  // Request bodies coerce numeric strings as well as numbers.
  for body in [r#"{"amount": 150}"#, r#"{"amount": "99.90"}"#] {
    let request: OrderRequest = serde_json::from_str(body).expect("example body is valid");
    let outcome = intake.create_order(request).await?;
    info!(order_id = %outcome.order_id, amount = %outcome.amount, "Order accepted.");
  }

  let rejected = serde_json::from_str::<OrderRequest>(r#"{"amount": "abc"}"#);
  info!(error = %rejected.unwrap_err(), "Non-numeric amount rejected before intake.");

  info!(stored = store.len(), "Done.");
  Ok(())
}
