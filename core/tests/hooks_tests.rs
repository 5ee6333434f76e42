// tests/hooks_tests.rs
mod common;

use common::*;
use order_intake::{FailurePolicy, OrderIntake, RecordingDispatcher, SpanAnnotationHook};
use serial_test::serial;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::layer::SubscriberExt;

#[tokio::test]
#[serial]
async fn test_hooks_wrap_every_step_in_order() {
  setup_tracing();
  let h = in_memory_harness();
  let hook = Arc::new(RecordingHook::default());
  let intake = h.intake.with_hook(hook.clone());

  intake.create_order(request(5)).await.unwrap();

  assert_eq!(
    hook.calls(),
    vec![
      "before:generate_order_id",
      "after:generate_order_id:ok",
      "before:resolve_customer",
      "after:resolve_customer:ok",
      "before:persist_order",
      "after:persist_order:ok",
      "before:dispatch_order_created",
      "after:dispatch_order_created:ok",
    ]
  );
}

#[tokio::test]
#[serial]
async fn test_hooks_follow_the_policy_step_order() {
  setup_tracing();
  let h = in_memory_harness();
  let hook = Arc::new(RecordingHook::default());
  let intake = h
    .intake
    .with_policy(FailurePolicy::DispatchThenPersist)
    .with_hook(hook.clone());

  intake.create_order(request(5)).await.unwrap();

  let befores: Vec<String> = hook.calls().into_iter().filter(|c| c.starts_with("before:")).collect();
  assert_eq!(
    befores,
    vec![
      "before:generate_order_id",
      "before:resolve_customer",
      "before:dispatch_order_created",
      "before:persist_order",
    ]
  );
}

#[tokio::test]
#[serial]
async fn test_hooks_see_failed_step_and_nothing_after_it() {
  setup_tracing();
  let hook = Arc::new(RecordingHook::default());
  let intake = OrderIntake::new(Arc::new(FailingStore::default()), Arc::new(RecordingDispatcher::new()))
    .with_hook(hook.clone());

  assert!(intake.create_order(request(5)).await.is_err());

  let calls = hook.calls();
  assert_eq!(calls.last().map(String::as_str), Some("after:persist_order:err"));
  assert!(!calls.iter().any(|c| c.contains("dispatch_order_created")));
}

#[tokio::test]
#[serial]
async fn test_span_annotation_hook_leaves_outcome_unchanged() {
  setup_tracing();
  let h = in_memory_harness();
  let intake = h
    .intake
    .with_hook(Arc::new(SpanAnnotationHook::new().with_demo_delay(Duration::from_millis(20))));
  assert_eq!(intake.hook_count(), 1);

  let started = Instant::now();
  let outcome = intake.create_order(request(150)).await.unwrap();

  assert!(started.elapsed() >= Duration::from_millis(20));
  assert!(outcome.is_persisted());
  assert!(outcome.dispatched);
  assert_eq!(h.store.len(), 1);
  assert_eq!(h.dispatcher.len(), 1);
}

#[tokio::test]
#[serial]
async fn test_span_annotation_hook_records_order_id_on_intake_span() {
  let recorded = RecordedOrderIds::default();
  let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(recorded.clone()));

  let h = in_memory_harness();
  let intake = h.intake.with_hook(Arc::new(SpanAnnotationHook::new()));
  let outcome = intake.create_order(request(150)).await.unwrap();

  assert_eq!(recorded.values(), vec![outcome.order_id.to_string()]);
}

#[tokio::test]
#[serial]
async fn test_order_id_is_not_recorded_without_span_annotation_hook() {
  let recorded = RecordedOrderIds::default();
  let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(recorded.clone()));

  let h = in_memory_harness();
  let intake = h.intake.with_hook(Arc::new(RecordingHook::default()));
  intake.create_order(request(150)).await.unwrap();

  assert!(recorded.values().is_empty());
}
