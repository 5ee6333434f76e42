// apps/orders_app/src/state.rs
use crate::config::AppConfig;
use order_intake::{
  EventDispatcher, FixedCustomerResolver, OrderIntake, OrderStore, SpanAnnotationHook,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub intake: Arc<OrderIntake>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Wires the intake service from config and the chosen collaborators.
  pub fn new(config: Arc<AppConfig>, store: Arc<dyn OrderStore>, dispatcher: Arc<dyn EventDispatcher>) -> Self {
    let intake = OrderIntake::new(store, dispatcher)
      .with_policy(config.failure_policy)
      .with_customer_resolver(Arc::new(FixedCustomerResolver::new(config.placeholder_customer_id.clone())))
      .with_hook(Arc::new(SpanAnnotationHook::new().with_demo_delay(config.trace_demo_delay)));

    Self {
      intake: Arc::new(intake),
      config,
    }
  }
}
