// order_intake/src/pipeline/definition.rs

//! Contains the `OrderIntake` struct and its builder-style configuration.

use crate::core::step::{FailurePolicy, IntakeStep};
use crate::customer::{CustomerResolver, FixedCustomerResolver};
use crate::dispatch::EventDispatcher;
use crate::pipeline::hooks::IntakeHook;
use crate::store::OrderStore;
use std::sync::Arc;

/// The order intake service.
///
/// Holds the collaborators shared by every request. All of them are
/// `Send + Sync` behind `Arc`, so one `OrderIntake` serves concurrent
/// requests without further locking.
pub struct OrderIntake {
  pub(crate) store: Arc<dyn OrderStore>,
  pub(crate) dispatcher: Arc<dyn EventDispatcher>,
  pub(crate) customers: Arc<dyn CustomerResolver>,
  pub(crate) hooks: Vec<Arc<dyn IntakeHook>>,
  pub(crate) policy: FailurePolicy,
}

impl OrderIntake {
  /// Creates an intake with the placeholder customer resolver and the
  /// default `FailurePolicy::FailRequest`.
  pub fn new(store: Arc<dyn OrderStore>, dispatcher: Arc<dyn EventDispatcher>) -> Self {
    Self {
      store,
      dispatcher,
      customers: Arc::new(FixedCustomerResolver::default()),
      hooks: Vec::new(),
      policy: FailurePolicy::default(),
    }
  }

  pub fn with_customer_resolver(mut self, customers: Arc<dyn CustomerResolver>) -> Self {
    self.customers = customers;
    self
  }

  pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
    self.policy = policy;
    self
  }

  pub fn policy(&self) -> FailurePolicy {
    self.policy
  }

  /// Steps in the order `create_order` runs them.
  pub fn steps(&self) -> [IntakeStep; 4] {
    self.policy.steps()
  }
}

// Collaborators are trait objects without Debug; report the shape instead.
impl std::fmt::Debug for OrderIntake {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("OrderIntake")
      .field("policy", &self.policy)
      .field("hook_count", &self.hooks.len())
      .finish()
  }
}
