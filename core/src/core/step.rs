// order_intake/src/core/step.rs

//! The named steps of an order intake and the policies that order them.

use std::fmt;
use std::str::FromStr;

/// A single step of the intake sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakeStep {
  GenerateOrderId,
  ResolveCustomer,
  PersistOrder,
  DispatchOrderCreated,
}

impl IntakeStep {
  pub const fn name(&self) -> &'static str {
    match self {
      IntakeStep::GenerateOrderId => "generate_order_id",
      IntakeStep::ResolveCustomer => "resolve_customer",
      IntakeStep::PersistOrder => "persist_order",
      IntakeStep::DispatchOrderCreated => "dispatch_order_created",
    }
  }
}

impl fmt::Display for IntakeStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// How a persistence failure interacts with the event dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
  /// Persist first. A failed write fails the request and nothing is dispatched.
  #[default]
  FailRequest,
  /// Dispatch first, then persist. A failed write is logged and absorbed;
  /// the intake still reports success with `persisted == None`.
  DispatchThenPersist,
}

impl FailurePolicy {
  /// The order in which steps run under this policy.
  pub const fn steps(&self) -> [IntakeStep; 4] {
    match self {
      FailurePolicy::FailRequest => [
        IntakeStep::GenerateOrderId,
        IntakeStep::ResolveCustomer,
        IntakeStep::PersistOrder,
        IntakeStep::DispatchOrderCreated,
      ],
      FailurePolicy::DispatchThenPersist => [
        IntakeStep::GenerateOrderId,
        IntakeStep::ResolveCustomer,
        IntakeStep::DispatchOrderCreated,
        IntakeStep::PersistOrder,
      ],
    }
  }

  pub const fn as_str(&self) -> &'static str {
    match self {
      FailurePolicy::FailRequest => "fail_request",
      FailurePolicy::DispatchThenPersist => "dispatch_then_persist",
    }
  }
}

impl fmt::Display for FailurePolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown failure policy '{0}' (expected 'fail_request' or 'dispatch_then_persist')")]
pub struct UnknownFailurePolicy(pub String);

impl FromStr for FailurePolicy {
  type Err = UnknownFailurePolicy;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "fail_request" => Ok(FailurePolicy::FailRequest),
      "dispatch_then_persist" => Ok(FailurePolicy::DispatchThenPersist),
      other => Err(UnknownFailurePolicy(other.to_string())),
    }
  }
}
