// order_intake/src/core/context.rs

//! Per-request state threaded through the intake steps, and the outcome
//! handed back to the caller.

use crate::core::amount::Amount;
use crate::core::order::{CustomerId, NewOrder, Order, OrderId, OrderRequest};
use crate::error::{IntakeError, IntakeResult};

/// State of one intake run. Steps fill the optional fields in order; hooks
/// observe it read-only.
#[derive(Debug, Clone)]
pub struct IntakeContext {
  pub request: OrderRequest,
  pub order_id: Option<OrderId>,
  pub customer_id: Option<CustomerId>,
  pub persisted: Option<Order>,
  pub dispatched: bool,
}

impl IntakeContext {
  pub fn new(request: OrderRequest) -> Self {
    Self {
      request,
      order_id: None,
      customer_id: None,
      persisted: None,
      dispatched: false,
    }
  }

  /// Builds the record to write. Fails if the id or customer steps have not run.
  pub fn new_order(&self) -> IntakeResult<NewOrder> {
    let id = self
      .order_id
      .ok_or_else(|| IntakeError::Internal("order id not generated before use".to_string()))?;
    let customer_id = self
      .customer_id
      .clone()
      .ok_or_else(|| IntakeError::Internal("customer not resolved before use".to_string()))?;
    Ok(NewOrder {
      id,
      customer_id,
      amount: self.request.amount,
    })
  }

  pub(crate) fn into_outcome(self) -> IntakeResult<IntakeOutcome> {
    let new_order = self.new_order()?;
    Ok(IntakeOutcome {
      order_id: new_order.id,
      customer_id: new_order.customer_id,
      amount: new_order.amount,
      persisted: self.persisted,
      dispatched: self.dispatched,
    })
  }
}

/// Result of a completed intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeOutcome {
  pub order_id: OrderId,
  pub customer_id: CustomerId,
  pub amount: Amount,
  /// `None` only when the write failed under `FailurePolicy::DispatchThenPersist`.
  pub persisted: Option<Order>,
  pub dispatched: bool,
}

impl IntakeOutcome {
  pub fn is_persisted(&self) -> bool {
    self.persisted.is_some()
  }
}
