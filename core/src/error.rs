// order_intake/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::core::order::OrderId;

/// Failure of a single order-store write.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Order {0} already exists")]
  Duplicate(OrderId),

  #[error("Order store backend failed: {0}")]
  Backend(#[source] AnyhowError),
}

#[derive(Debug, Error)]
pub enum IntakeError {
  #[error("Customer resolution failed. Source: {source}")]
  CustomerResolution {
    #[source]
    source: AnyhowError,
  },

  #[error("Persisting order {order_id} failed. Source: {source}")]
  Persistence {
    order_id: OrderId,
    #[source]
    source: StoreError,
  },

  #[error("Internal intake error: {0}")]
  Internal(String),
}

pub type IntakeResult<T, E = IntakeError> = std::result::Result<T, E>;
