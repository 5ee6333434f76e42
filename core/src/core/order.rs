// order_intake/src/core/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::amount::Amount;

/// Identifier of an order: a random 128-bit UUID (v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
  /// Generates a fresh identifier for a new order.
  pub fn generate() -> Self {
    OrderId(Uuid::new_v4())
  }

  pub fn as_uuid(&self) -> &Uuid {
    &self.0
  }
}

impl fmt::Display for OrderId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0.hyphenated(), f)
  }
}

impl FromStr for OrderId {
  type Err = uuid::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Uuid::parse_str(s).map(OrderId)
  }
}

impl From<Uuid> for OrderId {
  fn from(value: Uuid) -> Self {
    OrderId(value)
  }
}

/// Opaque customer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
  pub fn new(id: impl Into<String>) -> Self {
    CustomerId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for CustomerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// A validated order-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRequest {
  pub amount: Amount,
}

/// An order ready to be written. The store assigns `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
  pub id: OrderId,
  pub customer_id: CustomerId,
  pub amount: Amount,
}

impl NewOrder {
  pub fn into_order(self, created_at: DateTime<Utc>) -> Order {
    Order {
      id: self.id,
      customer_id: self.customer_id,
      amount: self.amount,
      created_at,
    }
  }
}

/// A persisted order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: OrderId,
  pub customer_id: CustomerId,
  pub amount: Amount,
  pub created_at: DateTime<Utc>,
}
