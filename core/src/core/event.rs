// order_intake/src/core/event.rs

//! The transient "order created" event handed to the dispatcher.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::order::{CustomerId, NewOrder, OrderId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
  pub id: CustomerId,
}

/// Serialized as `{"orderId": "...", "amount": 150.0, "customer": {"id": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedEvent {
  pub order_id: OrderId,
  pub amount: Amount,
  pub customer: CustomerRef,
}

impl From<&NewOrder> for OrderCreatedEvent {
  fn from(order: &NewOrder) -> Self {
    OrderCreatedEvent {
      order_id: order.id,
      amount: order.amount,
      customer: CustomerRef {
        id: order.customer_id.clone(),
      },
    }
  }
}
