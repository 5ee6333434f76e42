// apps/orders_app/src/models/order.rs

use chrono::{DateTime, Utc};
use order_intake::{Amount, CustomerId, Order};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A row of the `orders` table.
#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
  pub id: String,
  pub customer_id: String,
  pub amount: Decimal,
  pub created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
  type Error = anyhow::Error;

  fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
    let id = row
      .id
      .parse()
      .map_err(|e| anyhow::anyhow!("orders.id '{}' is not a UUID: {}", row.id, e))?;
    Ok(Order {
      id,
      customer_id: CustomerId::new(row.customer_id),
      amount: Amount::new(row.amount),
      created_at: row.created_at,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn converts_a_row_into_an_order() {
    let row = OrderRow {
      id: "6f1c1a4e-8f57-4a8e-9d0c-5a8b1e3c2d10".to_string(),
      customer_id: "cust-1".to_string(),
      amount: Decimal::new(15000, 2),
      created_at: Utc::now(),
    };
    let order = Order::try_from(row.clone()).unwrap();
    assert_eq!(order.id.to_string(), row.id);
    assert_eq!(order.amount, Amount::from(150));
  }

  #[test]
  fn rejects_a_row_with_a_malformed_id() {
    let row = OrderRow {
      id: "not-a-uuid".to_string(),
      customer_id: "cust-1".to_string(),
      amount: Decimal::ONE,
      created_at: Utc::now(),
    };
    assert!(Order::try_from(row).is_err());
  }
}
