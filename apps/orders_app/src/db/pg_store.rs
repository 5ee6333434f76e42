// apps/orders_app/src/db/pg_store.rs

use async_trait::async_trait;
use order_intake::{NewOrder, Order, OrderStore, StoreError};
use sqlx::PgPool;
use tracing::{error, instrument};

use crate::models::OrderRow;

/// `OrderStore` writing to the `orders` table. `created_at` comes from the
/// column default, so the timestamp is the database's write time.
#[derive(Debug, Clone)]
pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl OrderStore for PgOrderStore {
  #[instrument(name = "PgOrderStore::insert", skip_all, fields(order_id = %order.id))]
  async fn insert(&self, order: NewOrder) -> Result<Order, StoreError> {
    let row: OrderRow = sqlx::query_as(
      "INSERT INTO orders (id, customer_id, amount) VALUES ($1, $2, $3) \
       RETURNING id, customer_id, amount, created_at",
    )
    .bind(order.id.to_string())
    .bind(order.customer_id.as_str())
    .bind(order.amount.value())
    .fetch_one(&self.pool)
    .await
    .map_err(|e| match e {
      sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => StoreError::Duplicate(order.id),
      other => {
        error!("Failed to insert order {}: {}", order.id, other);
        StoreError::Backend(anyhow::Error::new(other))
      }
    })?;

    Order::try_from(row).map_err(StoreError::Backend)
  }
}
