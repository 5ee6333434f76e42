// order_intake/src/store/in_memory.rs
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

use super::OrderStore;
use crate::core::order::{NewOrder, Order, OrderId};
use crate::error::StoreError;

/// Order store backed by a map, for tests and for running without a database.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
  orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, id: &OrderId) -> Option<Order> {
    self.orders.read().get(id).cloned()
  }

  /// All stored orders, oldest first.
  pub fn orders(&self) -> Vec<Order> {
    let mut all: Vec<Order> = self.orders.read().values().cloned().collect();
    all.sort_by_key(|o| o.created_at);
    all
  }

  pub fn len(&self) -> usize {
    self.orders.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.orders.read().is_empty()
  }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
  async fn insert(&self, order: NewOrder) -> Result<Order, StoreError> {
    let mut guard = self.orders.write();
    if guard.contains_key(&order.id) {
      return Err(StoreError::Duplicate(order.id));
    }
    let stored = order.into_order(Utc::now());
    guard.insert(stored.id, stored.clone());
    debug!(order_id = %stored.id, total = guard.len(), "Order stored in memory.");
    Ok(stored)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::amount::Amount;
  use crate::core::order::CustomerId;

  fn new_order() -> NewOrder {
    NewOrder {
      id: OrderId::generate(),
      customer_id: CustomerId::new("c-1"),
      amount: Amount::from(10),
    }
  }

  #[tokio::test]
  async fn insert_assigns_timestamp_and_keeps_fields() {
    let store = InMemoryOrderStore::new();
    let before = Utc::now();
    let order = new_order();
    let stored = store.insert(order.clone()).await.unwrap();

    assert_eq!(stored.id, order.id);
    assert_eq!(stored.amount, order.amount);
    assert!(stored.created_at >= before);
    assert_eq!(store.get(&order.id), Some(stored));
  }

  #[tokio::test]
  async fn insert_rejects_duplicate_ids() {
    let store = InMemoryOrderStore::new();
    let order = new_order();
    store.insert(order.clone()).await.unwrap();

    let err = store.insert(order.clone()).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(id) if id == order.id));
    assert_eq!(store.len(), 1);
  }
}
