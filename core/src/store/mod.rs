// order_intake/src/store/mod.rs

//! The order store seam. The intake performs exactly one `insert` per
//! request; there is no retry, update, or delete.

mod in_memory;

pub use in_memory::InMemoryOrderStore;

use crate::core::order::{NewOrder, Order};
use crate::error::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait OrderStore: Send + Sync {
  /// Writes one order. The store assigns the creation timestamp and returns
  /// the record as persisted.
  async fn insert(&self, order: NewOrder) -> Result<Order, StoreError>;
}
