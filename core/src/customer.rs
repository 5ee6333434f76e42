// order_intake/src/customer.rs

//! Resolution of the customer an order belongs to.
//!
//! Requests carry no customer information yet, so the default resolver
//! answers with one configured identifier for every order.

use async_trait::async_trait;

use crate::core::order::{CustomerId, OrderRequest};
use crate::error::IntakeResult;

pub const PLACEHOLDER_CUSTOMER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

#[async_trait]
pub trait CustomerResolver: Send + Sync {
  async fn resolve(&self, request: &OrderRequest) -> IntakeResult<CustomerId>;
}

#[derive(Debug, Clone)]
pub struct FixedCustomerResolver {
  customer_id: CustomerId,
}

impl FixedCustomerResolver {
  pub fn new(customer_id: CustomerId) -> Self {
    Self { customer_id }
  }
}

impl Default for FixedCustomerResolver {
  fn default() -> Self {
    Self::new(CustomerId::new(PLACEHOLDER_CUSTOMER_ID))
  }
}

#[async_trait]
impl CustomerResolver for FixedCustomerResolver {
  async fn resolve(&self, _request: &OrderRequest) -> IntakeResult<CustomerId> {
    Ok(self.customer_id.clone())
  }
}
