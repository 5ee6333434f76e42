// apps/orders_app/src/db/mod.rs

//! PostgreSQL connection setup and the Postgres-backed order store.

pub mod pg_store;

pub use pg_store::PgOrderStore;

use crate::errors::Result as AppResult;
use sqlx::PgPool;

const CREATE_ORDERS_TABLE: &str = include_str!("../../migrations/0001_create_orders.sql");

pub async fn connect(database_url: &str) -> AppResult<PgPool> {
  let pool = PgPool::connect(database_url).await?;
  tracing::info!("Successfully connected to the database.");
  Ok(pool)
}

/// Creates the `orders` table if it does not exist.
pub async fn init_schema(pool: &PgPool) -> AppResult<()> {
  sqlx::query(CREATE_ORDERS_TABLE).execute(pool).await?;
  tracing::info!("Database schema initialized.");
  Ok(())
}
