// apps/orders_app/src/models/mod.rs

//! Contains data structures representing database rows.

pub mod order;

pub use order::OrderRow;
