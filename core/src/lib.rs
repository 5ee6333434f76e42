// src/lib.rs

//! order_intake: the core of an order-intake service.
//!
//! An intake takes a validated `OrderRequest` through four named steps:
//!  - `generate_order_id`: a fresh random UUID per request.
//!  - `resolve_customer`: asks the `CustomerResolver` who the order belongs to.
//!  - `persist_order`: one write to the `OrderStore`.
//!  - `dispatch_order_created`: a fire-and-forget `OrderCreatedEvent` to the `EventDispatcher`.
//!
//! The `FailurePolicy` decides whether persistence or dispatch comes first and
//! whether a failed write fails the request. Optional `IntakeHook`s observe each
//! step without affecting the outcome.

pub mod core;
pub mod customer;
pub mod dispatch;
pub mod error;
pub mod pipeline;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::core::amount::{Amount, AmountError};
pub use crate::core::context::{IntakeContext, IntakeOutcome};
pub use crate::core::event::{CustomerRef, OrderCreatedEvent};
pub use crate::core::order::{CustomerId, NewOrder, Order, OrderId, OrderRequest};
pub use crate::core::step::{FailurePolicy, IntakeStep, UnknownFailurePolicy};

pub use crate::customer::{CustomerResolver, FixedCustomerResolver, PLACEHOLDER_CUSTOMER_ID};
pub use crate::dispatch::{EventDispatcher, LoggingDispatcher, RecordingDispatcher};
pub use crate::store::{InMemoryOrderStore, OrderStore};

pub use crate::pipeline::{IntakeHook, NoopHook, OrderIntake, SpanAnnotationHook};

pub use crate::error::{IntakeError, IntakeResult, StoreError};

/*
    Typical wiring:
    1. Pick an `OrderStore` (Postgres in the service, `InMemoryOrderStore` in tests).
    2. Pick an `EventDispatcher` (`LoggingDispatcher`, `RecordingDispatcher`, or a broker client).
    3. `OrderIntake::new(store, dispatcher)`, then optionally `.with_policy(..)`,
       `.with_customer_resolver(..)` and `.with_hook(..)`.
    4. Share it behind an `Arc` and call `create_order(request).await` per request.
*/
