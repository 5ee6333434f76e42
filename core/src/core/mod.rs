pub mod amount;
pub mod context;
pub mod event;
pub mod order;
pub mod step;

// Re-export key types for easier access from other modules (and lib.rs)
pub use amount::{Amount, AmountError};
pub use context::{IntakeContext, IntakeOutcome};
pub use event::{CustomerRef, OrderCreatedEvent};
pub use order::{CustomerId, NewOrder, Order, OrderId, OrderRequest};
pub use step::{FailurePolicy, IntakeStep, UnknownFailurePolicy};
