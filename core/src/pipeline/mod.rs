// order_intake/src/pipeline/mod.rs

//! Defines the `OrderIntake` service: its construction, instrumentation
//! hooks, and the step-by-step execution of an order creation.

pub mod definition;
pub mod execution;
pub mod hooks;

pub use definition::OrderIntake;
pub use hooks::{IntakeHook, NoopHook, SpanAnnotationHook};
