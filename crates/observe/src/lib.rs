//! Shared observability setup.

pub mod tracing;
