//! Observability for the DSIGNER'S storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with request context
//! - `LogBuilder` - Fluent builder for entries with typed fields

mod logging;

pub use logging::*;

// Re-export RequestId from dsigner-core for convenience
pub use dsigner_core::RequestId;
