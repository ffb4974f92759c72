//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Structured request/response logging

pub mod tracing;
