//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
