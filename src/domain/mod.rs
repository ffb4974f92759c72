//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or HTTP; concrete
//! storage lives in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
