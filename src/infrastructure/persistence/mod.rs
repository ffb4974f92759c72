//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters.
//!
//! - [`PgLinkRepository`] - Link storage, retrieval and click accounting

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
