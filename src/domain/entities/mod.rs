//! Core domain entities.
//!
//! - [`Link`] - A stored short code → URL mapping with click accounting
//! - [`NewLink`] - Input for creating a link

pub mod link;

pub use link::{Link, NewLink};
