//! # Catalog Core
//!
//! The in-memory book catalog: one aggregate holding every record and
//! enforcing the uniqueness and availability rules, plus a statistics module
//! deriving summary figures from it.
//!
//! High-level consumers (the CLI, the integration tests) depend on this crate
//! and never touch catalog internals directly.

pub mod catalog;
pub mod stats;

pub use catalog::Catalog;
