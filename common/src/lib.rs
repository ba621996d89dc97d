//! Shared building blocks for the shelfr workspace: the [`book::Book`]
//! entity, the [`error::CatalogError`] taxonomy, the runtime [`config::Config`]
//! and the status-line macros.

pub mod book;
pub mod config;
pub mod error;
pub mod macros;

#[doc(hidden)]
pub use tracing as __tracing;
