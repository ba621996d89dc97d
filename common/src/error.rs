//! The catalog error taxonomy.
//!
//! Absence is only an error for state-changing operations that expect a known
//! record (borrow, return). Searches and filters model absence as empty
//! results instead.

use thiserror::Error;

/// Failure conditions surfaced by catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A supplied book record is unusable, e.g. it carries an empty ISBN.
    #[error("invalid book: {0}")]
    InvalidBook(String),

    /// No book with the given ISBN exists in the catalog.
    #[error("book not found: {0}")]
    NotFound(String),

    /// The book exists but is already on loan.
    #[error("book is not available: {0}")]
    Unavailable(String),
}
