//! Summary figures derived from a catalog.
//!
//! Kept in the core so presenters only render numbers instead of recomputing
//! them.

use crate::catalog::Catalog;

/// Whole-catalog headline counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}

impl CatalogStats {
    /// Takes a snapshot of the catalog's counts.
    pub fn collect(catalog: &Catalog) -> Self {
        let total = catalog.total_count();
        let available = catalog.available_count();
        Self {
            total,
            available,
            borrowed: total - available,
        }
    }

    /// Share of the collection currently on the shelf, in percent.
    ///
    /// An empty catalog reports 0.0 rather than dividing by zero.
    pub fn availability_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.available as f64 * 100.0) / self.total as f64
    }
}

/// Per-genre counts, one entry per distinct genre string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreBreakdown {
    pub genre: String,
    pub total: usize,
    pub available: usize,
}

/// Counts per genre, in the catalog's first-seen genre order.
pub fn genre_breakdown(catalog: &Catalog) -> Vec<GenreBreakdown> {
    catalog
        .genres()
        .into_iter()
        .map(|genre| GenreBreakdown {
            total: catalog.find_by_genre(&genre).len(),
            available: catalog.find_available_by_genre(&genre).len(),
            genre,
        })
        .collect()
}
