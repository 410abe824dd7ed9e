//! Filter engine over the destination catalog.
//!
//! Pure functions for computing the visible subset of the catalog for a
//! query, plus a small memo so an unchanged query is not recomputed.
//!
//! Matching lowercases with [`str::to_lowercase`] and does no Unicode
//! normalization: "Élan" written with a combining accent will not match a
//! precomposed "É".

pub mod filter;
pub mod memo;

pub use filter::{filter, filter_indices, match_ranges, SearchOutcome};
pub use memo::FilterMemo;
