//! Query-keyed memo for filter results.

use super::filter::filter_indices;
use crate::domain::Destination;

/// Remembers the indices computed for the most recent query.
///
/// The catalog never changes after startup, so the last query string is a
/// sufficient key. Typing a character and deleting it again recomputes; asking
/// twice for the same query does not.
#[derive(Debug, Clone, Default)]
pub struct FilterMemo {
    entry: Option<(String, Vec<usize>)>,
    hits: u64,
    misses: u64,
}

impl FilterMemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the matching indices for `query`, computing them on a miss.
    pub fn indices(&mut self, catalog: &[Destination], query: &str) -> &[usize] {
        let cached = matches!(&self.entry, Some((key, _)) if key == query);

        if cached {
            self.hits += 1;
            tracing::trace!(query = %query, "filter memo hit");
        } else {
            self.misses += 1;
            let indices = filter_indices(catalog, query);
            tracing::trace!(query = %query, matches = indices.len(), "filter memo miss");
            self.entry = Some((query.to_string(), indices));
        }

        self.entry.as_ref().map_or(&[], |(_, indices)| indices.as_slice())
    }

    /// Number of lookups answered from the memo.
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that ran the filter.
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    #[test]
    fn repeated_query_is_a_hit() {
        let catalog = Catalog::embedded().unwrap();
        let mut memo = FilterMemo::new();

        let first = memo.indices(catalog.as_slice(), "usa").to_vec();
        let second = memo.indices(catalog.as_slice(), "usa").to_vec();

        assert_eq!(first, second);
        assert_eq!((memo.hits(), memo.misses()), (1, 1));
    }

    #[test]
    fn changed_query_recomputes() {
        let catalog = Catalog::embedded().unwrap();
        let mut memo = FilterMemo::new();

        assert_eq!(memo.indices(catalog.as_slice(), "").len(), catalog.len());
        assert_eq!(memo.indices(catalog.as_slice(), "zion"), [3]);
        assert!(memo.indices(catalog.as_slice(), "zion!").is_empty());
        assert_eq!(memo.misses(), 3);
        assert_eq!(memo.hits(), 0);
    }
}
