//! Case-insensitive substring filter over destinations.
//!
//! A record matches when its name, its location, or any of its features
//! contains the query. The filter is stable: matches keep catalog order. An
//! empty query returns every record unchanged.

use crate::domain::Destination;

/// Classification of a filter result.
///
/// "No query yet" and "query with no matches" render differently, so callers
/// get an explicit variant for each instead of inspecting an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query is empty; the whole catalog is shown.
    Unfiltered,
    /// The query matched this many records (at least one).
    Matches(usize),
    /// The query matched nothing.
    NoMatches,
}

impl SearchOutcome {
    /// Classifies a result from the query and its match count.
    #[must_use]
    pub const fn classify(query: &str, match_count: usize) -> Self {
        if query.is_empty() {
            Self::Unfiltered
        } else if match_count == 0 {
            Self::NoMatches
        } else {
            Self::Matches(match_count)
        }
    }
}

/// Filters `records` by `query`, preserving input order.
///
/// Accepts any iterator of destination references so the output of one call
/// can be fed straight back into another.
///
/// ```
/// use nomorra::domain::Catalog;
/// use nomorra::search::filter;
///
/// let catalog = Catalog::embedded().unwrap();
/// let hits = filter(&catalog, "wyoming");
/// assert_eq!(hits[0].id.as_str(), "yellowstone");
/// assert!(filter(&catalog, "xyz123").is_empty());
/// ```
pub fn filter<'a, I>(records: I, query: &str) -> Vec<&'a Destination>
where
    I: IntoIterator<Item = &'a Destination>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|destination| destination.matches_lowercase(&needle))
        .collect()
}

/// Returns the catalog positions of the records matching `query`.
#[must_use]
pub fn filter_indices(catalog: &[Destination], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..catalog.len()).collect();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, destination)| destination.matches_lowercase(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Finds case-insensitive occurrences of `query` in `text`.
///
/// Returns non-overlapping `(start, end)` ranges in char indices, end
/// exclusive, for match highlighting. Case folding is per character, so it can
/// disagree with [`filter`] for characters whose lowercase form expands.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    fn fold(c: char) -> char {
        c.to_lowercase().next().unwrap_or(c)
    }

    let needle: Vec<char> = query.chars().map(fold).collect();
    if needle.is_empty() {
        return vec![];
    }

    let hay: Vec<char> = text.chars().map(fold).collect();
    let mut ranges = Vec::new();
    let mut start = 0;

    while start + needle.len() <= hay.len() {
        if hay[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }

    ranges
}
