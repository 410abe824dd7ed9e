//! The destination catalog.
//!
//! The catalog is built once at startup, validated, and never mutated again.
//! The default catalog is embedded in the binary from `data/destinations.json`;
//! a replacement can be loaded from a JSON file named in the plugin config.

use crate::domain::destination::{Destination, DestinationId};
use crate::domain::error::{NomorraError, Result};
use std::collections::HashSet;
use std::path::Path;

/// Catalog JSON compiled into the plugin.
const EMBEDDED_CATALOG: &str = include_str!("../../data/destinations.json");

/// Immutable, ordered collection of destinations.
///
/// Order is the order of the source data and is preserved by every query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Builds a catalog after validating every record.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, or [`NomorraError::DuplicateId`]
    /// when two records share an id.
    pub fn new(destinations: Vec<Destination>) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_new", count = destinations.len()).entered();

        let mut seen = HashSet::with_capacity(destinations.len());
        for destination in &destinations {
            destination.validate()?;
            if !seen.insert(destination.id.as_str()) {
                return Err(NomorraError::DuplicateId(destination.id.to_string()));
            }
        }

        tracing::debug!("catalog validated");
        Ok(Self { destinations })
    }

    /// Parses and validates a JSON array of destinations.
    ///
    /// # Errors
    ///
    /// Returns [`NomorraError::Json`] for malformed JSON or a missing field, and
    /// any error from [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self> {
        let destinations: Vec<Destination> = serde_json::from_str(json)?;
        Self::new(destinations)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise the same
    /// errors as [`Catalog::from_json`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading catalog file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Returns the catalog compiled into the plugin.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data is malformed, which the test suite rules out.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
            .map_err(|e| NomorraError::Catalog(format!("embedded catalog is invalid: {e}")))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Destination> {
        self.destinations.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Looks a destination up by id.
    #[must_use]
    pub fn get(&self, id: &DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|d| &d.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &DestinationId) -> bool {
        self.get(id).is_some()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::destination::fixtures::destination;
    use std::io::Write;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = Catalog::embedded().expect("bundled catalog must validate");

        assert_eq!(catalog.len(), 7);
        let ids: Vec<&str> = catalog.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            ["yellowstone", "yosemite", "grand-canyon", "zion", "acadia", "rocky-mountain", "glacier"]
        );
        assert!(catalog.iter().all(|d| !d.features.is_empty() && !d.highlights.is_empty()));
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::embedded().unwrap();
        let zion = catalog.get(&DestinationId::from("zion")).unwrap();

        assert_eq!(zion.name, "Zion National Park");
        assert!(!catalog.contains(&DestinationId::from("denali")));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![
            destination("zion", "Zion", "Utah, USA", &["Desert"]),
            destination("zion", "Zion Again", "Utah, USA", &["Desert"]),
        ]);

        assert!(matches!(result, Err(NomorraError::DuplicateId(id)) if id == "zion"));
    }

    #[test]
    fn missing_field_is_a_json_error() {
        let json = r#"[{"id": "x", "name": "X"}]"#;
        assert!(matches!(Catalog::from_json(json), Err(NomorraError::Json(_))));
    }

    #[test]
    fn invalid_record_rejects_whole_catalog() {
        let mut bad = destination("bad", "Bad", "Nowhere", &["Nothing"]);
        bad.rating = 7.0;

        let result = Catalog::new(vec![destination("ok", "Ok", "Somewhere", &["Something"]), bad]);
        assert!(matches!(result, Err(NomorraError::InvalidDestination { id, .. }) if id == "bad"));
    }

    #[test]
    fn loads_from_file() {
        let records = vec![
            destination("arches", "Arches National Park", "Utah, USA", &["Arches"]),
            destination("olympic", "Olympic National Park", "Washington, USA", &["Rainforest"]),
        ];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&records).unwrap()).unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.as_slice(), records.as_slice());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(NomorraError::Io(_))));
    }
}
