//! Destination domain model.
//!
//! A [`Destination`] is one national-park story in the catalog. Records are
//! immutable once the catalog has been built; everything here is read-only
//! accessors and the validation rules the catalog applies on load.

use crate::domain::error::{NomorraError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest rating a destination can carry.
pub const MAX_RATING: f32 = 5.0;

/// Number of star slots shown for a rating.
pub const STAR_SLOTS: u8 = 5;

/// Stable identifier of a destination within the catalog.
///
/// Selection state stores this key instead of a copy of the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(String);

impl DestinationId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DestinationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A travel destination record.
///
/// Field names serialize in camelCase (`fullDescription`, `planningInfo`) so the
/// catalog JSON keeps the same shape as the published blog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub location: String,
    /// Rating in `[0.0, 5.0]` with one decimal of precision.
    pub rating: f32,
    /// Free-text difficulty label ("Moderate", "Easy to Hard", ...).
    pub difficulty: String,
    /// Short tags; order matters for truncated previews.
    #[serde(default)]
    pub features: Vec<String>,
    /// URI of the display image.
    pub image: String,
    pub description: String,
    pub full_description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub planning_info: String,
}

/// Star breakdown of a rating, always covering [`STAR_SLOTS`] slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl Destination {
    /// Tests whether the name, location or any feature contains `needle`.
    ///
    /// `needle` must already be lowercased; each field is lowercased here. This
    /// is plain substring matching, not token matching.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
            || self
                .features
                .iter()
                .any(|feature| feature.to_lowercase().contains(needle))
    }

    /// Splits the rating into full, half and empty stars.
    ///
    /// A half star is shown whenever the rating has any fractional part.
    ///
    /// ```
    /// use nomorra::domain::Destination;
    /// # let json = r#"{"id":"x","name":"X","location":"L","rating":4.5,"difficulty":"Easy",
    /// #   "features":[],"image":"i","description":"d","fullDescription":"f",
    /// #   "highlights":[],"planningInfo":"p"}"#;
    /// let destination: Destination = serde_json::from_str(json).unwrap();
    /// let stars = destination.stars();
    /// assert_eq!((stars.full, stars.half, stars.empty), (4, true, 0));
    /// ```
    #[must_use]
    pub fn stars(&self) -> StarRating {
        let clamped = self.rating.clamp(0.0, MAX_RATING);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let full = clamped.floor() as u8;
        let half = clamped.fract() > f32::EPSILON && full < STAR_SLOTS;
        let empty = STAR_SLOTS - full - u8::from(half);
        StarRating { full, half, empty }
    }

    /// Returns at most `limit` features, in catalog order.
    #[must_use]
    pub fn feature_preview(&self, limit: usize) -> &[String] {
        &self.features[..self.features.len().min(limit)]
    }

    /// Checks the record against the catalog rules.
    ///
    /// Required text fields must be non-empty and the rating must be a finite
    /// value in `[0, 5]` with at most one decimal. Missing features or
    /// highlights only degrade the display, so they are logged, not rejected.
    ///
    /// # Errors
    ///
    /// Returns [`NomorraError::InvalidDestination`] naming the first rule broken.
    pub fn validate(&self) -> Result<()> {
        let id = self.id.as_str();
        let required = [
            ("id", id),
            ("name", self.name.as_str()),
            ("location", self.location.as_str()),
            ("difficulty", self.difficulty.as_str()),
            ("image", self.image.as_str()),
            ("description", self.description.as_str()),
            ("fullDescription", self.full_description.as_str()),
            ("planningInfo", self.planning_info.as_str()),
        ];

        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(NomorraError::invalid(id, format!("missing required field `{field}`")));
        }

        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(NomorraError::invalid(
                id,
                format!("rating {} is outside [0, {MAX_RATING}]", self.rating),
            ));
        }

        let tenths = self.rating * 10.0;
        if (tenths - tenths.round()).abs() > 1e-3 {
            return Err(NomorraError::invalid(
                id,
                format!("rating {} has more than one decimal", self.rating),
            ));
        }

        if self.features.is_empty() {
            tracing::warn!(destination = %id, "destination has no features");
        }
        if self.highlights.is_empty() {
            tracing::warn!(destination = %id, "destination has no highlights");
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Destination, DestinationId};

    /// Builds a small valid destination for tests.
    pub fn destination(id: &str, name: &str, location: &str, features: &[&str]) -> Destination {
        Destination {
            id: DestinationId::new(id),
            name: name.to_string(),
            location: location.to_string(),
            rating: 4.5,
            difficulty: "Moderate".to_string(),
            features: features.iter().map(ToString::to_string).collect(),
            image: format!("https://example.com/{id}.jpg"),
            description: format!("{name} in short."),
            full_description: format!("{name} at length."),
            highlights: vec![format!("{name} highlight")],
            planning_info: "Go in summer.".to_string(),
        }
    }
}
