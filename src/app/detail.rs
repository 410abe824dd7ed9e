//! Selection/detail state machine.
//!
//! ```text
//!            select(id)               select(id2)
//!   Closed ─────────────▶ Open{id} ─────────────▶ Open{id2}
//!     ▲                      │
//!     └──────── dismiss ─────┘
//! ```
//!
//! The state holds a catalog key, never a copy of the record. `Open` always
//! carries an id, so "visible but nothing selected" cannot be represented; the
//! render guard [`DetailState::visible`] additionally checks that the id still
//! resolves in the catalog.

use crate::domain::{Catalog, Destination, DestinationId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    /// No destination selected; detail view hidden.
    #[default]
    Closed,
    /// Detail view showing the destination with this id.
    Open { id: DestinationId },
}

impl DetailState {
    /// Opens the detail view on `id`, replacing any current selection.
    ///
    /// Ids that are not in the catalog are ignored and the state is left as
    /// it was. Returns whether the selection was applied.
    pub fn select(&mut self, catalog: &Catalog, id: &DestinationId) -> bool {
        if !catalog.contains(id) {
            tracing::warn!(destination = %id, "ignoring selection of unknown destination");
            return false;
        }

        tracing::debug!(destination = %id, "detail opened");
        *self = Self::Open { id: id.clone() };
        true
    }

    /// Closes the detail view and forgets the selection.
    pub fn dismiss(&mut self) {
        if let Self::Open { id } = self {
            tracing::debug!(destination = %id, "detail dismissed");
        }
        *self = Self::Closed;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub const fn selected_id(&self) -> Option<&DestinationId> {
        match self {
            Self::Open { id } => Some(id),
            Self::Closed => None,
        }
    }

    /// The destination to render, if the view is open and its id resolves.
    #[must_use]
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Option<&'a Destination> {
        self.selected_id().and_then(|id| catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> DestinationId {
        DestinationId::from(raw)
    }

    #[test]
    fn starts_closed() {
        let state = DetailState::default();
        assert!(!state.is_open());
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn select_opens_with_that_destination() {
        let catalog = Catalog::embedded().unwrap();
        let mut state = DetailState::default();

        assert!(state.select(&catalog, &id("yosemite")));
        assert!(state.is_open());
        assert_eq!(state.visible(&catalog).map(|d| d.name.as_str()), Some("Yosemite National Park"));
    }

    #[test]
    fn reselect_then_dismiss_leaves_nothing_behind() {
        let catalog = Catalog::embedded().unwrap();
        let mut state = DetailState::default();

        state.select(&catalog, &id("yosemite"));
        state.select(&catalog, &id("zion"));
        assert_eq!(state.selected_id(), Some(&id("zion")));

        state.dismiss();
        assert_eq!(state, DetailState::Closed);
        assert!(state.visible(&catalog).is_none());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let catalog = Catalog::embedded().unwrap();
        let mut state = DetailState::default();

        assert!(!state.select(&catalog, &id("denali")));
        assert_eq!(state, DetailState::Closed);

        state.select(&catalog, &id("acadia"));
        assert!(!state.select(&catalog, &id("denali")));
        assert_eq!(state.selected_id(), Some(&id("acadia")));
    }

    #[test]
    fn guard_hides_ids_missing_from_catalog() {
        let state = DetailState::Open { id: id("acadia") };
        assert!(state.visible(&Catalog::default()).is_none());
    }

    #[test]
    fn dismiss_when_closed_is_harmless() {
        let mut state = DetailState::Closed;
        state.dismiss();
        assert_eq!(state, DetailState::Closed);
    }
}
