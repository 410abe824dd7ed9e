//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place state changes in response to input. It
//! pattern-matches an [`Event`], mutates [`AppState`] and returns whether the
//! UI should re-render plus any [`Action`]s the plugin shim must execute.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Activate`
//! - **Detail**: `SelectDestination`, `DismissDetail`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`,
//!   `ClearSearch`, `Char`, `Backspace`
//! - **Sections**: `ToggleDrawer`, `CloseDrawer`, `NextSection`, `ShowSection`
//! - **Other**: `Escape`, `CloseFocus`
//!
//! `KeyDown`/`KeyUp`/`Activate`/`Escape` are contextual: the drawer takes them
//! first, then an open detail view, then the current section.
//!
//! # Example
//!
//! ```rust
//! use nomorra::app::{handle_event, AppState, Event};
//! use nomorra::domain::Catalog;
//! use nomorra::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::embedded().unwrap(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Activate)?;
//! assert!(should_render && actions.is_empty());
//! assert!(state.detail.is_open());
//! # Ok::<(), nomorra::NomorraError>(())
//! ```

use super::modes::{InputMode, SearchFocus, Section};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::DestinationId;

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor (list, drawer or contact link) down, or scrolls the
    /// detail view.
    KeyDown,
    /// Moves the cursor up, or scrolls the detail view back.
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Enter: open the highlighted story, follow the drawer entry, open the
    /// highlighted link or close the detail view.
    Activate,
    /// Opens the detail view on a specific destination.
    SelectDestination(DestinationId),
    /// Closes the detail view.
    DismissDetail,
    /// Enters search mode with typing focus and an empty query.
    SearchMode,
    /// Returns focus to the search input.
    FocusSearchBar,
    /// Moves focus from the input to the results.
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Empties the query so every story shows again, keeping the search box
    /// open for a new query.
    ClearSearch,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Backs out of the innermost open layer.
    Escape,
    /// Opens or closes the navigation drawer.
    ToggleDrawer,
    /// Closes the navigation drawer.
    CloseDrawer,
    /// Cycles to the next section.
    NextSection,
    /// Jumps to a section.
    ShowSection(Section),
}

/// Processes an event, mutates application state, and returns
/// `(should_render, actions)`.
///
/// # Errors
///
/// No current event fails; the `Result` keeps the shim's error path in place
/// for handlers that do.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => Ok((move_cursor(state, true), vec![])),
        Event::KeyUp => Ok((move_cursor(state, false), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Activate => Ok(activate(state)),
        Event::SelectDestination(id) => Ok((state.select_destination(id), vec![])),
        Event::DismissDetail => Ok((state.dismiss_detail(), vec![])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            if state.section != Section::Stories {
                state.navigate_to(Section::Stories);
            }
            state.drawer.close();
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query.clear();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.exit_search();
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.exit_search();
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            tracing::debug!(query = %state.search_query, "clearing query");
            state.search_query.clear();
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) || state.search_query.pop().is_none() {
                return Ok((false, vec![]));
            }

            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.drawer.open {
                state.drawer.close();
            } else if state.detail.is_open() {
                state.dismiss_detail();
            } else {
                state.exit_search();
            }
            Ok((true, vec![]))
        }
        Event::ToggleDrawer => {
            if state.drawer.open {
                state.drawer.close();
            } else {
                state.drawer.open_at(state.section);
            }
            tracing::debug!(open = state.drawer.open, "drawer toggled");
            Ok((true, vec![]))
        }
        Event::CloseDrawer => {
            let was_open = state.drawer.open;
            state.drawer.close();
            Ok((was_open, vec![]))
        }
        Event::NextSection => {
            state.navigate_to(state.section.next());
            Ok((true, vec![]))
        }
        Event::ShowSection(section) => {
            state.navigate_to(*section);
            Ok((true, vec![]))
        }
    }
}

fn move_cursor(state: &mut AppState, down: bool) -> bool {
    if state.drawer.open {
        if down {
            state.drawer.move_down();
        } else {
            state.drawer.move_up();
        }
        return true;
    }

    if state.detail.is_open() {
        let before = state.detail_scroll;
        state.scroll_detail(if down { 1 } else { -1 });
        return state.detail_scroll != before;
    }

    match state.section {
        Section::Stories => {
            if down {
                state.move_selection_down();
            } else {
                state.move_selection_up();
            }
            true
        }
        Section::Contact => {
            if down {
                state.move_link_down();
            } else {
                state.move_link_up();
            }
            true
        }
        Section::About => false,
    }
}

fn activate(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.drawer.open {
        let target = state.drawer.highlighted();
        state.navigate_to(target);
        return (true, vec![]);
    }

    if state.detail.is_open() {
        state.dismiss_detail();
        return (true, vec![]);
    }

    match state.section {
        Section::Stories => {
            if state.open_selected() {
                return (true, vec![]);
            }
            if matches!(state.input_mode, InputMode::Search(_)) {
                tracing::debug!("no story selected, clearing search");
                state.exit_search();
                return (true, vec![]);
            }
            tracing::debug!("no story selected");
            (false, vec![])
        }
        Section::Contact => {
            let link = state.selected_link();
            tracing::debug!(network = link.icon.label(), url = link.url, "opening social link");
            (
                false,
                vec![Action::OpenLink {
                    url: link.url.to_string(),
                }],
            )
        }
        Section::About => (false, vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(Catalog::embedded().unwrap(), Theme::default())
    }

    fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|event| handle_event(state, event).unwrap().1)
            .collect()
    }

    fn type_query(state: &mut AppState, query: &str) {
        send(state, &[Event::SearchMode]);
        for c in query.chars() {
            send(state, &[Event::Char(c)]);
        }
    }

    fn open_id(state: &AppState) -> Option<&str> {
        state.detail.selected_id().map(DestinationId::as_str)
    }

    #[test]
    fn typing_filters_and_enter_opens_match() {
        let mut state = state();
        type_query(&mut state, "wyoming");

        assert_eq!(state.filtered, [0]);
        send(&mut state, &[Event::Activate]);
        assert_eq!(open_id(&state), Some("yellowstone"));
    }

    #[test]
    fn backspace_widens_results() {
        let mut state = state();
        type_query(&mut state, "zionx");
        assert!(state.filtered.is_empty());

        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(render);
        assert_eq!(state.filtered, [3]);
    }

    #[test]
    fn backspace_on_empty_query_does_nothing() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode]);
        assert_eq!(handle_event(&mut state, &Event::Backspace).unwrap(), (false, vec![]));
    }

    #[test]
    fn chars_are_ignored_outside_search() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::Char('z')).unwrap(), (false, vec![]));
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn enter_on_empty_result_views_all_stories() {
        let mut state = state();
        type_query(&mut state, "xyz123");

        send(&mut state, &[Event::Activate]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered.len(), 7);
        assert!(!state.detail.is_open());
    }

    #[test]
    fn clear_search_keeps_typing_with_every_story() {
        let mut state = state();
        type_query(&mut state, "utah");
        send(&mut state, &[Event::FocusResults]);
        assert_eq!(state.filtered, [3]);

        let (render, _) = handle_event(&mut state, &Event::ClearSearch).unwrap();
        assert!(render);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered.len(), 7);

        send(&mut state, &[Event::Char('z')]);
        assert_eq!(state.search_query, "z");
    }

    #[test]
    fn clear_search_outside_search_does_nothing() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::ClearSearch).unwrap(), (false, vec![]));
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn select_select_dismiss_leaves_nothing_open() {
        let mut state = state();
        send(
            &mut state,
            &[
                Event::SelectDestination(DestinationId::from("yosemite")),
                Event::SelectDestination(DestinationId::from("zion")),
            ],
        );
        assert_eq!(open_id(&state), Some("zion"));

        send(&mut state, &[Event::DismissDetail]);
        assert_eq!(open_id(&state), None);
        assert!(state.detail.visible(&state.catalog).is_none());
    }

    #[test]
    fn selecting_unknown_destination_is_ignored() {
        let mut state = state();
        let (render, actions) =
            handle_event(&mut state, &Event::SelectDestination(DestinationId::from("atlantis"))).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert!(!state.detail.is_open());
    }

    #[test]
    fn keys_scroll_detail_instead_of_moving_selection() {
        let mut state = state();
        state.set_viewport(12, 40);
        send(&mut state, &[Event::Activate, Event::KeyDown, Event::KeyDown]);

        assert_eq!(state.selected_index, 0);
        assert_eq!(state.detail_scroll, 2);

        send(&mut state, &[Event::KeyUp]);
        assert_eq!(state.detail_scroll, 1);
    }

    #[test]
    fn escape_unwinds_drawer_then_detail_then_search() {
        let mut state = state();
        type_query(&mut state, "park");
        send(&mut state, &[Event::Activate, Event::ToggleDrawer]);

        send(&mut state, &[Event::Escape]);
        assert!(!state.drawer.open);
        assert!(state.detail.is_open());

        send(&mut state, &[Event::Escape]);
        assert!(!state.detail.is_open());
        assert_eq!(state.search_query, "park");

        send(&mut state, &[Event::Escape]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn drawer_enter_navigates_and_closes() {
        let mut state = state();
        send(&mut state, &[Event::ToggleDrawer, Event::KeyDown, Event::KeyDown]);
        assert_eq!(state.drawer.highlighted(), Section::Contact);
        assert_eq!(state.selected_index, 0);

        send(&mut state, &[Event::Activate]);
        assert_eq!(state.section, Section::Contact);
        assert!(!state.drawer.open);
    }

    #[test]
    fn contact_enter_opens_the_selected_link() {
        let mut state = state();
        let actions = send(&mut state, &[Event::ShowSection(Section::Contact), Event::KeyDown, Event::Activate]);

        assert_eq!(
            actions,
            [Action::OpenLink {
                url: "https://twitter.com/campexplorer".to_string()
            }]
        );
    }

    #[test]
    fn tab_cycles_sections() {
        let mut state = state();
        send(&mut state, &[Event::NextSection]);
        assert_eq!(state.section, Section::About);
        send(&mut state, &[Event::NextSection, Event::NextSection]);
        assert_eq!(state.section, Section::Stories);
    }

    #[test]
    fn search_from_another_section_returns_to_stories() {
        let mut state = state();
        send(&mut state, &[Event::ShowSection(Section::About), Event::SearchMode]);

        assert_eq!(state.section, Section::Stories);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));
    }

    #[test]
    fn focus_results_with_empty_query_leaves_search() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode, Event::FocusResults]);
        assert_eq!(state.input_mode, InputMode::Normal);

        type_query(&mut state, "usa");
        send(&mut state, &[Event::FocusResults]);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn close_focus_emits_action_without_render() {
        let mut state = state();
        assert_eq!(
            handle_event(&mut state, &Event::CloseFocus).unwrap(),
            (false, vec![Action::CloseFocus])
        );
    }

    #[test]
    fn about_ignores_cursor_keys() {
        let mut state = state();
        send(&mut state, &[Event::ShowSection(Section::About)]);
        assert_eq!(handle_event(&mut state, &Event::KeyDown).unwrap(), (false, vec![]));
    }
}
