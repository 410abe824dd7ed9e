//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Nomorra library and the Zellij plugin
//! system. Translates Zellij key events into library events, runs them through
//! `handle_event`, and executes the resulting actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Update**: Map keys to library events, execute actions
//! 4. **Render**: Record the pane size, call the library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! Detail view open:
//! - `j`/`k`/arrows: Scroll
//! - `Enter`/`q`/`Esc`: Back to the list
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `Enter`: Open story, follow drawer entry or open link
//! - `/`: Search
//! - `m`: Toggle navigation drawer
//! - `Tab`: Next section
//! - `q`: Close drawer, or close plugin
//! - `Esc`: Back out of the drawer or search
//!
//! Search mode (typing):
//! - Characters: Edit the query
//! - `Enter`: Open the highlighted story, or show all stories on no match
//! - `Tab`: Move focus to the results
//! - `Ctrl+u`: Clear the query and keep typing (also from the results)
//! - `Esc`: Exit search
//!
//! Search mode (navigating results):
//! - `j`/`k`: Move
//! - `/`: Back to the search input

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use nomorra::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: nomorra::AppState,

    /// Whether `RunCommands` was granted, needed to open links.
    can_run_commands: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: nomorra::initialize(&Config::default()),
            can_run_commands: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Requests `RunCommands` so contact links can be handed to `xdg-open`.
    /// Everything else works without permissions.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        nomorra::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = nomorra::initialize(&config);
        tracing::debug!(stories = self.app.catalog.len(), "app state initialized");

        request_permission(&[PermissionType::RunCommands]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.can_run_commands = matches!(status, PermissionStatus::Granted);
                if !self.can_run_commands {
                    tracing::warn!("permissions denied - links cannot be opened");
                }
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        nomorra::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('u') if matches!(self.app.input_mode, InputMode::Search(_)) => {
                    Some(Event::ClearSearch)
                }
                _ => None,
            };
        }

        if self.app.detail.is_open() {
            return Self::map_detail_key(key);
        }

        match self.app.input_mode {
            InputMode::Search(SearchFocus::Typing) => Self::map_typing_key(key),
            InputMode::Search(SearchFocus::Navigating) => Self::map_results_key(key),
            InputMode::Normal => self.map_normal_key(key),
        }
    }

    fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter | BareKey::Char('q') => Event::DismissDetail,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    fn map_typing_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::Activate,
            BareKey::Tab => Event::FocusResults,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_results_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::Activate,
            BareKey::Char('/') | BareKey::Backspace => Event::FocusSearchBar,
            BareKey::Esc => Event::ExitSearch,
            _ => return None,
        })
    }

    fn map_normal_key(&self, key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::Activate,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('m') => Event::ToggleDrawer,
            BareKey::Tab => Event::NextSection,
            BareKey::Char('q') if self.app.drawer.open => Event::CloseDrawer,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    /// Executes an action emitted by the event handler.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
            Action::OpenLink { url } => {
                if !self.can_run_commands {
                    tracing::warn!(url = %url, "cannot open link without RunCommands permission");
                    return;
                }
                tracing::debug!(url = %url, "opening link");
                run_command(&["xdg-open", url.as_str()], BTreeMap::new());
            }
        }
    }
}
