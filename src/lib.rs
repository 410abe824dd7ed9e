//! Nomorra: a Zellij plugin for browsing national-park travel stories.
//!
//! Nomorra presents a fixed catalog of park destinations in a terminal pane:
//! - A story list with live, case-insensitive search over name, location and features
//! - A scrollable detail view for one destination at a time
//! - About and Contact sections reachable from a navigation drawer
//! - Theming via built-in or user-supplied TOML themes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, detail state machine             │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search Layer  │
//! │ (ui/)         │   │ (search/)     │
//! │ - Rendering   │   │ - Filtering   │
//! │ - Theming     │   │ - Memoization │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Destinations, catalog, profile (domain/)         │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to OTLP JSON files         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/nomorra.wasm" {
//!         theme "catppuccin-mocha"
//!         catalog_file "~/parks.json"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use nomorra::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! for event in [Event::SearchMode, Event::Char('z'), Event::Activate] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert!(state.detail.is_open());
//! # Ok::<(), nomorra::NomorraError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod search;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, Section};
pub use domain::{Catalog, Destination, DestinationId, NomorraError, Result};
pub use ui::Theme;

use infrastructure::resolve_config_path;
use std::collections::BTreeMap;
use ui::theme::BUILTIN_THEMES;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/nomorra.wasm" {
///     theme "catppuccin-latte"
///     theme_file "~/.config/nomorra/dusk.toml"
///     catalog_file "~/parks.json"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...). Default: `info`.
    pub trace_level: Option<String>,

    /// Path to a JSON catalog replacing the embedded one.
    pub catalog_file: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Values are trimmed; blank values count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use nomorra::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-mocha".to_string());
    /// map.insert("catalog_file".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-mocha"));
    /// assert_eq!(config.catalog_file, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
            catalog_file: get("catalog_file"),
        }
    }

    /// Loads the configured theme.
    ///
    /// # Errors
    ///
    /// Returns [`NomorraError::Theme`] if `theme_file` cannot be read or parsed,
    /// and [`NomorraError::Config`] for an unknown built-in theme name.
    pub fn load_theme(&self) -> Result<Theme> {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(resolve_config_path(theme_file));
        }

        match &self.theme_name {
            Some(name) => Theme::from_name(name).ok_or_else(|| {
                NomorraError::Config(format!(
                    "unknown theme '{name}', expected one of: {}",
                    BUILTIN_THEMES.join(", ")
                ))
            }),
            None => Ok(Theme::default()),
        }
    }

    /// Loads the configured catalog, or the embedded one when none is set.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Catalog::from_file`] or [`Catalog::embedded`].
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_file {
            Some(catalog_file) => Catalog::from_file(resolve_config_path(catalog_file)),
            None => Catalog::embedded(),
        }
    }
}

/// Initializes the plugin state from configuration.
///
/// Never fails: a bad theme falls back to the default theme and a bad
/// external catalog falls back to the embedded one, each with a logged
/// warning. If even the embedded catalog is rejected the plugin starts with an
/// empty catalog.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing nomorra plugin");

    let theme = config.load_theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    let catalog = config
        .load_catalog()
        .or_else(|e| {
            tracing::warn!(error = %e, "failed to load catalog file, using embedded catalog");
            Catalog::embedded()
        })
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "embedded catalog rejected, starting empty");
            Catalog::default()
        });

    tracing::debug!(stories = catalog.len(), theme = %theme.name, "plugin initialized");
    AppState::new(catalog, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn parses_every_known_key() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", " /tmp/dusk.toml "),
            ("trace_level", "debug"),
            ("catalog_file", "~/parks.json"),
            ("unrelated", "ignored"),
        ]));

        assert_eq!(
            config,
            Config {
                theme_name: Some("catppuccin-latte".to_string()),
                theme_file: Some("/tmp/dusk.toml".to_string()),
                trace_level: Some("debug".to_string()),
                catalog_file: Some("~/parks.json".to_string()),
            }
        );
    }

    #[test]
    fn empty_map_is_default() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn unknown_theme_name_is_config_error() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };

        let err = config.load_theme().unwrap_err();
        assert!(matches!(err, NomorraError::Config(_)));
        assert!(err.to_string().contains("campfire"));
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = NamedTempFile::new().unwrap();
        let dusk = include_str!("../themes/campfire.toml").replace("name = \"campfire\"", "name = \"dusk\"");
        file.write_all(dusk.as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };

        assert_eq!(config.load_theme().unwrap().name, "dusk");
    }

    #[test]
    fn initialize_uses_embedded_catalog_by_default() {
        let state = initialize(&Config::default());
        assert_eq!(state.catalog.len(), Catalog::embedded().unwrap().len());
        assert_eq!(state.theme, Theme::default());
    }

    #[test]
    fn initialize_loads_external_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        let embedded = Catalog::embedded().unwrap();
        let first = serde_json::to_string(&vec![embedded.as_slice()[0].clone()]).unwrap();
        file.write_all(first.as_bytes()).unwrap();

        let state = initialize(&Config {
            catalog_file: Some(file.path().display().to_string()),
            ..Config::default()
        });

        assert_eq!(state.catalog.len(), 1);
    }

    #[test]
    fn initialize_falls_back_on_bad_inputs() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[{\"id\": \"broken\"}]").unwrap();

        let state = initialize(&Config {
            theme_name: Some("neon".to_string()),
            catalog_file: Some(file.path().display().to_string()),
            ..Config::default()
        });

        assert_eq!(state.catalog.len(), Catalog::embedded().unwrap().len());
        assert_eq!(state.theme, Theme::default());
    }
}
