//! Color themes and ANSI escape sequences.
//!
//! Themes are small TOML documents with hex colors. Three are built in and
//! embedded at compile time; any other theme can be loaded from a file with the
//! `theme_file` plugin option.
//!
//! # Built-in Themes
//!
//! - `campfire`: warm dark theme with ember accents (default)
//! - `catppuccin-mocha`: dark Catppuccin
//! - `catppuccin-latte`: light Catppuccin
//!
//! # TOML Format
//!
//! ```toml
//! name = "dusk"
//!
//! [colors]
//! header_fg = "#fdba74"
//! # header_bg = "#292524"   (optional)
//! selection_fg = "#1c1917"
//! selection_bg = "#fb923c"
//! text_normal = "#e7e5e4"
//! text_dim = "#a8a29e"
//! border = "#44403c"
//! search_bar_border = "#fb923c"
//! match_highlight_fg = "#1c1917"
//! match_highlight_bg = "#fde68a"
//! empty_state_fg = "#fdba74"
//! accent = "#fb923c"
//! rating_fg = "#facc15"
//! ```

use crate::domain::error::{NomorraError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "campfire";

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 3] = ["campfire", "catppuccin-mocha", "catppuccin-latte"];

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Hex colors for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text.
    pub header_fg: String,
    /// Optional header background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground.
    pub selection_fg: String,
    /// Selected row background.
    pub selection_bg: String,

    /// Body text.
    pub text_normal: String,
    /// Secondary text (footer, locations, hints).
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    /// Search box frame.
    pub search_bar_border: String,
    /// Query match highlight foreground.
    pub match_highlight_fg: String,
    /// Query match highlight background.
    pub match_highlight_bg: String,

    /// "No Stories Found" message.
    pub empty_state_fg: String,

    /// Featured marker, section titles and feature tags.
    pub accent: String,

    /// Star ratings.
    pub rating_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for names not in [`BUILTIN_THEMES`].
    ///
    /// ```
    /// use nomorra::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "campfire" => include_str!("../../themes/campfire.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        match Self::from_toml(toml_str) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::error!(theme = name, error = %e, "built-in theme failed to parse");
                None
            }
        }
    }

    /// Parses a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`NomorraError::Theme`] if the TOML is malformed or a required
    /// color is missing.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| NomorraError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NomorraError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| NomorraError::Theme(format!("Failed to read theme file {}: {e}", path.display())))?;

        Self::from_toml(&contents)
    }

    /// Parses `#rrggbb` (or `rrggbb`) into RGB. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The `campfire` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `campfire.toml` fails to parse, which the unit
    /// tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in campfire theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_parses() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn default_is_campfire() {
        assert_eq!(Theme::default().name, "campfire");
    }

    #[test]
    fn header_bg_is_optional() {
        assert!(Theme::from_name("campfire").unwrap().colors.header_bg.is_none());
        assert!(Theme::from_name("catppuccin-latte").unwrap().colors.header_bg.is_some());
    }

    #[test]
    fn loads_custom_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = include_str!("../../themes/campfire.toml").replace("name = \"campfire\"", "name = \"dusk\"");
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "dusk");
    }

    #[test]
    fn missing_color_is_a_theme_error() {
        let err = Theme::from_toml("name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap_err();
        assert!(matches!(err, NomorraError::Theme(_)));
    }

    #[test]
    fn missing_file_is_a_theme_error() {
        let err = Theme::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, NomorraError::Theme(_)));
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg("#fb923c"), "\u{1b}[38;2;251;146;60m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#zz"), "\u{1b}[38;2;255;255;255m");
    }
}
