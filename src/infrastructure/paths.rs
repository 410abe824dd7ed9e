//! Path utilities for the Zellij sandbox.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`, so
//! user-supplied paths such as `~/parks.json` must be rewritten before use.

use std::path::{Path, PathBuf};

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Returns the data directory used for trace files.
///
/// Resolves to `/host/.local/share/zellij/nomorra`, which is
/// `~/.local/share/zellij/nomorra` when Zellij was started from the home
/// directory.
///
/// ```
/// use nomorra::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/nomorra"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    Path::new(HOST_ROOT).join(".local/share/zellij").join("nomorra")
}

/// Expands a leading `~` to the sandbox host prefix.
///
/// ```
/// use nomorra::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/parks.json"), "/host/parks.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/parks.json"), "/etc/parks.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Expands `~` and converts the result into a [`PathBuf`].
#[must_use]
pub fn resolve_config_path(path: &str) -> PathBuf {
    PathBuf::from(expand_tilde(path.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_start() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }

    #[test]
    fn config_paths_are_trimmed_and_expanded() {
        assert_eq!(
            resolve_config_path("  ~/themes/dusk.toml "),
            PathBuf::from("/host/themes/dusk.toml")
        );
    }

    #[test]
    fn data_dir_lives_under_host() {
        assert!(get_data_dir().starts_with(HOST_ROOT));
        assert!(get_data_dir().ends_with("nomorra"));
    }
}
