//! Infrastructure layer for filesystem and environment interactions.
//!
//! The plugin runs inside the Zellij sandbox where the host filesystem is
//! mounted under `/host`; everything that turns configured paths into sandbox
//! paths lives here.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_config_path};
