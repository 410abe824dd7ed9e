//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain/search/ui layers.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! Key input → Event → handle_event → AppState mutations → (render?, Actions) → Side effects
//!                                          │
//!                                          └─→ compute_viewmodel → ui::render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`detail`]: Selection/detail state machine
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input modes, sections and the navigation drawer
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod detail;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use detail::DetailState;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, NavDrawer, SearchFocus, Section};
pub use state::AppState;
