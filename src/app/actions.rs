//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` next to its render flag. Nearly
//! every interaction in Nomorra is a pure state change, so actions only cover
//! the two things the library cannot do on its own: hiding the plugin pane and
//! opening an external link.

/// Commands to be executed by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Opens a URL with the host's default handler.
    OpenLink {
        /// Link target.
        url: String,
    },
}
