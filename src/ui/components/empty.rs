//! Empty state component renderer.
//!
//! Shown when a query matches no destination or the catalog has nothing to
//! list.

use crate::ui::helpers::{pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message starting at `row`.
///
/// # Parameters
///
/// * `row` - Row of the message line (1-indexed)
/// * `empty` - Empty state information (message and subtitle)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Layout
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [blank]
/// [left padding] subtitle [right padding]
/// ```
///
/// Both lines are horizontally centered. The message uses `empty_state_fg`,
/// the subtitle `text_dim` with dim styling.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = truncate(&empty.message, cols);
    let msg_len = message.chars().count();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    pad(msg_padding);
    print!("{message}");
    pad(cols.saturating_sub(msg_padding + msg_len));
    print!("{}", Theme::reset());

    let subtitle = truncate(&empty.subtitle, cols);
    let sub_len = subtitle.chars().count();
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(row + 2, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    pad(sub_padding);
    print!("{subtitle}");
    pad(cols.saturating_sub(sub_padding + sub_len));
    print!("{}", Theme::reset());
}
