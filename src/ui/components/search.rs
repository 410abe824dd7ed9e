//! Search bar component renderer.
//!
//! Renders the search input box with a bordered frame and the query text.

use crate::ui::helpers::{pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Marker drawn after the query while keystrokes go to the search box.
const TYPING_CURSOR: &str = "▏";

/// Renders the search input box at the specified row.
///
/// Displays a 3-line bordered box containing the search query. The box is
/// horizontally centered with margins on both sides. While typing, the border
/// takes the accent color and a cursor follows the query; while navigating
/// results the border falls back to `search_bar_border`.
///
/// # Parameters
///
/// * `row` - Starting row position for the search box (1-indexed)
/// * `search` - Query text and whether the input has focus
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌───────────────────┐ [margin]
/// [margin] │ Search: yose▏     │ [margin]
/// [margin] └───────────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_typing {
        &theme.colors.accent
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.is_typing { TYPING_CURSOR } else { "" };
    let search_text = truncate(&format!(" Search: {}{cursor}", search.query), inner_width);
    let padding = inner_width.saturating_sub(search_text.chars().count());

    position_cursor(row + 1, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    pad(padding);
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
