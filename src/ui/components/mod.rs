//! Composable UI component renderers.
//!
//! Each component prints one part of the screen at an explicit row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`stories`]: Story cards with column headings
//! - [`empty`]: "No Stories Found" message
//! - [`detail`]: Scrollable destination detail
//! - [`about`]: About section
//! - [`contact`]: Social links
//! - [`drawer`]: Navigation menu overlay
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Body: stories | empty | detail | about | contact]
//! [Border]
//! [Footer]
//! ```
//!
//! The drawer, when open, is drawn last so it overlays the body.

mod about;
mod contact;
mod detail;
mod drawer;
mod empty;
mod footer;
mod header;
mod search;
mod stories;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Prints a horizontal rule across the full width.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame from a view model.
///
/// Header and border go at the top, footer and border at the bottom; the
/// search box (search mode only) and the body fill the space between. The
/// drawer overlay is drawn last.
///
/// # Parameters
///
/// * `vm` - Pre-computed view model
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    let bottom_border_row = footer_row.saturating_sub(1);
    let last_body_row = bottom_border_row.saturating_sub(1);

    let mut row = 2;
    row = header::render_header(row, &vm.header, theme, cols);
    row = render_border(row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        row = search::render_search_bar(row, search, theme, cols);
    }

    match &vm.body {
        Body::Stories(list) => {
            row = stories::render_story_headings(row, theme, cols);
            stories::render_story_cards(row, last_body_row, list, theme, cols);
        }
        Body::Empty(empty) => empty::render_empty_state(row + 2, empty, theme, cols),
        Body::Detail(view) => detail::render_detail(row, last_body_row, view, theme, cols),
        Body::About(view) => about::render_about(row, last_body_row, view, theme, cols),
        Body::Contact(view) => contact::render_contact(row, last_body_row, view, theme, cols),
    }

    render_border(bottom_border_row, &theme.colors.border, cols);
    footer::render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(menu) = &vm.drawer {
        drawer::render_drawer(4, menu, theme);
    }
}
