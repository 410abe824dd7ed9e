//! About section renderer.

use crate::ui::helpers::{pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AboutView;

const INDENT: usize = 2;

/// Renders the About section.
///
/// # Layout
///
/// ```text
/// [blank]
///   About NOMORRA
///   My blog through America's best national parks
/// [blank]
///   Paragraph lines...
/// [blank]
///   Parks Visited       7
///   Latest Expedition   Montana, USA
/// ```
///
/// Everything below `last_row` is clipped.
pub fn render_about(row: usize, last_row: usize, view: &AboutView, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(INDENT);
    let mut current_row = row + 1;

    let print_line = |row: usize| -> bool {
        if row > last_row {
            return false;
        }
        position_cursor(row, 1);
        pad(INDENT);
        true
    };

    if print_line(current_row) {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.accent));
        print!("{}", truncate(&view.title, width));
        print!("{}", Theme::reset());
    }
    current_row += 1;

    if print_line(current_row) {
        print!("{}", Theme::italic());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", truncate(&view.tagline, width));
        print!("{}", Theme::reset());
    }
    current_row += 2;

    for line in &view.lines {
        if !print_line(current_row) {
            return;
        }
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row += 1;

    for (label, value) in &view.stats {
        if !print_line(current_row) {
            return;
        }
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{label:<20}");
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.rating_fg));
        print!("{}", truncate(value, width.saturating_sub(20)));
        print!("{}", Theme::reset());
        current_row += 1;
    }
}
