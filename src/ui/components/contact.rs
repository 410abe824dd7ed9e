//! Contact section renderer.

use crate::ui::helpers::{pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ContactView;

const LABEL_WIDTH: usize = 14;

/// Renders the intro line and one row per social link.
///
/// The selected link is drawn with the selection colors across the full
/// width; Enter opens it.
///
/// # Parameters
///
/// * `row` - First row of the section body (1-indexed)
/// * `last_row` - Last row the body may use
/// * `view` - Intro text and links
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Layout
///
/// ```text
///   Follow along for trail notes, photos and the next adventure.
///
///  ▸ Facebook      https://facebook.com/campexplorer
///    Twitter       https://twitter.com/campexplorer
/// ```
pub fn render_contact(row: usize, last_row: usize, view: &ContactView, theme: &Theme, cols: usize) {
    let intro_row = row + 1;
    if intro_row <= last_row {
        position_cursor(intro_row, 1);
        pad(2);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", truncate(&view.intro, cols.saturating_sub(2)));
        print!("{}", Theme::reset());
    }

    for (offset, link) in view.links.iter().enumerate() {
        let link_row = intro_row + 2 + offset;
        if link_row > last_row {
            break;
        }

        position_cursor(link_row, 1);
        if link.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            print!(" ▸ ");
        } else {
            print!("{}", Theme::fg(&theme.colors.accent));
            pad(3);
        }

        print!("{}", Theme::bold());
        print!("{:<LABEL_WIDTH$}", link.label);
        print!("{}", Theme::reset());
        if link.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }

        let used = 3 + LABEL_WIDTH.max(link.label.chars().count());
        let url = truncate(&link.url, cols.saturating_sub(used));
        print!("{url}");
        pad(cols.saturating_sub(used + url.chars().count()));
        print!("{}", Theme::reset());
    }
}
