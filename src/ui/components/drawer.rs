//! Navigation drawer overlay.

use crate::ui::helpers::{pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DrawerInfo;

/// Inner width of the drawer box.
const DRAWER_WIDTH: usize = 22;

/// Draws the drawer box over the left edge of the body.
///
/// ```text
/// ┌──────────────────────┐
/// │ NOMORRA              │
/// ├──────────────────────┤
/// │ ▸ Stories          ● │
/// │   About              │
/// │   Contact            │
/// └──────────────────────┘
/// ```
///
/// `▸` marks the drawer cursor, `●` the section on screen.
///
/// # Parameters
///
/// * `row` - Row of the top border (1-indexed)
/// * `drawer` - Title and section entries
/// * `theme` - Active color theme
pub fn render_drawer(row: usize, drawer: &DrawerInfo, theme: &Theme) {
    let border = |text: &str| {
        print!("{}", Theme::fg(&theme.colors.border));
        print!("{text}");
    };

    position_cursor(row, 1);
    border(&format!("┌{}┐", "─".repeat(DRAWER_WIDTH)));
    print!("{}", Theme::reset());

    let title = truncate(&drawer.title, DRAWER_WIDTH - 2);
    position_cursor(row + 1, 1);
    border("│ ");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    pad(DRAWER_WIDTH - 1 - title.chars().count());
    border("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    border(&format!("├{}┤", "─".repeat(DRAWER_WIDTH)));
    print!("{}", Theme::reset());

    for (offset, item) in drawer.items.iter().enumerate() {
        position_cursor(row + 3 + offset, 1);
        border("│");

        if item.is_highlighted {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        let marker = if item.is_highlighted { "▸" } else { " " };
        let current = if item.is_current { "●" } else { " " };
        let label = truncate(&item.label, DRAWER_WIDTH - 6);
        print!(" {marker} {label}");
        pad(DRAWER_WIDTH - 5 - label.chars().count());
        print!("{current} ");
        print!("{}", Theme::reset());
        border("│");
        print!("{}", Theme::reset());
    }

    position_cursor(row + 3 + drawer.items.len(), 1);
    border(&format!("└{}┘", "─".repeat(DRAWER_WIDTH)));
    print!("{}", Theme::reset());
}
