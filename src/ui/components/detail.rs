//! Destination detail renderer.

use crate::ui::helpers::{pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailLine, DetailView};

const INDENT: usize = 2;

/// Renders the meta line and the visible slice of detail content.
///
/// ```text
///   Wyoming, USA  ·  ★★★★½ 4.5  ·  Moderate             [3-20 of 31]
///
///   Heading
///   Wrapped text...
/// ```
///
/// The position indicator only appears when the content does not fit.
///
/// # Parameters
///
/// * `row` - Row of the meta line (1-indexed)
/// * `last_row` - Last row the body may use
/// * `view` - Wrapped content, scroll offset and viewport height
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Line Styles
///
/// - Lead: italic teaser
/// - Heading: bold accent
/// - Bullet: accent `•` followed by normal text
/// - Tags: `[tag]` chips in the accent color, cut at the pane edge
/// - Stat: dim label, bold value
pub fn render_detail(row: usize, last_row: usize, view: &DetailView, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(INDENT);

    position_cursor(row, 1);
    pad(INDENT);
    print!("{}", Theme::fg(&theme.colors.accent));
    print!("{}", view.location);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  ·  ");
    print!("{}", Theme::fg(&theme.colors.rating_fg));
    print!("{}", view.rating);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  ·  {}", view.difficulty);

    if view.lines.len() > view.viewport {
        let last_visible = (view.scroll + view.viewport).min(view.lines.len());
        let indicator = format!("[{}-{} of {}]", view.scroll + 1, last_visible, view.lines.len());
        let meta_len = INDENT
            + view.location.chars().count()
            + view.rating.chars().count()
            + view.difficulty.chars().count()
            + 10;
        let gap = cols.saturating_sub(meta_len + indicator.chars().count() + 1);
        if gap > 0 {
            pad(gap);
            print!("{indicator}");
        }
    }
    print!("{}", Theme::reset());

    let first_content_row = row + 2;
    let visible = view.lines.iter().skip(view.scroll).take(view.viewport);
    for (offset, line) in visible.enumerate() {
        let current_row = first_content_row + offset;
        if current_row > last_row {
            break;
        }
        position_cursor(current_row, 1);
        pad(INDENT);
        render_detail_line(line, theme, width);
        print!("{}", Theme::reset());
    }
}

fn render_detail_line(line: &DetailLine, theme: &Theme, width: usize) {
    match line {
        DetailLine::Lead(text) => {
            print!("{}", Theme::italic());
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{text}");
        }
        DetailLine::Heading(text) => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.accent));
            print!("{}", truncate(text, width));
        }
        DetailLine::Text(text) => {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{text}");
        }
        DetailLine::Bullet(text) => {
            print!("{}", Theme::fg(&theme.colors.accent));
            print!("• ");
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{text}");
        }
        DetailLine::BulletCont(text) => {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("  {text}");
        }
        DetailLine::Tags(tags) => {
            let mut used = 0;
            for tag in tags {
                let chip = format!("[{tag}] ");
                let chip_len = chip.chars().count();
                if used + chip_len > width {
                    break;
                }
                print!("{}", Theme::fg(&theme.colors.accent));
                print!("{chip}");
                used += chip_len;
            }
        }
        DetailLine::Stat { label, value } => {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{label}: ");
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", truncate(value, width.saturating_sub(label.chars().count() + 2)));
        }
        DetailLine::Blank => {}
    }
}
