//! Shared rendering utilities.
//!
//! Cursor placement and match highlighting print straight to stdout; the text
//! helpers (`wrap_text`, `truncate`, `star_glyphs`) are pure and used while
//! building the view model. All widths are counted in chars, not bytes.

use crate::domain::StarRating;
use crate::ui::theme::Theme;

const ELLIPSIS: &str = "...";

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `count` spaces.
pub fn pad(count: usize) {
    print!("{}", " ".repeat(count));
}

/// Prints `text` with the char ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` char indices, end exclusive, sorted and
/// non-overlapping. Highlighting is skipped on the selected row so it does not
/// fight the selection background.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut cursor = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < cursor || start >= end {
            continue;
        }

        let plain: String = chars[cursor..start].iter().collect();
        print!("{plain}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let matched: String = chars[start..end].iter().collect();
        print!("{matched}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        cursor = end;
    }

    let rest: String = chars[cursor..].iter().collect();
    print!("{rest}");
}

/// Shortens `text` to at most `width` chars, ending in `...` when cut.
///
/// ```
/// use nomorra::ui::helpers::truncate;
///
/// assert_eq!(truncate("Yellowstone National Park", 14), "Yellowstone...");
/// assert_eq!(truncate("Zion", 14), "Zion");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= ELLIPSIS.len() {
        return text.chars().take(width).collect();
    }

    let kept: String = text.chars().take(width - ELLIPSIS.len()).collect();
    format!("{}{ELLIPSIS}", kept.trim_end())
}

/// Greedy word wrap to lines of at most `width` chars.
///
/// Words longer than `width` are split. Blank input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let word_len = chars.len();
        if word_len == 0 {
            continue;
        }

        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(chars);
        line_len += word_len;
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Renders a star breakdown as `★` (full), `½` (half) and `☆` (empty).
#[must_use]
pub fn star_glyphs(stars: StarRating) -> String {
    let mut out = "★".repeat(usize::from(stars.full));
    if stars.half {
        out.push('½');
    }
    out.push_str(&"☆".repeat(usize::from(stars.empty)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let text = "The best time to visit is late spring through early fall.";
        let lines = wrap_text(text, 20);

        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), text);
        assert_eq!(lines[0], "The best time to");
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), ["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn wrap_collapses_whitespace_and_handles_blank() {
        assert_eq!(wrap_text("  Zion   Utah  ", 40), ["Zion Utah"]);
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Élan Vital", 7), "Élan...");
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn stars_fill_five_slots() {
        let glyphs = star_glyphs(StarRating { full: 4, half: true, empty: 0 });
        assert_eq!(glyphs, "★★★★½");

        let glyphs = star_glyphs(StarRating { full: 3, half: false, empty: 2 });
        assert_eq!(glyphs.chars().count(), 5);
    }
}
