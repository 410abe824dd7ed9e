//! Story list renderer.
//!
//! Each destination is drawn as a three-line card: a summary row with the
//! highlighted name, location, rating and difficulty, the story teaser, and a
//! row previewing its features. The selected card gets the selection background
//! on all three lines.

use crate::ui::helpers::{self, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StoryCard, StoryList};

/// Width of the featured marker plus the card number ("★  1. ").
const GUTTER_WIDTH: usize = 6;

/// Width reserved for the name column, including the gap after it.
const NAME_COLUMN: usize = 36;

const LOCATION_COLUMN: usize = 18;

const FEATURE_SEPARATOR: &str = " · ";

/// Renders the column headings at the specified row.
///
/// Headings use the header color in bold and line up with the columns of
/// [`render_story_cards`]. The line is truncated on narrow panes.
///
/// # Parameters
///
/// * `row` - Row position to render the headings (1-indexed)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Example
///
/// ```text
///       STORY                               LOCATION            RATING     DIFFICULTY
/// ```
pub fn render_story_headings(row: usize, theme: &Theme, cols: usize) -> usize {
    let headings = format!(
        "{}{:<NAME_COLUMN$}{:<LOCATION_COLUMN$}  {:<11}{}",
        " ".repeat(GUTTER_WIDTH),
        "STORY",
        "LOCATION",
        "RATING",
        "DIFFICULTY"
    );

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", truncate(&headings, cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders story cards from `row` down.
///
/// Cards are drawn whole: rendering stops before a card would pass
/// `last_row`, so a short pane never shows half a card.
///
/// # Parameters
///
/// * `row` - Row of the first card (1-indexed)
/// * `last_row` - Last row the body may use
/// * `list` - Visible window of cards
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The row after the last rendered card
pub fn render_story_cards(row: usize, last_row: usize, list: &StoryList, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in &list.cards {
        if current_row + 2 > last_row {
            break;
        }
        current_row = render_story_card(current_row, card, theme, cols);
    }
    current_row
}

fn set_row_colors(card: &StoryCard, theme: &Theme, fg: &str) {
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(fg));
    }
}

/// Renders one card and returns the row after it.
///
/// # Layout
///
/// ```text
/// ★  1. Yellowstone National Park           Wyoming, USA        ★★★★½ 4.5  Moderate
///       America's first national park offers incredible geothermal...
///       Geysers · Wildlife · Hot Springs
/// ```
///
/// # Styling Precedence
///
/// 1. Selection background on all three lines (if `is_selected`)
/// 2. Query match highlights in the name (unless selected)
/// 3. Accent, rating and dim colors for the remaining columns
fn render_story_card(row: usize, card: &StoryCard, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    set_row_colors(card, theme, &theme.colors.text_normal);

    if card.is_featured {
        if !card.is_selected {
            print!("{}", Theme::fg(&theme.colors.accent));
        }
        print!("★ ");
        set_row_colors(card, theme, &theme.colors.text_normal);
    } else {
        pad(2);
    }
    print!("{:>2}. ", card.number);

    print!("{}", Theme::bold());
    helpers::render_highlighted_text(&card.name, &card.highlight_ranges, theme, card.is_selected);
    print!("{}", Theme::reset());
    set_row_colors(card, theme, &theme.colors.text_normal);
    pad(NAME_COLUMN.saturating_sub(card.name.chars().count()));

    let summary_width = cols.saturating_sub(GUTTER_WIDTH + NAME_COLUMN);
    let location = truncate(&card.location, LOCATION_COLUMN.saturating_sub(1));
    let location = format!("{location:<LOCATION_COLUMN$}  ");
    let location_len = location.chars().count().min(summary_width);
    print!("{}", truncate(&location, summary_width));

    let rating_width = summary_width.saturating_sub(location_len);
    let rating = truncate(&format!("{}  ", card.rating), rating_width);
    let rating_len = rating.chars().count();
    set_row_colors(card, theme, &theme.colors.rating_fg);
    print!("{rating}");
    set_row_colors(card, theme, &theme.colors.text_dim);

    let difficulty_width = rating_width.saturating_sub(rating_len);
    let difficulty = truncate(&card.difficulty, difficulty_width);
    print!("{difficulty}");

    let used = GUTTER_WIDTH + NAME_COLUMN + location_len + rating_len + difficulty.chars().count();
    pad(cols.saturating_sub(used));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    set_row_colors(card, theme, &theme.colors.text_normal);
    if !card.is_selected {
        print!("{}", Theme::italic());
    }
    pad(GUTTER_WIDTH);
    let description = truncate(&card.description, cols.saturating_sub(GUTTER_WIDTH));
    print!("{description}");
    pad(cols.saturating_sub(GUTTER_WIDTH + description.chars().count()));
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    set_row_colors(card, theme, &theme.colors.text_dim);
    pad(GUTTER_WIDTH);
    let features = truncate(&card.features.join(FEATURE_SEPARATOR), cols.saturating_sub(GUTTER_WIDTH));
    print!("{features}");
    pad(cols.saturating_sub(GUTTER_WIDTH + features.chars().count()));
    print!("{}", Theme::reset());

    row + 3
}
