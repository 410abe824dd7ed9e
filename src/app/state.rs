//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for everything on screen: the
//! catalog, the current query and its results, the list cursor, the active
//! section, the drawer and the detail view.
//!
//! # State Components
//!
//! - **Catalog**: validated destinations, read-only after startup
//! - **Filtered**: catalog positions matching the query, in catalog order
//! - **Selection**: cursor within `filtered`, wraps at both ends
//! - **Detail**: [`DetailState`], which destination (if any) is open
//! - **Section / Drawer**: which part of the blog is shown and the menu overlay
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a [`UIViewModel`]: it
//! windows the story list around the cursor, resolves match highlights, wraps
//! detail and about text to the terminal width and picks footer hints for the
//! current mode.
//!
//! # Example
//!
//! ```rust
//! use nomorra::app::AppState;
//! use nomorra::domain::Catalog;
//! use nomorra::ui::{Theme, viewmodel::Body};
//!
//! let mut state = AppState::new(Catalog::embedded().unwrap(), Theme::default());
//! state.search_query = "utah".to_string();
//! state.apply_search_filter();
//!
//! let vm = state.compute_viewmodel(24, 80);
//! assert_eq!(vm.header.title, " Search Results (1 of 7) ");
//! assert!(matches!(vm.body, Body::Stories(_)));
//! ```

use super::detail::DetailState;
use super::modes::{InputMode, NavDrawer, SearchFocus, Section};
use crate::domain::profile::{
    SocialLink, ABOUT_PARAGRAPHS, BLOG_NAME, LATEST_EXPEDITION, NEXT_ADVENTURE, SOCIAL_LINKS, TAGLINE,
};
use crate::domain::{Catalog, Destination, DestinationId};
use crate::search::{match_ranges, FilterMemo, SearchOutcome};
use crate::ui::helpers::{star_glyphs, truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AboutView, Body, ContactLink, ContactView, DetailLine, DetailView, DrawerInfo, DrawerItem, EmptyState,
    FooterInfo, HeaderInfo, SearchBarInfo, StoryCard, StoryList, UIViewModel,
};

/// Rows used by one story card (title, description and feature lines).
const CARD_HEIGHT: usize = 3;

/// Features shown on the featured card.
pub const FEATURED_PREVIEW: usize = 3;

/// Features shown on every other card.
pub const CARD_PREVIEW: usize = 4;

/// Longest story name shown on a card before truncation.
const NAME_WIDTH: usize = 34;

/// Blank line, header, border, column headings, border, footer and the
/// bottom spare row.
const NORMAL_CHROME_ROWS: usize = 7;

/// Normal chrome plus the three-row search box.
const SEARCH_CHROME_ROWS: usize = 10;

/// Blank line, header, border, meta line, spacer, border, footer, spare row.
const DETAIL_CHROME_ROWS: usize = 8;

/// Left plus right margin around wrapped text.
const CONTENT_MARGIN: usize = 4;

const MIN_CONTENT_WIDTH: usize = 10;

/// Terminal size assumed until the first render reports the real one.
const DEFAULT_VIEWPORT: (usize, usize) = (24, 80);

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Validated destinations in display order.
    pub catalog: Catalog,

    /// Catalog positions matching `search_query`, in catalog order.
    ///
    /// Recomputed by `apply_search_filter()`.
    pub filtered: Vec<usize>,

    /// Classification of the last filter run.
    pub outcome: SearchOutcome,

    memo: FilterMemo,

    /// Cursor within `filtered`.
    ///
    /// Clamped by `apply_search_filter()`, wraps in `move_selection_up/down()`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query. Only the empty string means "no query".
    pub search_query: String,

    /// Part of the blog on screen.
    pub section: Section,

    /// Navigation drawer overlay.
    pub drawer: NavDrawer,

    /// Open/closed detail view.
    pub detail: DetailState,

    /// First visible line of the detail view; reset on every select.
    pub detail_scroll: usize,

    /// Highlighted social link in the Contact section.
    pub link_index: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    viewport: (usize, usize),
}

impl AppState {
    /// Creates the state with every story visible and nothing selected.
    ///
    /// Starts in [`InputMode::Normal`] on the Stories section with the detail
    /// view and drawer closed. The filter runs once so `filtered` already holds
    /// every catalog position.
    ///
    /// # Parameters
    ///
    /// * `catalog` - Validated destinations in display order
    /// * `theme` - Color theme used by the renderer
    ///
    /// # Example
    ///
    /// ```rust
    /// use nomorra::app::AppState;
    /// use nomorra::domain::Catalog;
    /// use nomorra::ui::Theme;
    ///
    /// let state = AppState::new(Catalog::embedded().unwrap(), Theme::default());
    /// assert_eq!(state.filtered.len(), state.catalog.len());
    /// assert!(!state.detail.is_open());
    /// ```
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let mut state = Self {
            catalog,
            filtered: vec![],
            outcome: SearchOutcome::Unfiltered,
            memo: FilterMemo::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            section: Section::Stories,
            drawer: NavDrawer::default(),
            detail: DetailState::default(),
            detail_scroll: 0,
            link_index: 0,
            theme,
            viewport: DEFAULT_VIEWPORT,
        };
        state.apply_search_filter();
        state
    }

    /// Records the terminal size so scrolling can be bounded between renders.
    ///
    /// Called by the plugin shim before every render. Shrinking the pane
    /// pulls `detail_scroll` back inside the new bounds.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in rows
    /// * `cols` - Terminal width in columns
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);
        self.detail_scroll = self.detail_scroll.min(self.max_detail_scroll());
    }

    /// Moves the cursor down, wrapping to the top. No-op on an empty list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nomorra::app::AppState;
    /// use nomorra::domain::Catalog;
    /// use nomorra::ui::Theme;
    ///
    /// let mut state = AppState::new(Catalog::embedded().unwrap(), Theme::default());
    /// state.selected_index = state.filtered.len() - 1;
    /// state.move_selection_down();
    /// assert_eq!(state.selected_index, 0);
    /// ```
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves the cursor up, wrapping to the bottom. No-op on an empty list.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// The destination under the cursor, if any.
    ///
    /// # Returns
    ///
    /// `None` when the current result list is empty.
    #[must_use]
    pub fn selected_destination(&self) -> Option<&Destination> {
        self.filtered
            .get(self.selected_index)
            .and_then(|&idx| self.catalog.as_slice().get(idx))
    }

    /// Re-runs the filter for `search_query` and clamps the cursor.
    ///
    /// Updates `filtered` and `outcome`. Results come from the memo when the
    /// query has not changed since the last run.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nomorra::app::AppState;
    /// use nomorra::domain::Catalog;
    /// use nomorra::search::SearchOutcome;
    /// use nomorra::ui::Theme;
    ///
    /// let mut state = AppState::new(Catalog::embedded().unwrap(), Theme::default());
    /// state.search_query = "xyz123".to_string();
    /// state.apply_search_filter();
    /// assert!(state.filtered.is_empty());
    /// assert_eq!(state.outcome, SearchOutcome::NoMatches);
    /// ```
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total = self.catalog.len(),
            query_len = self.search_query.len()
        )
        .entered();

        self.filtered = self
            .memo
            .indices(self.catalog.as_slice(), &self.search_query)
            .to_vec();
        self.outcome = SearchOutcome::classify(&self.search_query, self.filtered.len());

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered.len(),
            outcome = ?self.outcome,
            "search filter applied"
        );
    }

    /// Leaves search mode and shows every story again.
    ///
    /// Clears the query and recomputes the filter, so the cursor lands back
    /// inside the full list. See [`crate::app::Event::ClearSearch`] for
    /// emptying the query without leaving search.
    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_query.clear();
        self.apply_search_filter();
    }

    /// Opens the detail view on the story under the cursor.
    ///
    /// # Returns
    ///
    /// `true` if a story was opened, `false` when nothing is under the cursor.
    pub fn open_selected(&mut self) -> bool {
        let Some(id) = self.selected_destination().map(|d| d.id.clone()) else {
            return false;
        };
        self.select_destination(&id)
    }

    /// Opens the detail view on `id`; unknown ids leave the state untouched.
    ///
    /// Resets `detail_scroll` so every story opens at its first line.
    ///
    /// # Parameters
    ///
    /// * `id` - Catalog id of the destination to show
    ///
    /// # Returns
    ///
    /// Whether the selection was applied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nomorra::app::AppState;
    /// use nomorra::domain::{Catalog, DestinationId};
    /// use nomorra::ui::Theme;
    ///
    /// let mut state = AppState::new(Catalog::embedded().unwrap(), Theme::default());
    /// assert!(state.select_destination(&DestinationId::from("zion")));
    /// assert!(!state.select_destination(&DestinationId::from("atlantis")));
    /// assert_eq!(state.detail.selected_id().map(DestinationId::as_str), Some("zion"));
    /// ```
    pub fn select_destination(&mut self, id: &DestinationId) -> bool {
        let applied = self.detail.select(&self.catalog, id);
        if applied {
            self.detail_scroll = 0;
        }
        applied
    }

    /// Closes the detail view and resets its scroll offset.
    ///
    /// # Returns
    ///
    /// `true` if the detail view was open, so the caller knows to re-render.
    pub fn dismiss_detail(&mut self) -> bool {
        let was_open = self.detail.is_open();
        self.detail.dismiss();
        self.detail_scroll = 0;
        was_open
    }

    /// Scrolls the detail view by `delta` lines, clamped to its content.
    ///
    /// The upper bound comes from the size last passed to
    /// [`AppState::set_viewport`]. Does nothing while the detail view is closed.
    ///
    /// # Parameters
    ///
    /// * `delta` - Lines to move; negative scrolls back
    pub fn scroll_detail(&mut self, delta: isize) {
        let max = self.max_detail_scroll();
        self.detail_scroll = self.detail_scroll.saturating_add_signed(delta).min(max);
    }

    fn max_detail_scroll(&self) -> usize {
        let (rows, cols) = self.viewport;
        self.detail.visible(&self.catalog).map_or(0, |destination| {
            let total = detail_lines(destination, content_width(cols)).len();
            total.saturating_sub(Self::detail_viewport(rows))
        })
    }

    const fn detail_viewport(rows: usize) -> usize {
        rows.saturating_sub(DETAIL_CHROME_ROWS)
    }

    /// Switches to `section`, closing the drawer, the detail view and search.
    ///
    /// Also resets the Contact link cursor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nomorra::app::{AppState, Section};
    /// use nomorra::domain::Catalog;
    /// use nomorra::ui::Theme;
    ///
    /// let mut state = AppState::new(Catalog::embedded().unwrap(), Theme::default());
    /// state.open_selected();
    /// state.navigate_to(Section::About);
    /// assert_eq!(state.section, Section::About);
    /// assert!(!state.detail.is_open());
    /// ```
    pub fn navigate_to(&mut self, section: Section) {
        tracing::debug!(from = ?self.section, to = ?section, "navigating");

        self.drawer.close();
        self.dismiss_detail();
        if matches!(self.input_mode, InputMode::Search(_)) {
            self.exit_search();
        }
        self.section = section;
        self.link_index = 0;
    }

    /// Moves the Contact cursor to the next link, wrapping to the first.
    pub fn move_link_down(&mut self) {
        self.link_index = (self.link_index + 1) % SOCIAL_LINKS.len();
    }

    pub fn move_link_up(&mut self) {
        self.link_index = self.link_index.checked_sub(1).unwrap_or(SOCIAL_LINKS.len() - 1);
    }

    /// The social link under the Contact cursor.
    #[must_use]
    pub fn selected_link(&self) -> SocialLink {
        SOCIAL_LINKS[self.link_index % SOCIAL_LINKS.len()]
    }

    /// Computes a renderable view model for a `rows` x `cols` terminal.
    ///
    /// The body is chosen in this order: an open detail view, then the current
    /// section. The Stories section windows its cards around the cursor so
    /// the selected card is always on screen, and falls back to an empty state
    /// when there is nothing to list.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in rows
    /// * `cols` - Terminal width in columns
    ///
    /// # Returns
    ///
    /// A [`UIViewModel`] holding display-ready strings only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nomorra::app::AppState;
    /// use nomorra::domain::Catalog;
    /// use nomorra::ui::{viewmodel::Body, Theme};
    ///
    /// let state = AppState::new(Catalog::embedded().unwrap(), Theme::default());
    /// let vm = state.compute_viewmodel(40, 100);
    /// assert_eq!(vm.header.title, " Adventures (7 stories) ");
    /// match vm.body {
    ///     Body::Stories(list) => assert!(list.cards[0].is_featured),
    ///     _ => unreachable!(),
    /// }
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let detail = self.detail.visible(&self.catalog);

        let body = match (detail, self.section) {
            (Some(destination), _) => Body::Detail(self.compute_detail(destination, rows, cols)),
            (None, Section::Stories) => self.compute_story_body(rows, cols),
            (None, Section::About) => Body::About(self.compute_about(cols)),
            (None, Section::Contact) => Body::Contact(self.compute_contact()),
        };

        UIViewModel {
            header: self.compute_header(detail),
            footer: self.compute_footer(detail.is_some()),
            search_bar: detail.is_none().then(|| self.compute_search_bar()).flatten(),
            body,
            drawer: self.compute_drawer(),
        }
    }

    fn compute_story_body(&self, rows: usize, cols: usize) -> Body {
        if self.outcome == SearchOutcome::NoMatches {
            return Body::Empty(EmptyState {
                message: "No Stories Found".to_string(),
                subtitle: format!("Nothing matches \"{}\". Press Enter to view all stories", self.search_query),
            });
        }
        if self.filtered.is_empty() {
            return Body::Empty(EmptyState {
                message: "No Stories Yet".to_string(),
                subtitle: "The catalog is empty. Check the catalog_file option".to_string(),
            });
        }

        let available_cards = (self.calculate_available_rows(rows) / CARD_HEIGHT).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_cards / 2);
        let visible_end = (visible_start + available_cards).min(self.filtered.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_cards && self.filtered.len() >= available_cards {
            visible_start = visible_end.saturating_sub(available_cards);
        }

        let cards = self.filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .filter_map(|(offset, &idx)| {
                let position = visible_start + offset;
                self.catalog
                    .as_slice()
                    .get(idx)
                    .map(|destination| self.compute_story_card(destination, position, cols))
            })
            .collect();

        Body::Stories(StoryList {
            cards,
            selected_index: self.selected_index.saturating_sub(visible_start),
        })
    }

    fn compute_story_card(&self, destination: &Destination, position: usize, cols: usize) -> StoryCard {
        let is_featured = position == 0;
        let name_width = NAME_WIDTH.min(cols.saturating_sub(CONTENT_MARGIN).max(MIN_CONTENT_WIDTH));
        let name = truncate(&destination.name, name_width);
        let highlight_ranges = if self.search_query.is_empty() {
            vec![]
        } else {
            match_ranges(&name, &self.search_query)
        };
        let preview = if is_featured { FEATURED_PREVIEW } else { CARD_PREVIEW };

        StoryCard {
            number: position + 1,
            name,
            location: destination.location.clone(),
            description: destination.description.clone(),
            rating: format!("{} {:.1}", star_glyphs(destination.stars()), destination.rating),
            difficulty: destination.difficulty.clone(),
            features: destination.feature_preview(preview).to_vec(),
            is_selected: position == self.selected_index,
            is_featured,
            highlight_ranges,
        }
    }

    fn compute_detail(&self, destination: &Destination, rows: usize, cols: usize) -> DetailView {
        let lines = detail_lines(destination, content_width(cols));
        let viewport = Self::detail_viewport(rows);
        let scroll = self.detail_scroll.min(lines.len().saturating_sub(viewport));

        DetailView {
            title: destination.name.clone(),
            location: destination.location.clone(),
            rating: format!("{} {:.1}", star_glyphs(destination.stars()), destination.rating),
            difficulty: destination.difficulty.clone(),
            lines,
            scroll,
            viewport,
        }
    }

    fn compute_about(&self, cols: usize) -> AboutView {
        let width = content_width(cols);
        let mut lines = Vec::new();
        for (n, paragraph) in ABOUT_PARAGRAPHS.iter().enumerate() {
            if n > 0 {
                lines.push(String::new());
            }
            lines.extend(wrap_text(paragraph, width));
        }

        AboutView {
            title: format!("About {BLOG_NAME}"),
            tagline: TAGLINE.to_string(),
            lines,
            stats: vec![
                ("Parks Visited".to_string(), self.catalog.len().to_string()),
                ("Latest Expedition".to_string(), LATEST_EXPEDITION.to_string()),
                ("Next Adventure".to_string(), NEXT_ADVENTURE.to_string()),
            ],
        }
    }

    fn compute_contact(&self) -> ContactView {
        ContactView {
            intro: "Follow along for trail notes, photos and the next adventure.".to_string(),
            links: SOCIAL_LINKS
                .iter()
                .enumerate()
                .map(|(idx, link)| ContactLink {
                    label: link.icon.label().to_string(),
                    url: link.url.to_string(),
                    is_selected: idx == self.link_index,
                })
                .collect(),
        }
    }

    fn compute_drawer(&self) -> Option<DrawerInfo> {
        if !self.drawer.open {
            return None;
        }

        Some(DrawerInfo {
            title: BLOG_NAME.to_string(),
            items: Section::ALL
                .iter()
                .enumerate()
                .map(|(idx, section)| DrawerItem {
                    label: section.title().to_string(),
                    is_highlighted: idx == self.drawer.cursor,
                    is_current: *section == self.section,
                })
                .collect(),
        })
    }

    fn compute_header(&self, detail: Option<&Destination>) -> HeaderInfo {
        let title = match (detail, self.section) {
            (Some(destination), _) => destination.name.clone(),
            (None, Section::Stories) => match self.outcome {
                SearchOutcome::Unfiltered => format!("Adventures ({} stories)", self.catalog.len()),
                SearchOutcome::Matches(n) => format!("Search Results ({n} of {})", self.catalog.len()),
                SearchOutcome::NoMatches => format!("Search Results (0 of {})", self.catalog.len()),
            },
            (None, Section::About) => format!("About {BLOG_NAME}"),
            (None, Section::Contact) => "Get In Touch".to_string(),
        };

        HeaderInfo {
            title: format!(" {title} "),
        }
    }

    fn compute_footer(&self, detail_open: bool) -> FooterInfo {
        let keybindings = if self.drawer.open {
            "j/k: move  Enter: go  Esc/m: close menu"
        } else if detail_open {
            "j/k: scroll  Esc/q/Enter: close"
        } else {
            match (self.input_mode, self.section) {
                (InputMode::Search(_), _) if self.outcome == SearchOutcome::NoMatches => {
                    "ESC: exit search  Enter: view all stories  Backspace: edit query"
                }
                (InputMode::Search(SearchFocus::Typing), _) => {
                    "ESC: exit search  Enter: open  Ctrl+n/p: navigate  Ctrl+u: clear"
                }
                (InputMode::Search(SearchFocus::Navigating), _) => {
                    "ESC: exit search  /: edit query  j/k: navigate  Enter: open"
                }
                (InputMode::Normal, Section::Stories) => {
                    "j/k: navigate  Enter: open  /: search  m: menu  Tab: next section  q: quit"
                }
                (InputMode::Normal, Section::About) => "m: menu  Tab: next section  q: quit",
                (InputMode::Normal, Section::Contact) => {
                    "j/k: select link  Enter: open link  m: menu  Tab: next section  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_query.clone(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    /// Rows left for story cards after the chrome.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(NORMAL_CHROME_ROWS),
            InputMode::Search(_) => total_rows.saturating_sub(SEARCH_CHROME_ROWS),
        }
    }
}

fn content_width(cols: usize) -> usize {
    cols.saturating_sub(CONTENT_MARGIN).max(MIN_CONTENT_WIDTH)
}

/// Lays out the scrollable part of the detail view.
///
/// The teaser leads, followed by the full description. Sections without
/// content (no highlights, no features) are left out rather than shown empty.
fn detail_lines(destination: &Destination, width: usize) -> Vec<DetailLine> {
    let mut lines: Vec<DetailLine> = wrap_text(&destination.description, width)
        .into_iter()
        .map(DetailLine::Lead)
        .collect();
    if !lines.is_empty() {
        lines.push(DetailLine::Blank);
    }
    lines.extend(wrap_text(&destination.full_description, width).into_iter().map(DetailLine::Text));

    if !destination.highlights.is_empty() {
        lines.push(DetailLine::Blank);
        lines.push(DetailLine::Heading("What Makes This Special".to_string()));
        for highlight in &destination.highlights {
            let mut wrapped = wrap_text(highlight, width.saturating_sub(2).max(1)).into_iter();
            if let Some(first) = wrapped.next() {
                lines.push(DetailLine::Bullet(first));
            }
            lines.extend(wrapped.map(DetailLine::BulletCont));
        }
    }

    lines.push(DetailLine::Blank);
    lines.push(DetailLine::Heading("Planning Your Visit".to_string()));
    lines.extend(wrap_text(&destination.planning_info, width).into_iter().map(DetailLine::Text));

    if !destination.features.is_empty() {
        lines.push(DetailLine::Blank);
        lines.push(DetailLine::Heading("Features".to_string()));
        lines.push(DetailLine::Tags(destination.features.clone()));
    }

    lines.push(DetailLine::Blank);
    lines.push(DetailLine::Stat {
        label: "Rating".to_string(),
        value: format!("{:.1}/5", destination.rating),
    });
    lines.push(DetailLine::Stat {
        label: "Features".to_string(),
        value: destination.features.len().to_string(),
    });
    lines.push(DetailLine::Stat {
        label: "Highlights".to_string(),
        value: destination.highlights.len().to_string(),
    });

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::destination::fixtures::destination;

    fn state() -> AppState {
        AppState::new(Catalog::embedded().unwrap(), Theme::default())
    }

    fn search(state: &mut AppState, query: &str) {
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.search_query = query.to_string();
        state.apply_search_filter();
    }

    fn cards(vm: &UIViewModel) -> &StoryList {
        match &vm.body {
            Body::Stories(list) => list,
            other => panic!("expected story list, got {other:?}"),
        }
    }

    #[test]
    fn starts_with_every_story() {
        let state = state();
        let vm = state.compute_viewmodel(40, 100);

        assert_eq!(vm.header.title, " Adventures (7 stories) ");
        assert_eq!(cards(&vm).cards.len(), 7);
        assert!(vm.search_bar.is_none());
        assert!(vm.drawer.is_none());
    }

    #[test]
    fn first_card_is_featured_with_shorter_preview() {
        let vm = state().compute_viewmodel(40, 100);
        let list = cards(&vm);

        assert!(list.cards[0].is_featured);
        assert_eq!(list.cards[0].features.len(), FEATURED_PREVIEW);
        assert!(!list.cards[1].is_featured);
        assert_eq!(list.cards[1].features.len(), CARD_PREVIEW);
        assert_eq!(list.cards[0].rating, "★★★★½ 4.5");
    }

    #[test]
    fn cards_carry_the_story_teaser() {
        let vm = state().compute_viewmodel(40, 100);
        let list = cards(&vm);

        assert!(list.cards[0]
            .description
            .starts_with("America's first national park offers incredible geothermal features"));
        assert!(list.cards.iter().all(|card| !card.description.is_empty()));
    }

    #[test]
    fn detail_opens_with_the_teaser() {
        let mut state = state();
        assert!(state.open_selected());

        match state.compute_viewmodel(30, 80).body {
            Body::Detail(detail) => {
                match &detail.lines[0] {
                    DetailLine::Lead(text) => assert!(text.starts_with("America's first national park")),
                    other => panic!("expected lead line, got {other:?}"),
                }
                let blank = detail.lines.iter().position(|l| *l == DetailLine::Blank).unwrap();
                assert!(detail.lines[..blank].iter().all(|l| matches!(l, DetailLine::Lead(_))));
                assert!(matches!(detail.lines[blank + 1], DetailLine::Text(_)));
            }
            other => panic!("expected detail, got {other:?}"),
        }
    }

    #[test]
    fn search_updates_header_and_highlights() {
        let mut state = state();
        search(&mut state, "park");

        let vm = state.compute_viewmodel(40, 100);
        assert_eq!(vm.header.title, " Search Results (7 of 7) ");
        assert_eq!(cards(&vm).cards[0].highlight_ranges, [(21, 25)]);
        assert_eq!(vm.search_bar.map(|s| s.query), Some("park".to_string()));
    }

    #[test]
    fn featured_follows_the_result_list() {
        let mut state = state();
        search(&mut state, "canyon");

        let vm = state.compute_viewmodel(40, 100);
        let list = cards(&vm);
        assert_eq!(list.cards[0].name, "Grand Canyon National Park");
        assert!(list.cards[0].is_featured);
        assert_eq!(list.cards[0].number, 1);
    }

    #[test]
    fn no_matches_is_an_explicit_empty_state() {
        let mut state = state();
        search(&mut state, "xyz123");

        assert_eq!(state.outcome, SearchOutcome::NoMatches);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " Search Results (0 of 7) ");
        match vm.body {
            Body::Empty(empty) => {
                assert_eq!(empty.message, "No Stories Found");
                assert!(empty.subtitle.contains("view all stories"));
            }
            other => panic!("expected empty state, got {other:?}"),
        }
        assert!(vm.footer.keybindings.contains("Enter: view all stories"));
    }

    #[test]
    fn empty_catalog_is_not_a_no_match() {
        let state = AppState::new(Catalog::default(), Theme::default());
        assert_eq!(state.outcome, SearchOutcome::Unfiltered);
        match state.compute_viewmodel(24, 80).body {
            Body::Empty(empty) => assert_eq!(empty.message, "No Stories Yet"),
            other => panic!("expected empty state, got {other:?}"),
        }
    }

    #[test]
    fn filter_clamps_selection() {
        let mut state = state();
        state.selected_index = 6;
        search(&mut state, "zion");

        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_destination().map(|d| d.id.as_str()), Some("zion"));
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 6);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn list_windows_around_the_cursor() {
        let mut state = state();
        state.selected_index = 6;

        // 16 rows leave room for three cards.
        let vm = state.compute_viewmodel(16, 80);
        let list = cards(&vm);
        assert_eq!(list.cards.len(), 3);
        assert_eq!(list.cards[0].number, 5);
        assert_eq!(list.selected_index, 2);
        assert!(list.cards[2].is_selected);
    }

    #[test]
    fn open_detail_replaces_the_list() {
        let mut state = state();
        state.selected_index = 1;
        assert!(state.open_selected());

        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.header.title, " Yosemite National Park ");
        match vm.body {
            Body::Detail(detail) => {
                assert_eq!(detail.location, "California, USA");
                assert!(detail.lines.contains(&DetailLine::Heading("What Makes This Special".to_string())));
                assert!(detail.lines.contains(&DetailLine::Heading("Planning Your Visit".to_string())));
                assert_eq!(detail.viewport, 22);
            }
            other => panic!("expected detail, got {other:?}"),
        }
    }

    #[test]
    fn detail_hides_search_bar() {
        let mut state = state();
        search(&mut state, "zion");
        state.open_selected();

        assert!(state.compute_viewmodel(24, 80).search_bar.is_none());
    }

    #[test]
    fn detail_scroll_is_clamped_and_reset_on_select() {
        let mut state = state();
        state.set_viewport(12, 40);
        state.open_selected();

        state.scroll_detail(1_000);
        let max = state.detail_scroll;
        assert!(max > 0);
        state.scroll_detail(1);
        assert_eq!(state.detail_scroll, max);
        state.scroll_detail(-1);
        assert_eq!(state.detail_scroll, max - 1);

        state.select_destination(&DestinationId::from("zion"));
        assert_eq!(state.detail_scroll, 0);
    }

    #[test]
    fn scroll_without_detail_stays_at_zero() {
        let mut state = state();
        state.scroll_detail(5);
        assert_eq!(state.detail_scroll, 0);
    }

    #[test]
    fn detail_skips_empty_sections() {
        let mut bare = destination("bare", "Bare Park", "Nowhere", &[]);
        bare.highlights.clear();
        let lines = detail_lines(&bare, 60);

        assert!(!lines.contains(&DetailLine::Heading("What Makes This Special".to_string())));
        assert!(!lines.contains(&DetailLine::Heading("Features".to_string())));
        assert!(lines.contains(&DetailLine::Stat {
            label: "Highlights".to_string(),
            value: "0".to_string()
        }));
    }

    #[test]
    fn wrapped_highlights_continue_under_their_bullet() {
        let mut park = destination("p", "P", "L", &["Hiking"]);
        park.highlights = vec!["one two three four five six".to_string()];
        let lines = detail_lines(&park, 12);

        let bullet = lines
            .iter()
            .position(|l| matches!(l, DetailLine::Bullet(_)))
            .unwrap();
        assert_eq!(lines[bullet], DetailLine::Bullet("one two".to_string()));
        assert!(matches!(lines[bullet + 1], DetailLine::BulletCont(_)));
    }

    #[test]
    fn about_counts_parks_from_the_catalog() {
        let mut state = state();
        state.navigate_to(Section::About);

        match state.compute_viewmodel(24, 80).body {
            Body::About(about) => {
                assert_eq!(about.stats[0], ("Parks Visited".to_string(), "7".to_string()));
                assert!(about.lines.contains(&String::new()));
            }
            other => panic!("expected about, got {other:?}"),
        }
    }

    #[test]
    fn contact_marks_the_selected_link() {
        let mut state = state();
        state.navigate_to(Section::Contact);
        state.move_link_up();

        match state.compute_viewmodel(24, 80).body {
            Body::Contact(contact) => {
                assert_eq!(contact.links.len(), SOCIAL_LINKS.len());
                assert!(contact.links[3].is_selected);
                assert_eq!(contact.links[3].label, "YouTube");
            }
            other => panic!("expected contact, got {other:?}"),
        }
    }

    #[test]
    fn navigation_resets_search_and_detail() {
        let mut state = state();
        search(&mut state, "zion");
        state.open_selected();
        state.drawer.open_at(Section::Stories);

        state.navigate_to(Section::About);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert!(!state.detail.is_open());
        assert!(!state.drawer.open);
        assert_eq!(state.filtered.len(), 7);
    }

    #[test]
    fn drawer_overlay_marks_cursor_and_current() {
        let mut state = state();
        state.drawer.open_at(Section::Stories);
        state.drawer.move_down();

        let drawer = state.compute_viewmodel(24, 80).drawer.unwrap();
        assert_eq!(drawer.items.len(), 3);
        assert!(drawer.items[0].is_current);
        assert!(drawer.items[1].is_highlighted);
    }
}
