//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They carry display-ready strings only: wrapping, truncation,
//! star glyphs and match ranges are all resolved before rendering.
//!
//! # Example
//!
//! ```rust
//! use nomorra::ui::viewmodel::{Body, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Search Results (0 of 7) ".to_string() },
//!     footer: FooterInfo { keybindings: "ESC: exit search".to_string() },
//!     search_bar: None,
//!     body: Body::Empty(EmptyState {
//!         message: "No Stories Found".to_string(),
//!         subtitle: "Press Enter to view all stories".to_string(),
//!     }),
//!     drawer: None,
//! };
//! assert!(matches!(vm.body, Body::Empty(_)));
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Keybinding hints for the current mode.
    pub footer: FooterInfo,

    /// Search box contents, present only in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Main content area.
    pub body: Body,

    /// Navigation drawer overlay, present only while the drawer is open.
    pub drawer: Option<DrawerInfo>,
}

/// What fills the space between header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The (possibly filtered) story list.
    Stories(StoryList),
    /// A query matched nothing.
    Empty(EmptyState),
    /// Detail view of one destination.
    Detail(DetailView),
    /// The About section.
    About(AboutView),
    /// The Contact section.
    Contact(ContactView),
}

/// Visible window of story cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryList {
    pub cards: Vec<StoryCard>,
    /// Index of the selected card within `cards`.
    pub selected_index: usize,
}

/// One row of the story list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryCard {
    /// 1-based position within the current result list.
    pub number: usize,
    pub name: String,
    pub location: String,
    /// One-sentence teaser shown under the title line.
    pub description: String,
    /// Star glyphs followed by the numeric rating.
    pub rating: String,
    pub difficulty: String,
    /// Feature preview, already limited to the card's slot count.
    pub features: Vec<String>,
    pub is_selected: bool,
    /// The first story in the list is presented as the featured one.
    pub is_featured: bool,
    /// Char ranges of `name` matching the current query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty result message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message ("No Stories Found").
    pub message: String,
    /// Hint on how to get results back.
    pub subtitle: String,
}

/// Search box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently go to the query.
    pub is_typing: bool,
}

/// Detail view of a destination.
///
/// `lines` is the full wrapped content; the renderer shows the slice starting
/// at `scroll` that fits the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub location: String,
    pub rating: String,
    pub difficulty: String,
    pub lines: Vec<DetailLine>,
    /// First visible line.
    pub scroll: usize,
    /// Number of lines that fit in the viewport.
    pub viewport: usize,
}

/// One line of detail content, tagged with how to style it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    /// Wrapped teaser opening the detail view.
    Lead(String),
    Heading(String),
    Text(String),
    Bullet(String),
    /// Continuation of a wrapped bullet.
    BulletCont(String),
    Tags(Vec<String>),
    Stat { label: String, value: String },
    Blank,
}

/// The About section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutView {
    pub title: String,
    pub tagline: String,
    /// Wrapped paragraphs; an empty string separates paragraphs.
    pub lines: Vec<String>,
    pub stats: Vec<(String, String)>,
}

/// The Contact section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub intro: String,
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
    pub is_selected: bool,
}

/// Drawer overlay listing the sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerInfo {
    pub title: String,
    pub items: Vec<DrawerItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerItem {
    pub label: String,
    /// Under the drawer cursor.
    pub is_highlighted: bool,
    /// The section currently on screen.
    pub is_current: bool,
}
