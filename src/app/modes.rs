//! Input modes, sections and the navigation drawer.
//!
//! These types decide which keybindings are active and which part of the blog
//! fills the screen.
//!
//! - **Input mode**: `Normal` navigation or `Search` (typing or navigating results)
//! - **Section**: `Stories`, `About` or `Contact`
//! - **Drawer**: an overlay menu listing the sections, open or closed

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to open the highlighted story).
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts j/k for movement, enter to open, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// Top-level area of the blog currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Stories,
    About,
    Contact,
}

impl Section {
    /// All sections in drawer order.
    pub const ALL: [Self; 3] = [Self::Stories, Self::About, Self::Contact];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Stories => "Stories",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// The section after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Stories => Self::About,
            Self::About => Self::Contact,
            Self::Contact => Self::Stories,
        }
    }
}

/// Open/closed navigation drawer with a cursor over [`Section::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavDrawer {
    pub open: bool,
    pub cursor: usize,
}

impl NavDrawer {
    /// Opens the drawer with the cursor on `current`.
    pub fn open_at(&mut self, current: Section) {
        self.open = true;
        self.cursor = Section::ALL.iter().position(|s| *s == current).unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % Section::ALL.len();
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(Section::ALL.len() - 1);
    }

    /// Section under the cursor.
    #[must_use]
    pub fn highlighted(&self) -> Section {
        Section::ALL[self.cursor % Section::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_cursor_wraps() {
        let mut drawer = NavDrawer::default();
        drawer.open_at(Section::Contact);
        assert_eq!(drawer.highlighted(), Section::Contact);

        drawer.move_down();
        assert_eq!(drawer.highlighted(), Section::Stories);

        drawer.move_up();
        drawer.move_up();
        assert_eq!(drawer.highlighted(), Section::About);
    }

    #[test]
    fn sections_cycle() {
        assert_eq!(Section::Stories.next().next().next(), Section::Stories);
    }
}
