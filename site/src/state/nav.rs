//! Navigation bar state: mobile menu and scroll-derived style.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset (CSS px) at which the nav switches to its scrolled style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Visual style of the sticky navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavStyle {
    /// Page is at (or near) the top.
    #[default]
    Top,
    /// Page has scrolled past the threshold.
    Scrolled,
}

impl NavStyle {
    /// Style for a scroll offset. At or above the threshold is `Scrolled`;
    /// non-finite or negative offsets count as the top of the page.
    pub fn for_scroll_y(scroll_y: f64) -> Self {
        if scroll_y >= SCROLLED_THRESHOLD_PX {
            Self::Scrolled
        } else {
            Self::Top
        }
    }

    /// Classes applied to the nav container.
    pub fn class(self) -> &'static str {
        match self {
            Self::Top => "nav-bar nav-bar--top shadow-xl border-white/40",
            Self::Scrolled => "nav-bar nav-bar--scrolled shadow-2xl border-blue-100/60 bg-white/90",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub scroll_y: f64,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A navigation link was chosen: the menu closes behind it.
    pub fn select_link(&mut self) {
        self.close_menu();
    }

    /// Record a new scroll offset.
    ///
    /// Returns `true` when the derived style changed, so callers can skip
    /// notifying subscribers on every scroll tick.
    pub fn set_scroll_y(&mut self, scroll_y: f64) -> bool {
        let before = self.style();
        self.scroll_y = scroll_y;
        before != self.style()
    }

    pub fn style(&self) -> NavStyle {
        NavStyle::for_scroll_y(self.scroll_y)
    }

    #[cfg(test)]
    pub(crate) fn is_scrolled(&self) -> bool {
        self.style() == NavStyle::Scrolled
    }
}
