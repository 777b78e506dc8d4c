//! Navigation bar state: scroll styling, mobile menu, active link.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical scroll offset past which the bar turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "STRONA GŁÓWNA", path: "/" },
    NavLink { label: "GALERIA", path: "/galeria" },
    NavLink { label: "ATRAKCJE", path: "/atrakcje" },
    NavLink { label: "KONTAKT", path: "/kontakt" },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Record a scroll position. Returns `true` when the scrolled flag flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = is_scrolled(scroll_y);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Links are highlighted on exact path match only.
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    current_path == link_path
}

/// The footer location panel is shown on the home page only.
pub fn shows_location_panel(current_path: &str) -> bool {
    current_path == "/"
}
