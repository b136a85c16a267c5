//! The mobile navigation drawer as a tiny explicit state machine.
//!
//! The shell applies [`NavState`] to the page: `is_open` drives the drawer
//! class and the toggle's expanded attribute, `scroll_locked` drives the body
//! overflow lock. Opening and locking always move together.

/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Whether body scrolling should be locked. Locked exactly while open.
    #[must_use]
    pub const fn scroll_locked(self) -> bool {
        self.open
    }

    pub const fn open(&mut self) {
        self.open = true;
    }

    pub const fn close(&mut self) {
        self.open = false;
    }

    /// The hamburger button handler.
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Escape closes an open drawer; returns whether anything changed so the
    /// shell knows to restore focus to the toggle.
    pub const fn on_escape(&mut self) -> bool {
        if self.open {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// Following a navigation link always closes the drawer.
    pub const fn on_link_followed(&mut self) {
        self.open = false;
    }
}
