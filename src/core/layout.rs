//! Responsive layout state shared by the navbar and hero.

/// Widths at or below this use the hero's narrow layout
pub const HERO_NARROW_MAX_WIDTH: f64 = 768.0;

/// Widths above this hide the mobile menu
pub const NAV_DESKTOP_MIN_WIDTH: f64 = 640.0;

/// Scroll distance after which the navbar switches to its frosted style
pub const NAV_SCROLLED_OFFSET: f64 = 60.0;

/// Width assumed while rendering on the server
pub const SERVER_VIEWPORT_WIDTH: f64 = 1280.0;

pub fn is_narrow(width: f64) -> bool {
    width <= HERO_NARROW_MAX_WIDTH
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_OFFSET
}

/// Whether the page body may scroll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyScroll {
    Free,
    Locked,
}

impl BodyScroll {
    /// Inline `overflow` value applied to `<body>`
    pub fn overflow(&self) -> &'static str {
        match self {
            BodyScroll::Free => "",
            BodyScroll::Locked => "hidden",
        }
    }
}

/// The mobile navigation overlay.
///
/// A single open/closed flag. Every transition reports whether it changed
/// anything, so callers only react to real changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger activation
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        true
    }

    /// A link inside the overlay was followed
    pub fn link_activated(&mut self) -> bool {
        self.close()
    }

    /// The viewport was resized to `width`
    pub fn viewport_resized(&mut self, width: f64) -> bool {
        if width > NAV_DESKTOP_MIN_WIDTH {
            self.close()
        } else {
            false
        }
    }

    fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn body_scroll(&self) -> BodyScroll {
        if self.open {
            BodyScroll::Locked
        } else {
            BodyScroll::Free
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }
}
