/// Scroll offset past which the header turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;
/// Viewport width at which the desktop nav replaces the mobile menu.
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollFlag {
    scrolled: bool,
}

impl ScrollFlag {
    /// Record a scroll position. Returns true only when the threshold was crossed.
    pub fn observe(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

/// Close the mobile menu once the viewport is wide enough. Returns true if it closed.
pub fn collapse_menu(open: &mut bool, width: f64) -> bool {
    if *open && width >= DESKTOP_MIN_WIDTH {
        *open = false;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_flag_toggles_once_per_crossing() {
        let mut flag = ScrollFlag::default();
        assert!(!flag.is_scrolled());

        assert!(!flag.observe(10.0));
        assert!(!flag.observe(50.0));
        assert!(flag.observe(51.0));
        assert!(flag.is_scrolled());

        // repeated events on the same side are no-ops
        assert!(!flag.observe(51.0));
        assert!(!flag.observe(400.0));
        assert!(flag.is_scrolled());

        assert!(flag.observe(0.0));
        assert!(!flag.is_scrolled());
        assert!(!flag.observe(0.0));
    }

    #[test]
    fn test_menu_collapses_only_on_wide_viewport() {
        let mut open = true;
        assert!(!collapse_menu(&mut open, 767.0));
        assert!(open);

        assert!(collapse_menu(&mut open, 768.0));
        assert!(!open);

        // already closed
        assert!(!collapse_menu(&mut open, 1280.0));
        assert!(!open);
    }
}
