//! Raw scroll position state

use serde::{Deserialize, Serialize};

/// Scroll position in pixels plus the scrollable extent.
///
/// `max_scroll` is the document height minus the viewport height; a content
/// area shorter than the viewport yields `max_scroll == 0`, in which case
/// progress is defined as 0 rather than dividing by zero.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ScrollState {
    /// Current scroll offset in pixels
    pub scroll_y: f32,
    /// Maximum scrollable offset in pixels
    pub max_scroll: f32,
}

impl ScrollState {
    pub fn new(max_scroll: f32) -> Self {
        Self {
            scroll_y: 0.0,
            max_scroll: max_scroll.max(0.0),
        }
    }

    /// Normalized progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.max_scroll > 0.0 {
            (self.scroll_y / self.max_scroll).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Record a new scroll offset
    pub fn set_scroll(&mut self, y: f32) {
        self.scroll_y = y;
    }

    /// Update the scrollable extent (viewport or content resize)
    pub fn set_max_scroll(&mut self, max: f32) {
        self.max_scroll = max.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_basic() {
        let mut s = ScrollState::new(1000.0);
        s.set_scroll(250.0);
        assert!((s.progress() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_progress_clamped() {
        let mut s = ScrollState::new(100.0);
        s.set_scroll(250.0);
        assert_eq!(s.progress(), 1.0);
        s.set_scroll(-50.0);
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn test_zero_extent_progress_is_zero() {
        let mut s = ScrollState::new(0.0);
        s.set_scroll(500.0);
        assert_eq!(s.progress(), 0.0);
    }
}
