//! Floating scroll-to-top control visibility.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Tracks whether the scroll-to-top control is shown.
///
/// Recomputed on every scroll event; the check is cheap and idempotent, so
/// no debouncing is applied.
#[derive(Debug, Clone)]
pub struct ScrollTopState {
    threshold_px: f64,
    visible: bool,
}

impl ScrollTopState {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px, visible: false }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Update from the current vertical offset. Visible strictly above the
    /// threshold. Returns whether visibility changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let visible = offset_y > self.threshold_px;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}
