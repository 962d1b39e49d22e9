//! One-shot fade/slide-in for content blocks.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Inline style applied to a reveal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

/// Style before the element has been seen.
pub const HIDDEN: RevealStyle = RevealStyle { opacity: "0", transform: "translateY(20px)" };

/// Style once revealed.
pub const SHOWN: RevealStyle = RevealStyle { opacity: "1", transform: "translateY(0)" };

/// Transition set alongside the hidden style.
pub const TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";

/// Reveal state for one element.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    #[must_use]
    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn style(self) -> RevealStyle {
        if self.revealed { SHOWN } else { HIDDEN }
    }

    /// Returns `true` only on the first intersection; later ones and
    /// leaving the viewport are no-ops.
    pub fn on_intersection(&mut self, intersecting: bool) -> bool {
        if !intersecting || self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }
}
