//! Open/closed overlay panels: the mobile menu and the sidebar.
//!
//! Each panel is a two-state machine owned by its [`PanelController`]. The
//! browser shell feeds it clicks and keys, then re-syncs the DOM from the
//! controller's state through [`PanelController::bar_styles`] and
//! [`PanelController::body_overflow`], so every close path reverts the same
//! side effects.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Which panel a controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Collapsible top navigation shown on narrow screens.
    MobileMenu,
    /// Documentation sidebar; locks background scrolling while open.
    Sidebar,
}

/// Where a document click landed, relative to a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    InsidePanel,
    OnToggle,
    Outside,
}

/// Inline style for one bar of the hamburger toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

const BARS_OPEN: [BarStyle; 3] = [
    BarStyle { transform: "rotate(45deg) translate(5px, 5px)", opacity: "1" },
    BarStyle { transform: "none", opacity: "0" },
    BarStyle { transform: "rotate(-45deg) translate(5px, -5px)", opacity: "1" },
];

const BARS_CLOSED: [BarStyle; 3] = [BarStyle { transform: "none", opacity: "1" }; 3];

/// Open/closed state for one panel.
#[derive(Debug, Clone)]
pub struct PanelController {
    kind: PanelKind,
    open: bool,
    collapse_max_width_px: f64,
}

impl PanelController {
    /// A closed panel. `collapse_max_width_px` is the widest viewport at
    /// which a link click closes the sidebar; it is unused by the mobile menu.
    #[must_use]
    pub fn new(kind: PanelKind, collapse_max_width_px: f64) -> Self {
        Self { kind, open: false, collapse_max_width_px }
    }

    #[must_use]
    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    // --- Transitions ---
    //
    // Each returns whether the state changed, so the shell only touches the
    // DOM when something happened.

    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        true
    }

    /// A click somewhere in the document. Only clicks outside both the panel
    /// and its toggle close it.
    pub fn on_document_click(&mut self, origin: ClickOrigin) -> bool {
        match origin {
            ClickOrigin::Outside => self.close(),
            ClickOrigin::InsidePanel | ClickOrigin::OnToggle => false,
        }
    }

    /// A navigation link inside the panel was followed.
    pub fn on_link_click(&mut self, viewport_width_px: f64) -> bool {
        match self.kind {
            PanelKind::MobileMenu => self.close(),
            PanelKind::Sidebar if viewport_width_px <= self.collapse_max_width_px => self.close(),
            PanelKind::Sidebar => false,
        }
    }

    pub fn on_escape(&mut self) -> bool {
        self.close()
    }

    // --- Side effects derived from state ---

    /// Hamburger bar styles for the mobile menu toggle.
    #[must_use]
    pub fn bar_styles(&self) -> Option<&'static [BarStyle; 3]> {
        match self.kind {
            PanelKind::MobileMenu if self.open => Some(&BARS_OPEN),
            PanelKind::MobileMenu => Some(&BARS_CLOSED),
            PanelKind::Sidebar => None,
        }
    }

    /// Value for `document.body.style.overflow`, or `None` if this panel
    /// never touches it.
    #[must_use]
    pub fn body_overflow(&self) -> Option<&'static str> {
        match self.kind {
            PanelKind::Sidebar if self.open => Some("hidden"),
            PanelKind::Sidebar => Some(""),
            PanelKind::MobileMenu => None,
        }
    }
}
