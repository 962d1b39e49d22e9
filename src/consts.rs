//! Shared constants for the interaction layer.
//!
//! These are the defaults behind [`crate::config::SiteConfig`]; pages may
//! override most of them through the embedded config block.

// ── Preferences ─────────────────────────────────────────────────

/// `localStorage` key holding the theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute set on `<html>` to select the active stylesheet theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Scroll ──────────────────────────────────────────────────────

/// Vertical offset (CSS pixels) above which the scroll-to-top control shows.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;

/// Widest viewport (CSS pixels) at which a sidebar link click closes the sidebar.
pub const SIDEBAR_COLLAPSE_MAX_WIDTH_PX: f64 = 1024.0;

// ── Observers ───────────────────────────────────────────────────

/// Root margin for section tracking: a band starting 20% below the top.
pub const SECTION_ROOT_MARGIN: &str = "-20% 0px -80% 0px";

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// ── Clipboard ───────────────────────────────────────────────────

/// How long the copy confirmation stays on the button.
pub const COPY_CONFIRM_MS: u32 = 2_000;

/// Checkmark glyph shown while the copy confirmation is displayed.
pub const COPY_CONFIRM_SVG: &str = concat!(
    r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
    r#"<polyline points="20 6 9 17 4 12"/></svg>"#,
);

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "docsite-config";
