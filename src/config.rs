//! Page-level configuration.
//!
//! DESIGN
//! ======
//! The markup is authored elsewhere, so the DOM contract (ids, classes,
//! selectors) and the tunable constants live in one deserializable struct.
//! A page may embed a JSON block to override any subset of fields; every
//! field not named keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    COPY_CONFIRM_MS, REVEAL_THRESHOLD, SCROLL_TOP_THRESHOLD_PX, SECTION_ROOT_MARGIN,
    SIDEBAR_COLLAPSE_MAX_WIDTH_PX,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config block is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
    #[error("reveal threshold {0} is outside 0..=1")]
    RevealThreshold(f64),
    #[error("invalid section root margin: {0:?}")]
    RootMargin(String),
}

/// Element ids the components attach to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub theme_toggle: String,
    pub mobile_menu_toggle: String,
    pub mobile_menu: String,
    pub sidebar: String,
    pub sidebar_toggle: String,
    pub sidebar_close: String,
    pub scroll_top: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            theme_toggle: "themeToggle".to_owned(),
            mobile_menu_toggle: "mobileMenuToggle".to_owned(),
            mobile_menu: "mobileMenu".to_owned(),
            sidebar: "sidebar".to_owned(),
            sidebar_toggle: "sidebarToggle".to_owned(),
            sidebar_close: "sidebarClose".to_owned(),
            scroll_top: "scrollTop".to_owned(),
        }
    }
}

/// CSS selectors for element groups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    /// Icon inside the theme toggle.
    pub theme_icon: String,
    /// Visual bars inside the mobile menu toggle.
    pub menu_bars: String,
    /// Links inside the mobile menu.
    pub mobile_nav_links: String,
    /// Links inside the sidebar.
    pub sidebar_links: String,
    pub copy_buttons: String,
    pub sections: String,
    /// Navigation entries that receive the active marker.
    pub section_links: String,
    pub anchors: String,
    pub reveal_targets: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_icon: ".theme-icon".to_owned(),
            menu_bars: "span".to_owned(),
            mobile_nav_links: ".mobile-nav-link".to_owned(),
            sidebar_links: ".nav-link".to_owned(),
            copy_buttons: ".copy-btn".to_owned(),
            sections: ".doc-section".to_owned(),
            section_links: ".sidebar .nav-link".to_owned(),
            anchors: "a[href^=\"#\"]".to_owned(),
            reveal_targets: ".feature-card, .code-block, .info-box".to_owned(),
        }
    }
}

/// Class names toggled by the components.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Classes {
    pub open: String,
    pub visible: String,
    pub active: String,
    pub copied: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            open: "open".to_owned(),
            visible: "visible".to_owned(),
            active: "active".to_owned(),
            copied: "copied".to_owned(),
        }
    }
}

/// Full configuration for one page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub ids: ElementIds,
    pub selectors: Selectors,
    pub classes: Classes,
    pub scroll_top_threshold_px: f64,
    pub sidebar_collapse_max_width_px: f64,
    pub section_root_margin: String,
    pub reveal_threshold: f64,
    pub copy_confirm_ms: u32,
    pub copied_label: String,
    pub data_clipboard_attribute: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            selectors: Selectors::default(),
            classes: Classes::default(),
            scroll_top_threshold_px: SCROLL_TOP_THRESHOLD_PX,
            sidebar_collapse_max_width_px: SIDEBAR_COLLAPSE_MAX_WIDTH_PX,
            section_root_margin: SECTION_ROOT_MARGIN.to_owned(),
            reveal_threshold: REVEAL_THRESHOLD,
            copy_confirm_ms: COPY_CONFIRM_MS,
            copied_label: "تم النسخ!".to_owned(),
            data_clipboard_attribute: "data-clipboard".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a config block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the text is not a JSON object matching the schema,
    /// or the first failure from [`SiteConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the browser would refuse when building observers.
    ///
    /// # Errors
    ///
    /// Returns `LogLevel`, `RevealThreshold` (outside `0.0..=1.0`, or NaN),
    /// or `RootMargin` (not one to four `px`/`%` lengths).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level()?;
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::RevealThreshold(self.reveal_threshold));
        }
        if !is_root_margin(&self.section_root_margin) {
            return Err(ConfigError::RootMargin(self.section_root_margin.clone()));
        }
        Ok(())
    }

    /// Resolve the configured log level.
    ///
    /// # Errors
    ///
    /// Returns `LogLevel` if the string is not one of the `log` crate levels.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

/// One to four whitespace-separated lengths, each in `px` or `%`.
fn is_root_margin(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    (1..=4).contains(&parts.len())
        && parts.iter().all(|part| {
            let number = part.strip_suffix("px").or_else(|| part.strip_suffix('%'));
            number.is_some_and(|n| n.parse::<f64>().is_ok_and(f64::is_finite))
        })
}
