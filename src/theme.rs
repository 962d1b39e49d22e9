//! Light/dark theme selection.
//!
//! The controller owns the active [`Theme`] and its preference store. The
//! browser shell applies [`Theme::as_str`] to the root `data-theme`
//! attribute and [`Theme::icon`] to the toggle's icon after every change.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::THEME_STORAGE_KEY;
use crate::prefs::PreferenceStore;

/// Visual theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored theme name. Only the exact names are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph for the toggle: a moon offers dark mode, a sun offers light.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}",
            Self::Dark => "\u{2600}\u{FE0F}",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Owns the active theme and persists every change.
pub struct ThemeController<S: PreferenceStore> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Load the saved theme, defaulting to light when absent or unrecognized.
    pub fn load(store: S) -> Self {
        let theme = store
            .get(THEME_STORAGE_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self { theme, store }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it. A failed write is logged and the
    /// in-page theme still changes.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, self.theme.as_str()) {
            log::warn!("theme preference not saved: {e}");
        }
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
