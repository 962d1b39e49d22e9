//! Theme toggle wiring.

use web_sys::{Document, Element};

use super::storage::LocalStore;
use super::{MountError, by_id, listen, warn_on_err};
use crate::config::SiteConfig;
use crate::consts::THEME_ATTRIBUTE;
use crate::theme::{Theme, ThemeController};

/// Apply the saved theme to `<html>`, then wire the toggle.
///
/// The theme attribute is applied even when the toggle is missing, so the
/// page never renders in the wrong theme.
///
/// # Errors
///
/// Returns `MissingElement` if the toggle or its icon is absent.
pub fn mount(document: &Document, config: &SiteConfig) -> Result<usize, MountError> {
    let root = document
        .document_element()
        .ok_or_else(|| MountError::MissingElement("html".to_owned()))?;
    let mut controller = ThemeController::load(LocalStore::from_window());
    apply_root(&root, controller.theme());

    let toggle = by_id(document, &config.ids.theme_toggle)?;
    let icon = toggle
        .query_selector(&config.selectors.theme_icon)?
        .ok_or_else(|| MountError::MissingSelector(config.selectors.theme_icon.clone()))?;
    icon.set_text_content(Some(controller.theme().icon()));

    listen(&toggle, "click", move |_| {
        let theme = controller.toggle();
        apply_root(&root, theme);
        icon.set_text_content(Some(theme.icon()));
        log::debug!("theme switched to {}", theme.as_str());
    })?;
    Ok(1)
}

fn apply_root(root: &Element, theme: Theme) {
    warn_on_err(root.set_attribute(THEME_ATTRIBUTE, theme.as_str()), "theme attribute");
}
