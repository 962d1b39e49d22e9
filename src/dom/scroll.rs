//! Scroll-to-top control and smooth in-page anchors.

use wasm_bindgen::JsValue;
use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use super::{MountError, by_id, describe, listen, query_all, set_class, warn_on_err};
use crate::anchor::{AnchorAction, on_anchor_click};
use crate::config::SiteConfig;
use crate::scroll::ScrollTopState;

/// Show the scroll-to-top control past the threshold and scroll home on click.
///
/// # Errors
///
/// Returns `MissingElement` if the control is absent.
pub fn mount_scroll_top(window: &Window, document: &Document, config: &SiteConfig) -> Result<usize, MountError> {
    let control = by_id(document, &config.ids.scroll_top)?;
    let mut state = ScrollTopState::new(config.scroll_top_threshold_px);
    let visible_class = config.classes.visible.clone();

    // The page may load already scrolled (restored position, deep link).
    refresh(window, &control, &mut state, &visible_class);

    let (scrolled, shown) = (window.clone(), control.clone());
    listen(window, "scroll", move |_| refresh(&scrolled, &shown, &mut state, &visible_class))?;

    let clicked = window.clone();
    listen(&control, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        clicked.scroll_to_with_scroll_to_options(&options);
    })?;
    Ok(1)
}

fn refresh(window: &Window, control: &Element, state: &mut ScrollTopState, visible_class: &str) {
    let offset = match window.scroll_y() {
        Ok(offset) => offset,
        Err(e) => {
            log::warn!("scroll offset unavailable: {}", describe(&e));
            return;
        }
    };
    if state.on_scroll(offset) {
        set_class(control, visible_class, state.is_visible());
    }
}

/// Intercept same-page anchor clicks and scroll smoothly to the target.
///
/// # Errors
///
/// Returns `Js` if the selector is invalid or a listener cannot be attached.
pub fn mount_anchors(window: &Window, document: &Document, config: &SiteConfig) -> Result<usize, MountError> {
    let anchors = query_all(document, &config.selectors.anchors)?;
    for anchor in &anchors {
        let (window, document, link) = (window.clone(), document.clone(), anchor.clone());
        listen(anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let AnchorAction::ScrollTo { target_id, fragment } =
                on_anchor_click(&href, |id| document.get_element_by_id(id).is_some())
            else {
                return;
            };
            let Some(target) = document.get_element_by_id(target_id) else {
                return;
            };
            event.prevent_default();

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            replace_fragment(&window, fragment);
        })?;
    }
    Ok(anchors.len())
}

/// Show `fragment` in the address bar without adding a history entry.
fn replace_fragment(window: &Window, fragment: &str) {
    if let Some(history) = warn_on_err(window.history(), "history lookup") {
        warn_on_err(history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)), "history update");
    }
}
