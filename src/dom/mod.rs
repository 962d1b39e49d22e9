//! Browser shell: wires DOM events to the component cores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule mounts one behavior onto server-rendered markup. Mounting
//! looks up the elements named in [`SiteConfig`], attaches listeners that
//! live for the page, and syncs the DOM from the core's state after every
//! transition. Components mount independently: a page missing one
//! component's markup still gets every other behavior.

pub mod clipboard;
pub mod observer;
pub mod panels;
pub mod scroll;
pub mod storage;
pub mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::config::{ConfigError, SiteConfig};
use crate::consts::CONFIG_ELEMENT_ID;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("no element matches {0}")]
    MissingSelector(String),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe(&value))
    }
}

// =============================================================================
// MOUNT
// =============================================================================

/// Attach every component to the page.
pub fn mount_all(window: &Window, document: &Document, config: &SiteConfig) {
    report("theme toggle", theme::mount(document, config));

    let mut mounted_panels = Vec::new();
    for (name, result) in [
        ("mobile menu", panels::mount_mobile_menu(window, document, config)),
        ("sidebar", panels::mount_sidebar(window, document, config)),
    ] {
        match result {
            Ok(panel) => {
                log::debug!("mounted {name}");
                mounted_panels.push(panel);
            }
            Err(e) => log::warn!("{name} not mounted: {e}"),
        }
    }
    report("keyboard shortcuts", panels::mount_shortcuts(document, mounted_panels));

    report("copy buttons", clipboard::mount(window, document, config));
    report("scroll to top", scroll::mount_scroll_top(window, document, config));
    report("smooth anchors", scroll::mount_anchors(window, document, config));
    report("section tracker", observer::mount_section_tracker(document, config));
    report("reveal animation", observer::mount_reveal(document, config));
}

/// Read the optional embedded config block.
///
/// # Errors
///
/// Returns a `ConfigError` if the block exists but does not parse.
pub fn load_config(document: &Document) -> Result<SiteConfig, ConfigError> {
    let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(SiteConfig::default());
    };
    SiteConfig::from_json(&block.text_content().unwrap_or_default())
}

/// Log the outcome of one component mount. `Ok` carries how many
/// elements were wired.
fn report(component: &str, result: Result<usize, MountError>) {
    match result {
        Ok(count) => log::debug!("mounted {component} ({count} elements)"),
        Err(e) => log::warn!("{component} not mounted: {e}"),
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Look up a required element by id.
pub(crate) fn by_id(document: &Document, id: &str) -> Result<Element, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_owned()))
}

/// All elements in `document` matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, MountError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`, in document order.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, MountError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), MountError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Add or remove `class` on `element`.
pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    warn_on_err(result, "class update");
}

/// Set an inline style property. Non-HTML elements are skipped.
pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        warn_on_err(html.style().set_property(property, value), "style update");
    }
}

/// Log a failed DOM call and continue.
pub(crate) fn warn_on_err<T>(result: Result<T, JsValue>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{what} failed: {}", describe(&e));
            None
        }
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
