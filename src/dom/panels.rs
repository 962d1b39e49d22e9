//! Mobile menu, sidebar, and the global key handler that closes them.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Node, Window};

use super::{MountError, by_id, listen, query_all_in, set_class, set_style};
use crate::config::SiteConfig;
use crate::keys::{Modifiers, Shortcut, shortcut_for};
use crate::panel::{ClickOrigin, PanelController, PanelKind};

/// A panel controller together with the elements it drives.
pub struct PanelView {
    controller: PanelController,
    panel: Element,
    toggle: Element,
    bars: Vec<Element>,
    body: Option<HtmlElement>,
    open_class: String,
}

/// Shared between the panel's own listeners and the key handler.
pub type SharedPanel = Rc<RefCell<PanelView>>;

impl PanelView {
    /// Push the controller's state to the DOM.
    fn sync(&self) {
        set_class(&self.panel, &self.open_class, self.controller.is_open());
        if let Some(styles) = self.controller.bar_styles() {
            for (bar, style) in self.bars.iter().zip(styles) {
                set_style(bar, "transform", style.transform);
                set_style(bar, "opacity", style.opacity);
            }
        }
        if let (Some(body), Some(overflow)) = (&self.body, self.controller.body_overflow()) {
            set_style(body, "overflow", overflow);
        }
    }

    fn origin_of(&self, event: &Event) -> ClickOrigin {
        let target = event.target().and_then(|t| t.dyn_ref::<Node>().cloned());
        let target = target.as_ref();
        if self.panel.contains(target) {
            ClickOrigin::InsidePanel
        } else if self.toggle.contains(target) {
            ClickOrigin::OnToggle
        } else {
            ClickOrigin::Outside
        }
    }
}

/// Run a transition and re-sync the DOM if it changed anything.
fn update(view: &SharedPanel, transition: impl FnOnce(&mut PanelController) -> bool) {
    let mut view = view.borrow_mut();
    if transition(&mut view.controller) {
        view.sync();
    }
}

fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .map_or(f64::INFINITY, |w| w.as_f64().unwrap_or(f64::INFINITY))
}

fn shared(
    kind: PanelKind,
    document: &Document,
    config: &SiteConfig,
    panel: Element,
    toggle: Element,
    bars: Vec<Element>,
) -> SharedPanel {
    let view = PanelView {
        controller: PanelController::new(kind, config.sidebar_collapse_max_width_px),
        panel,
        toggle,
        bars,
        body: document.body(),
        open_class: config.classes.open.clone(),
    };
    // Only the class: inline bar and body styles stay as authored until the first transition.
    set_class(&view.panel, &view.open_class, view.controller.is_open());
    Rc::new(RefCell::new(view))
}

/// Listeners common to both panels: link clicks and outside clicks.
fn listen_common(
    window: &Window,
    document: &Document,
    view: &SharedPanel,
    links: &[Element],
) -> Result<(), MountError> {
    for link in links {
        let (view, window) = (Rc::clone(view), window.clone());
        listen(link, "click", move |_| {
            update(&view, |c| c.on_link_click(viewport_width(&window)));
        })?;
    }
    let view = Rc::clone(view);
    listen(document, "click", move |event| {
        let origin = view.borrow().origin_of(&event);
        update(&view, |c| c.on_document_click(origin));
    })
}

// =============================================================================
// MOUNT
// =============================================================================

/// Wire the mobile menu toggle, its links, and outside-click closing.
///
/// # Errors
///
/// Returns `MissingElement` if the menu or its toggle is absent.
pub fn mount_mobile_menu(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<SharedPanel, MountError> {
    let toggle = by_id(document, &config.ids.mobile_menu_toggle)?;
    let menu = by_id(document, &config.ids.mobile_menu)?;
    let bars = query_all_in(&toggle, &config.selectors.menu_bars)?;
    let links = query_all_in(&menu, &config.selectors.mobile_nav_links)?;
    let view = shared(PanelKind::MobileMenu, document, config, menu, toggle.clone(), bars);

    let toggled = Rc::clone(&view);
    listen(&toggle, "click", move |_| update(&toggled, PanelController::toggle))?;
    listen_common(window, document, &view, &links)?;
    Ok(view)
}

/// Wire the sidebar open/close controls, its links, and outside-click closing.
///
/// # Errors
///
/// Returns `MissingElement` if the sidebar or either control is absent.
pub fn mount_sidebar(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<SharedPanel, MountError> {
    let sidebar = by_id(document, &config.ids.sidebar)?;
    let open = by_id(document, &config.ids.sidebar_toggle)?;
    let close = by_id(document, &config.ids.sidebar_close)?;
    let links = query_all_in(&sidebar, &config.selectors.sidebar_links)?;
    let view = shared(PanelKind::Sidebar, document, config, sidebar, open.clone(), Vec::new());

    let opened = Rc::clone(&view);
    listen(&open, "click", move |_| update(&opened, PanelController::open))?;
    let closed = Rc::clone(&view);
    listen(&close, "click", move |_| update(&closed, PanelController::close))?;
    listen_common(window, document, &view, &links)?;
    Ok(view)
}

/// Global shortcuts: Escape closes every panel; Ctrl/Cmd+K is reserved.
///
/// # Errors
///
/// Returns `Js` if the listener cannot be attached.
pub fn mount_shortcuts(document: &Document, panels: Vec<SharedPanel>) -> Result<usize, MountError> {
    let count = panels.len();
    listen(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let modifiers = Modifiers {
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
        };
        match shortcut_for(&event.key(), modifiers) {
            Some(Shortcut::Search) => {
                event.prevent_default();
                log::debug!("search shortcut pressed; search is not available");
            }
            Some(Shortcut::CloseAll) => {
                for panel in &panels {
                    update(panel, PanelController::on_escape);
                }
            }
            None => {}
        }
    })?;
    Ok(count)
}
