//! Copy buttons and the browser clipboard backend.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, HtmlDocument, HtmlTextAreaElement, Window};

use super::{MountError, describe, listen, query_all, set_class};
use crate::clipboard::{ClipboardBackend, ClipboardError, CopyFeedback, copy_text};
use crate::config::SiteConfig;

/// Clipboard access through `navigator.clipboard` with the
/// `document.execCommand("copy")` fallback.
pub struct BrowserClipboard {
    window: Window,
    document: Document,
}

impl BrowserClipboard {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Kick off `navigator.clipboard.writeText`. The API is looked up
    /// dynamically because it is absent outside secure contexts.
    fn start_write(&self, text: &str) -> Result<Promise, ClipboardError> {
        let navigator = self.window.navigator();
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|_| ClipboardError::Unavailable)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable);
        }
        let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(|_| ClipboardError::Unavailable)?
            .dyn_into::<Function>()
            .map_err(|_| ClipboardError::Unavailable)?;
        write
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| ClipboardError::Rejected(describe(&e)))?
            .dyn_into::<Promise>()
            .map_err(|_| ClipboardError::Rejected("writeText did not return a promise".to_owned()))
    }

    fn hidden_textarea(&self, text: &str) -> Result<HtmlTextAreaElement, ClipboardError> {
        let textarea = self
            .document
            .create_element("textarea")
            .map_err(fallback_failed)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| ClipboardError::FallbackFailed("textarea has unexpected type".to_owned()))?;
        textarea.set_value(text);
        let hidden = [("position", "fixed"), ("top", "-9999px"), ("left", "-9999px"), ("opacity", "0")];
        for (property, value) in hidden {
            textarea.style().set_property(property, value).map_err(fallback_failed)?;
        }
        Ok(textarea)
    }
}

fn fallback_failed(e: JsValue) -> ClipboardError {
    ClipboardError::FallbackFailed(describe(&e))
}

impl ClipboardBackend for BrowserClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        let started = self.start_write(text);
        async move {
            JsFuture::from(started?)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(describe(&e)))
        }
    }

    fn legacy_copy(&self, text: &str) -> Result<(), ClipboardError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| ClipboardError::FallbackFailed("document has no body".to_owned()))?;
        let html_document = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| ClipboardError::FallbackFailed("not an HTML document".to_owned()))?;
        let textarea = self.hidden_textarea(text)?;
        body.append_child(&textarea).map_err(fallback_failed)?;
        textarea.select();
        let copied = html_document.exec_command("copy");
        if let Err(e) = body.remove_child(&textarea) {
            log::warn!("failed to remove copy textarea: {}", describe(&e));
        }
        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::FallbackFailed("copy command refused".to_owned())),
            Err(e) => Err(fallback_failed(e)),
        }
    }
}

/// Per-page copy button settings.
struct CopySettings {
    attribute: String,
    label: String,
    copied_class: String,
    confirm_ms: u32,
}

/// Wire every copy button on the page.
///
/// # Errors
///
/// Returns `Js` if the selector is invalid or a listener cannot be attached.
pub fn mount(window: &Window, document: &Document, config: &SiteConfig) -> Result<usize, MountError> {
    let backend = Rc::new(BrowserClipboard::new(window.clone(), document.clone()));
    let settings = Rc::new(CopySettings {
        attribute: config.data_clipboard_attribute.clone(),
        label: config.copied_label.clone(),
        copied_class: config.classes.copied.clone(),
        confirm_ms: config.copy_confirm_ms,
    });
    let buttons = query_all(document, &config.selectors.copy_buttons)?;
    for button in &buttons {
        attach(button.clone(), Rc::clone(&backend), Rc::clone(&settings))?;
    }
    Ok(buttons.len())
}

fn attach(button: Element, backend: Rc<BrowserClipboard>, settings: Rc<CopySettings>) -> Result<(), MountError> {
    let feedback = Rc::new(RefCell::new(CopyFeedback::new()));
    let target = button.clone();
    listen(&target, "click", move |_| {
        let Some(text) = button.get_attribute(&settings.attribute) else {
            log::warn!("copy button has no {} attribute", settings.attribute);
            return;
        };
        let (button, backend, settings, feedback) =
            (button.clone(), Rc::clone(&backend), Rc::clone(&settings), Rc::clone(&feedback));
        spawn_local(async move {
            match copy_text(backend.as_ref(), &text).await {
                Ok(path) => {
                    log::debug!("copied {} chars via {path:?}", text.chars().count());
                    confirm(&button, &settings, &feedback);
                }
                Err(e) => log::error!("fallback copy failed: {e}"),
            }
        });
    })
}

/// Swap in the confirmation and schedule the restore.
fn confirm(button: &Element, settings: &Rc<CopySettings>, feedback: &Rc<RefCell<CopyFeedback>>) {
    let shown = feedback.borrow_mut().confirm(&button.inner_html(), &settings.label);
    button.set_inner_html(&shown);
    set_class(button, &settings.copied_class, true);

    let (button, settings, feedback) = (button.clone(), Rc::clone(settings), Rc::clone(feedback));
    Timeout::new(settings.confirm_ms, move || {
        if let Some(original) = feedback.borrow_mut().restore() {
            button.set_inner_html(&original);
            set_class(&button, &settings.copied_class, false);
        }
    })
    .forget();
}

