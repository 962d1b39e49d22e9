//! Client-side interaction layer for the static documentation site.
//!
//! This crate is compiled to WebAssembly and loaded by every docs page. It
//! renders nothing itself: the markup and styles are authored elsewhere, and
//! this layer attaches behavior to them (theme switching, panels, copy
//! buttons, scroll helpers, section tracking, reveal animations).
//!
//! Every behavior is split into a browser-free core, unit-tested natively,
//! and a thin wiring layer in [`dom`] that feeds DOM events to the core and
//! writes the core's state back to the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark theme and its persisted preference |
//! | [`prefs`] | Key-value preference store seam |
//! | [`panel`] | Mobile menu and sidebar open/closed state |
//! | [`clipboard`] | Copy with fallback, confirmation state |
//! | [`scroll`] | Scroll-to-top visibility |
//! | [`sections`] | Active navigation entry while scrolling |
//! | [`anchor`] | Same-page anchor handling |
//! | [`reveal`] | One-shot reveal animation state |
//! | [`keys`] | Global keyboard shortcuts |
//! | [`config`] | Page configuration and DOM contract |
//! | [`consts`] | Default constants |
//! | [`dom`] | `web-sys` wiring for all of the above |

pub mod anchor;
pub mod clipboard;
pub mod config;
pub mod consts;
pub mod dom;
pub mod keys;
pub mod panel;
pub mod prefs;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod theme;

use web_sys::{Document, Window};

use crate::config::SiteConfig;

/// Module entry point. Mounts immediately, or on `DOMContentLoaded` when the
/// script runs before the document has finished parsing.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen::prelude::wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = dom::load_config(&document);
    let level = config
        .as_ref()
        .map_or(log::Level::Info, |c| c.log_level().unwrap_or(log::Level::Info));
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {e}").into());
    }
    let config = config.unwrap_or_else(|e| {
        log::warn!("{e}; using default configuration");
        SiteConfig::default()
    });

    if document.ready_state() == "loading" {
        let (ready_window, ready_document) = (window.clone(), document.clone());
        let mut config = Some(config);
        let result = dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some(config) = config.take() {
                mount(&ready_window, &ready_document, &config);
            }
        });
        if let Err(e) = result {
            log::error!("cannot wait for DOMContentLoaded: {e}");
        }
    } else {
        mount(&window, &document, &config);
    }
}

fn mount(window: &Window, document: &Document, config: &SiteConfig) {
    dom::mount_all(window, document, config);
    log::info!("docsite interactions ready");
}
