//! Intersection-observer driven behaviors: section tracking and reveal.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::{MountError, query_all, set_class, set_style};
use crate::config::SiteConfig;
use crate::reveal::{RevealState, RevealStyle, TRANSITION};
use crate::sections::{SectionEntry, SectionTracker};

/// Observe `targets` and hand each batch of entries to `on_entries`.
///
/// The observer is kept alive by its targets, so the handle is not returned.
fn observe(
    root_margin: Option<&str>,
    threshold: f64,
    targets: &[Element],
    mut on_entries: impl FnMut(Vec<IntersectionObserverEntry>) + 'static,
) -> Result<(), MountError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _: IntersectionObserver| {
            let entries: Vec<IntersectionObserverEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_ref::<IntersectionObserverEntry>().cloned())
                .collect();
            on_entries(entries);
        },
    );
    let options = IntersectionObserverInit::new();
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    for target in targets {
        observer.observe(target);
    }
    Ok(())
}

/// Mark the sidebar link of the section currently in the reading band.
///
/// # Errors
///
/// Returns `MissingSelector` if the page has no sections.
pub fn mount_section_tracker(document: &Document, config: &SiteConfig) -> Result<usize, MountError> {
    let sections = query_all(document, &config.selectors.sections)?;
    if sections.is_empty() {
        return Err(MountError::MissingSelector(config.selectors.sections.clone()));
    }
    let links = query_all(document, &config.selectors.section_links)?;
    let hrefs = links.iter().map(|link| link.get_attribute("href").unwrap_or_default()).collect();
    let mut tracker = SectionTracker::new(hrefs);
    let active_class = config.classes.active.clone();
    sync_markers(&links, &tracker, &active_class);

    observe(Some(&config.section_root_margin), 0.0, &sections, move |entries| {
        let ids: Vec<(String, bool)> = entries.iter().map(|e| (e.target().id(), e.is_intersecting())).collect();
        let changed = tracker.on_intersections(ids.iter().map(|(id, intersecting)| SectionEntry {
            id,
            intersecting: *intersecting,
        }));
        if changed {
            sync_markers(&links, &tracker, &active_class);
        }
    })?;
    Ok(sections.len())
}

fn sync_markers(links: &[Element], tracker: &SectionTracker, active_class: &str) {
    for (link, marked) in links.iter().zip(tracker.markers()) {
        set_class(link, active_class, marked);
    }
}

/// Hide content blocks until they first scroll into view.
///
/// # Errors
///
/// Returns `Js` if the selector is invalid or the observer cannot be created.
pub fn mount_reveal(document: &Document, config: &SiteConfig) -> Result<usize, MountError> {
    let targets = query_all(document, &config.selectors.reveal_targets)?;
    let mut states = vec![RevealState::default(); targets.len()];
    let observed = targets.clone();
    observe(None, config.reveal_threshold, &targets, move |entries| {
        for entry in entries {
            let target = entry.target();
            let Some(i) = observed.iter().position(|el| *el == target) else {
                continue;
            };
            if states[i].on_intersection(entry.is_intersecting()) {
                apply(&target, states[i].style());
            }
        }
    })?;

    // Hidden only once the observer exists; a failed observer leaves content visible.
    for target in &targets {
        apply(target, RevealState::default().style());
        set_style(target, "transition", TRANSITION);
    }
    Ok(targets.len())
}

fn apply(element: &Element, style: RevealStyle) {
    set_style(element, "opacity", style.opacity);
    set_style(element, "transform", style.transform);
}
