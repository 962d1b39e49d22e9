//! Same-page anchor navigation.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// What to do with a click on an in-page link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Leave the click to the browser.
    Default,
    /// Cancel default navigation, smooth-scroll to `target_id`, and replace
    /// the address fragment with `fragment`.
    ScrollTo { target_id: &'a str, fragment: &'a str },
}

/// The element id a same-page `href` points at. `None` for a bare `#` or a
/// link that is not a fragment.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Decide how to handle a click on a link with `href`. `target_exists`
/// reports whether an element with the given id is on the page.
pub fn on_anchor_click<'a>(href: &'a str, target_exists: impl FnOnce(&str) -> bool) -> AnchorAction<'a> {
    let Some(target_id) = fragment_target(href) else {
        return AnchorAction::Default;
    };
    if target_exists(target_id) {
        AnchorAction::ScrollTo { target_id, fragment: href }
    } else {
        AnchorAction::Default
    }
}
