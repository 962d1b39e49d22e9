//! Active-section tracking for the sidebar navigation.
//!
//! The browser shell observes every section with an intersection observer
//! and forwards each batch of entries here. The tracker picks the entry to
//! mark active; the shell then sets the marker on exactly that link.
//!
//! TRADE-OFFS
//! ==========
//! When a batch reports several sections intersecting (fast scrolling), the
//! last one in the batch wins. There is no nearest-section tie-break.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// One observer entry: the section's id and whether it entered the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry<'a> {
    pub id: &'a str,
    pub intersecting: bool,
}

/// Which navigation link is marked active.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    link_hrefs: Vec<String>,
    active_link: Option<usize>,
}

impl SectionTracker {
    /// Track the given navigation links, by their raw `href` values.
    #[must_use]
    pub fn new(link_hrefs: Vec<String>) -> Self {
        Self { link_hrefs, active_link: None }
    }

    /// Index of the link currently marked active.
    #[must_use]
    pub fn active_link(&self) -> Option<usize> {
        self.active_link
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.link_hrefs.len()
    }

    /// Marker state for every link, in link order. At most one is `true`.
    /// A fresh tracker reports all `false`, which clears markers the page
    /// shipped with.
    pub fn markers(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.link_hrefs.len()).map(|i| self.active_link == Some(i))
    }

    /// Apply a batch of observer entries in reported order. Each
    /// intersecting entry clears the marker and moves it to the first link
    /// targeting that section; a section with no link leaves none marked.
    /// Returns whether the active link changed.
    pub fn on_intersections<'a>(&mut self, entries: impl IntoIterator<Item = SectionEntry<'a>>) -> bool {
        let before = self.active_link;
        for entry in entries.into_iter().filter(|e| e.intersecting) {
            self.active_link = self.link_for(entry.id);
        }
        before != self.active_link
    }

    fn link_for(&self, section_id: &str) -> Option<usize> {
        self.link_hrefs
            .iter()
            .position(|href| href.strip_prefix('#') == Some(section_id))
    }
}
