use super::*;

fn tracker() -> SectionTracker {
    SectionTracker::new(vec!["#a".to_owned(), "#b".to_owned(), "#c".to_owned()])
}

fn hit(id: &str) -> SectionEntry<'_> {
    SectionEntry { id, intersecting: true }
}

fn miss(id: &str) -> SectionEntry<'_> {
    SectionEntry { id, intersecting: false }
}

#[test]
fn nothing_active_initially() {
    let tracker = tracker();
    assert_eq!(tracker.active_link(), None);
    assert_eq!(tracker.link_count(), 3);
}

#[test]
fn intersecting_section_marks_its_link() {
    let mut tracker = tracker();
    assert!(tracker.on_intersections([hit("b")]));
    assert_eq!(tracker.active_link(), Some(1));
}

#[test]
fn leaving_entries_do_not_clear_marker() {
    let mut tracker = tracker();
    tracker.on_intersections([hit("b")]);
    assert!(!tracker.on_intersections([miss("b")]));
    assert_eq!(tracker.active_link(), Some(1));
}

#[test]
fn last_intersecting_entry_in_batch_wins() {
    let mut tracker = tracker();
    tracker.on_intersections([hit("a"), hit("c"), miss("b")]);
    assert_eq!(tracker.active_link(), Some(2));
}

#[test]
fn section_without_link_clears_marker() {
    let mut tracker = tracker();
    tracker.on_intersections([hit("a")]);
    assert!(tracker.on_intersections([hit("appendix")]));
    assert_eq!(tracker.active_link(), None);
}

#[test]
fn duplicate_hrefs_mark_only_first() {
    let mut tracker = SectionTracker::new(vec!["#a".to_owned(), "#b".to_owned(), "#b".to_owned()]);
    tracker.on_intersections([hit("b")]);
    assert_eq!(tracker.active_link(), Some(1));
}

#[test]
fn href_must_match_whole_id() {
    let mut tracker = SectionTracker::new(vec!["#intro-2".to_owned(), "intro".to_owned(), "#intro".to_owned()]);
    tracker.on_intersections([hit("intro")]);
    assert_eq!(tracker.active_link(), Some(2));
}

#[test]
fn same_section_again_reports_no_change() {
    let mut tracker = tracker();
    tracker.on_intersections([hit("c")]);
    assert!(!tracker.on_intersections([hit("c")]));
}

#[test]
fn fresh_tracker_marks_no_link() {
    let tracker = tracker();
    assert_eq!(tracker.markers().collect::<Vec<_>>(), [false, false, false]);
}

#[test]
fn markers_follow_active_link() {
    let mut tracker = tracker();
    tracker.on_intersections([hit("b")]);
    assert_eq!(tracker.markers().collect::<Vec<_>>(), [false, true, false]);
    tracker.on_intersections([hit("appendix")]);
    assert!(tracker.markers().all(|marked| !marked));
}
