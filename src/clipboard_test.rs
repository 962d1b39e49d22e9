use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;

/// Backend with scripted results that records every call.
struct MockBackend {
    primary: Result<(), ClipboardError>,
    fallback: Result<(), ClipboardError>,
    primary_calls: Cell<u32>,
    fallback_calls: Cell<u32>,
    copied: RefCell<Vec<String>>,
}

impl MockBackend {
    fn new(primary: Result<(), ClipboardError>, fallback: Result<(), ClipboardError>) -> Self {
        Self {
            primary,
            fallback,
            primary_calls: Cell::new(0),
            fallback_calls: Cell::new(0),
            copied: RefCell::new(Vec::new()),
        }
    }
}

impl ClipboardBackend for MockBackend {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        self.primary_calls.set(self.primary_calls.get() + 1);
        if self.primary.is_ok() {
            self.copied.borrow_mut().push(text.to_owned());
        }
        std::future::ready(self.primary.clone())
    }

    fn legacy_copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.fallback_calls.set(self.fallback_calls.get() + 1);
        if self.fallback.is_ok() {
            self.copied.borrow_mut().push(text.to_owned());
        }
        self.fallback.clone()
    }
}

// =============================================================
// copy_text
// =============================================================

#[test]
fn primary_success_skips_fallback() {
    let backend = MockBackend::new(Ok(()), Ok(()));
    let path = block_on(copy_text(&backend, "hello")).expect("copy succeeds");
    assert_eq!(path, CopyPath::Primary);
    assert_eq!(backend.primary_calls.get(), 1);
    assert_eq!(backend.fallback_calls.get(), 0);
    assert_eq!(backend.copied.borrow().as_slice(), ["hello"]);
}

#[test]
fn rejected_primary_triggers_fallback_exactly_once() {
    let backend = MockBackend::new(Err(ClipboardError::Rejected("NotAllowedError".to_owned())), Ok(()));
    let path = block_on(copy_text(&backend, "hello")).expect("fallback succeeds");
    assert_eq!(path, CopyPath::Fallback);
    assert_eq!(backend.primary_calls.get(), 1);
    assert_eq!(backend.fallback_calls.get(), 1);
    assert_eq!(backend.copied.borrow().as_slice(), ["hello"]);
}

#[test]
fn unavailable_primary_triggers_fallback() {
    let backend = MockBackend::new(Err(ClipboardError::Unavailable), Ok(()));
    assert_eq!(block_on(copy_text(&backend, "x")), Ok(CopyPath::Fallback));
}

#[test]
fn both_paths_failing_returns_fallback_error() {
    let backend = MockBackend::new(
        Err(ClipboardError::Unavailable),
        Err(ClipboardError::FallbackFailed("execCommand refused".to_owned())),
    );
    let err = block_on(copy_text(&backend, "hello")).expect_err("both fail");
    assert_eq!(err, ClipboardError::FallbackFailed("execCommand refused".to_owned()));
    assert_eq!(backend.primary_calls.get(), 1);
    assert_eq!(backend.fallback_calls.get(), 1);
    assert!(backend.copied.borrow().is_empty());
}

// =============================================================
// CopyFeedback
// =============================================================

#[test]
fn confirm_then_restore_returns_original() {
    let mut feedback = CopyFeedback::new();
    let shown = feedback.confirm("<svg/> Copy", "Copied!");
    assert!(shown.contains("Copied!"));
    assert!(shown.contains("polyline"));
    assert!(feedback.is_confirming());

    assert_eq!(feedback.restore().as_deref(), Some("<svg/> Copy"));
    assert!(!feedback.is_confirming());
}

#[test]
fn restore_without_confirmation_is_none() {
    let mut feedback = CopyFeedback::new();
    assert_eq!(feedback.restore(), None);
}

#[test]
fn overlapping_confirmations_keep_first_original() {
    let mut feedback = CopyFeedback::new();
    let shown = feedback.confirm("Copy", "Copied!");
    // Second click while the confirmation is on screen.
    feedback.confirm(&shown, "Copied!");

    assert_eq!(feedback.restore().as_deref(), Some("Copy"));
    assert!(feedback.is_confirming());
    assert_eq!(feedback.restore().as_deref(), Some("Copy"));
    assert!(!feedback.is_confirming());
    assert_eq!(feedback.restore(), None);
}

#[test]
fn confirmation_label_is_escaped() {
    let html = confirmation_html("<b>&done</b>");
    assert!(html.ends_with("&lt;b&gt;&amp;done&lt;/b&gt;"));
}

#[test]
fn confirmation_keeps_non_ascii_label() {
    assert!(confirmation_html("تم النسخ!").ends_with("تم النسخ!"));
}
