//! Copy-to-clipboard with a legacy fallback and a timed confirmation.
//!
//! DESIGN
//! ======
//! [`copy_text`] tries the async clipboard API once and, on any failure,
//! the synchronous legacy path once. Nothing is retried. The button's
//! confirmation is tracked by [`CopyFeedback`], which remembers the content
//! from before the first pending confirmation so overlapping clicks always
//! restore the real original.
//!
//! TRADE-OFFS
//! ==========
//! Restore timers are never cancelled. A second click inside the window
//! leaves the first timer running, so the button reverts when the earliest
//! timer fires and the later one restores the same content again.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::future::Future;

use crate::consts::COPY_CONFIRM_SVG;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("fallback copy failed: {0}")]
    FallbackFailed(String),
}

/// Which path completed the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Fallback,
}

/// Platform clipboard access.
pub trait ClipboardBackend {
    /// Asynchronous system clipboard write.
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;

    /// Synchronous legacy copy (hidden text field + copy command).
    ///
    /// # Errors
    ///
    /// Returns `FallbackFailed` if the copy command is unsupported or refused.
    fn legacy_copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy `text`, falling back to the legacy path if the primary write fails.
///
/// # Errors
///
/// Returns the fallback's error when both paths fail.
pub async fn copy_text<B: ClipboardBackend>(backend: &B, text: &str) -> Result<CopyPath, ClipboardError> {
    match backend.write_text(text).await {
        Ok(()) => Ok(CopyPath::Primary),
        Err(primary) => {
            log::warn!("failed to copy: {primary}; trying fallback");
            backend.legacy_copy(text)?;
            Ok(CopyPath::Fallback)
        }
    }
}

/// Confirmation state for one copy button.
#[derive(Debug, Default, Clone)]
pub struct CopyFeedback {
    original: Option<String>,
    pending: u32,
}

impl CopyFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.pending > 0
    }

    /// Start a confirmation. `current_html` is remembered unless an earlier
    /// confirmation is still pending. Returns the content to display.
    pub fn confirm(&mut self, current_html: &str, label: &str) -> String {
        if self.original.is_none() {
            self.original = Some(current_html.to_owned());
        }
        self.pending += 1;
        confirmation_html(label)
    }

    /// A confirmation timer elapsed. Returns the content to restore, or
    /// `None` if nothing was pending.
    pub fn restore(&mut self) -> Option<String> {
        if self.pending == 0 {
            return None;
        }
        self.pending -= 1;
        if self.pending == 0 { self.original.take() } else { self.original.clone() }
    }
}

/// Checkmark glyph followed by the escaped label.
#[must_use]
pub fn confirmation_html(label: &str) -> String {
    format!("{COPY_CONFIRM_SVG} {}", escape_html(label))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
