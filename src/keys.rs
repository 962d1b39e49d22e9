//! Global keyboard shortcuts.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

/// Command bound to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+K. Reserved for search; the default is suppressed.
    Search,
    /// Close every open panel.
    CloseAll,
}

/// Map a `KeyboardEvent.key` value and modifiers to a shortcut.
#[must_use]
pub fn shortcut_for(key: &str, modifiers: Modifiers) -> Option<Shortcut> {
    match key {
        "k" if modifiers.ctrl || modifiers.meta => Some(Shortcut::Search),
        "Escape" => Some(Shortcut::CloseAll),
        _ => None,
    }
}
