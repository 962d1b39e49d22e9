use super::*;

fn ctrl() -> Modifiers {
    Modifiers { ctrl: true, ..Default::default() }
}

fn meta() -> Modifiers {
    Modifiers { meta: true, ..Default::default() }
}

#[test]
fn ctrl_or_cmd_k_is_search() {
    assert_eq!(shortcut_for("k", ctrl()), Some(Shortcut::Search));
    assert_eq!(shortcut_for("k", meta()), Some(Shortcut::Search));
}

#[test]
fn plain_k_is_not_a_shortcut() {
    assert_eq!(shortcut_for("k", Modifiers::default()), None);
    assert_eq!(shortcut_for("K", ctrl()), None);
}

#[test]
fn escape_closes_regardless_of_modifiers() {
    assert_eq!(shortcut_for("Escape", Modifiers::default()), Some(Shortcut::CloseAll));
    assert_eq!(shortcut_for("Escape", ctrl()), Some(Shortcut::CloseAll));
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(shortcut_for("Enter", ctrl()), None);
}

#[test]
fn ctrl_and_cmd_together_is_still_search() {
    let both = Modifiers { ctrl: true, meta: true };
    assert_eq!(shortcut_for("k", both), Some(Shortcut::Search));
}
