use super::*;

#[test]
fn hidden_initially() {
    assert!(!ScrollTopState::new(500.0).is_visible());
}

#[test]
fn boundary_at_threshold() {
    let mut state = ScrollTopState::new(500.0);
    state.on_scroll(499.0);
    assert!(!state.is_visible());
    state.on_scroll(500.0);
    assert!(!state.is_visible());
    state.on_scroll(501.0);
    assert!(state.is_visible());
}

#[test]
fn scrolling_back_up_hides() {
    let mut state = ScrollTopState::new(500.0);
    assert!(state.on_scroll(1200.0));
    assert!(state.on_scroll(0.0));
    assert!(!state.is_visible());
}

#[test]
fn repeated_events_report_no_change() {
    let mut state = ScrollTopState::new(500.0);
    assert!(state.on_scroll(800.0));
    for offset in [810.0, 900.0, 1500.0, 501.0] {
        assert!(!state.on_scroll(offset));
        assert!(state.is_visible());
    }
}
