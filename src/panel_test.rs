use super::*;

fn sidebar() -> PanelController {
    PanelController::new(PanelKind::Sidebar, 1024.0)
}

fn menu() -> PanelController {
    PanelController::new(PanelKind::MobileMenu, 1024.0)
}

fn assert_fully_closed(panel: &PanelController) {
    assert!(!panel.is_open());
    match panel.kind() {
        PanelKind::Sidebar => assert_eq!(panel.body_overflow(), Some("")),
        PanelKind::MobileMenu => {
            let bars = panel.bar_styles().expect("menu has bars");
            assert!(bars.iter().all(|b| b.transform == "none" && b.opacity == "1"));
        }
    }
}

// =============================================================
// Basic transitions
// =============================================================

#[test]
fn starts_closed() {
    assert_fully_closed(&sidebar());
    assert_fully_closed(&menu());
}

#[test]
fn open_reports_change_once() {
    let mut panel = sidebar();
    assert!(panel.open());
    assert!(!panel.open());
    assert!(panel.is_open());
}

#[test]
fn close_when_already_closed_is_noop() {
    let mut panel = sidebar();
    assert!(!panel.close());
    assert_fully_closed(&panel);
}

#[test]
fn close_triggers_on_fresh_panel_report_no_change() {
    for mut panel in [sidebar(), menu()] {
        assert!(!panel.on_escape());
        assert!(!panel.on_document_click(ClickOrigin::Outside));
        assert!(!panel.on_link_click(320.0));
        assert!(!panel.close());
    }
}

#[test]
fn toggle_flips_state() {
    let mut panel = menu();
    panel.toggle();
    assert!(panel.is_open());
    panel.toggle();
    assert_fully_closed(&panel);
}

// =============================================================
// Close triggers
// =============================================================

#[test]
fn escape_closes_both_panels() {
    for mut panel in [sidebar(), menu()] {
        panel.open();
        assert!(panel.on_escape());
        assert_fully_closed(&panel);
    }
}

#[test]
fn outside_click_closes() {
    for mut panel in [sidebar(), menu()] {
        panel.open();
        assert!(panel.on_document_click(ClickOrigin::Outside));
        assert_fully_closed(&panel);
    }
}

#[test]
fn click_inside_panel_keeps_it_open() {
    let mut panel = sidebar();
    panel.open();
    assert!(!panel.on_document_click(ClickOrigin::InsidePanel));
    assert!(panel.is_open());
}

#[test]
fn click_on_own_toggle_does_not_self_close() {
    let mut panel = sidebar();
    panel.open();
    assert!(!panel.on_document_click(ClickOrigin::OnToggle));
    assert!(panel.is_open());
}

#[test]
fn mobile_link_click_always_closes() {
    let mut panel = menu();
    panel.open();
    assert!(panel.on_link_click(1920.0));
    assert_fully_closed(&panel);
}

#[test]
fn sidebar_link_click_closes_at_breakpoint() {
    let mut panel = sidebar();
    panel.open();
    assert!(panel.on_link_click(1024.0));
    assert_fully_closed(&panel);
}

#[test]
fn sidebar_link_click_keeps_open_on_wide_viewport() {
    let mut panel = sidebar();
    panel.open();
    assert!(!panel.on_link_click(1025.0));
    assert!(panel.is_open());
}

// =============================================================
// Side effects
// =============================================================

#[test]
fn open_sidebar_locks_body_scroll() {
    let mut panel = sidebar();
    panel.open();
    assert_eq!(panel.body_overflow(), Some("hidden"));
    assert_eq!(panel.bar_styles(), None);
}

#[test]
fn open_menu_forms_an_x() {
    let mut panel = menu();
    panel.open();
    let bars = panel.bar_styles().expect("menu has bars");
    assert_eq!(bars[0].transform, "rotate(45deg) translate(5px, 5px)");
    assert_eq!(bars[1].opacity, "0");
    assert_eq!(bars[2].transform, "rotate(-45deg) translate(5px, -5px)");
    assert_eq!(panel.body_overflow(), None);
}
