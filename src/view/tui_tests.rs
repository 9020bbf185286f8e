//! TuiApp tests against the ratatui TestBackend.

use super::*;
use crate::model::GroupTitle;
use crate::test_harness::{app_state_by_age, AcceptanceTestHarness};
use crate::view_state::{FlatIndex, Offset, ScrollPosition};
use ratatui::backend::TestBackend;

fn title(raw: &str) -> GroupTitle {
    GroupTitle::new(raw).expect("valid title")
}

/// Today: 3, Yesterday: 2, Last Week: 4, on a 40x6 terminal (5 list lines).
fn harness() -> AcceptanceTestHarness {
    AcceptanceTestHarness::with_size(app_state_by_age(&[(0, 3), (1, 2), (3, 4)]), 40, 6)
}

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

// ===== Rendering =====

#[test]
fn renders_collapsed_groups_and_status_bar() {
    let mut h = harness();
    assert_eq!(
        h.render_to_string(),
        "▸ [ ] Today (3 items)\n▸ [ ] Yesterday (2 items)\n▸ [ ] Last Week (4 items)\n\n\n 9 transcripts"
    );
}

#[test]
fn viewport_excludes_status_bar() {
    let h = harness();
    assert_eq!(h.state().list().viewport(), ViewportDimensions::new(40, 5));
}

#[test]
fn terminal_with_room_for_status_bar_only_renders() {
    let mut h = AcceptanceTestHarness::with_size(app_state_by_age(&[(0, 3)]), 40, 1);
    assert_eq!(h.render_to_string(), " 3 transcripts");
}

// ===== Keyboard =====

#[test]
fn q_quits() {
    let mut h = harness();
    assert!(h.send_key(KeyCode::Char('q')));
    assert!(!h.is_running());
}

#[test]
fn ctrl_c_quits() {
    let mut h = harness();
    assert!(h.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
}

#[test]
fn unbound_key_is_ignored() {
    let mut h = harness();
    assert!(!h.send_key(KeyCode::Char('x')));
    assert!(h.is_running());
}

#[test]
fn key_release_is_ignored() {
    let terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
    let mut app = TuiApp::new_for_test(terminal, app_state_by_age(&[(0, 1)]), KeyBindings::default());

    let release = KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);

    assert!(!app.handle_key_test(release));
}

#[test]
fn enter_expands_focused_group() {
    let mut h = harness();
    h.send_key(KeyCode::Enter);

    let screen = h.render_to_string();

    assert!(screen.starts_with("▾ [ ] Today (3 items)\n  [ ] 12:00  1m 5s"), "got:\n{screen}");
    assert!(h.state().list().is_expanded(&title("Today")));
}

#[test]
fn space_on_row_selects_and_status_reports_it() {
    let mut h = harness();
    h.send_keys(&[KeyCode::Enter, KeyCode::Char('j'), KeyCode::Char(' ')]);

    assert_eq!(h.state().selected_count(), 1);
    let screen = h.render_to_string();
    assert!(screen.contains("  [x] 12:00"), "got:\n{screen}");
    assert!(screen.contains("1 selected"), "got:\n{screen}");
}

#[test]
fn d_deletes_focused_row() {
    let mut h = harness();
    h.send_keys(&[KeyCode::Enter, KeyCode::Down, KeyCode::Char('d')]);

    assert_eq!(h.state().record_count(), 8);
    assert!(h.render_to_string().contains("▾ [ ] Today (2 items)"));
}

#[test]
fn escape_clears_selection() {
    let mut h = harness();
    h.send_keys(&[KeyCode::Char('a'), KeyCode::Esc]);
    assert_eq!(h.state().selected_count(), 0);
}

#[test]
fn shift_g_focuses_last_item() {
    let mut h = harness();
    h.send_key_with_mods(KeyCode::Char('G'), KeyModifiers::SHIFT);
    assert_eq!(h.state().focused(), Some(FlatIndex::new(2)));
}

// ===== Mouse =====

#[test]
fn click_on_header_expands_group() {
    let mut h = harness();
    h.click_at(10, 1);

    assert!(h.state().list().is_expanded(&title("Yesterday")));
    assert_eq!(h.state().focused(), Some(FlatIndex::new(1)));
}

#[test]
fn click_on_checkbox_column_selects_group() {
    let mut h = harness();
    h.click_at(3, 2);

    assert_eq!(h.state().selected_count(), 4);
    assert!(!h.state().list().is_expanded(&title("Last Week")));
}

#[test]
fn click_on_status_bar_is_ignored() {
    let mut h = harness();
    h.click_at(3, 5);

    assert_eq!(h.state().selected_count(), 0);
    assert_eq!(h.state().list().len(), 3);
}

#[test]
fn wheel_scrolls_list() {
    let mut h = AcceptanceTestHarness::with_size(app_state_by_age(&[(0, 30)]), 40, 6);
    h.send_key(KeyCode::Enter);

    h.wheel_at(5, 1, true);

    assert_eq!(
        h.state().list().scroll(),
        ScrollPosition::AtOffset(Offset::new(3))
    );
    assert_eq!(h.state().focused(), Some(FlatIndex::new(0)));
}

#[test]
fn default_harness_leaves_one_line_for_status_bar() {
    let h = AcceptanceTestHarness::new(app_state_by_age(&[(0, 1)]));
    assert_eq!(h.state().list().viewport(), ViewportDimensions::new(80, 23));
}
