use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn harness_with(content: &str) -> EditorTestHarness {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.open_content("move.txt", content).unwrap();
    harness
}

#[test]
fn test_arrow_keys_wrap_between_lines() {
    let mut harness = harness_with("ab\ncd\n");

    harness
        .send_key_repeat(KeyCode::Right, KeyModifiers::NONE, 3)
        .unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 1));

    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (2, 0));
}

#[test]
fn test_vertical_movement_clamps_to_line_length() {
    let mut harness = harness_with("a long line\nab\n");
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (11, 0));

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (2, 1));

    // One past the last row is reachable
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 2));
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 2));
    assert!(harness.status_bar().ends_with("no ft | 3/2"));
}

#[test]
fn test_cursor_moves_through_tabs_in_render_columns() {
    let mut harness = harness_with("\t\tx\n");
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (8, 0));
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (16, 0));
    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 0));
}

#[test]
fn test_backspace_and_delete() {
    let mut harness = harness_with("abc\ndef\n");

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("abcdef");
    assert_eq!(harness.screen_cursor_position(), (3, 0));

    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("abcef");

    harness.send_key(KeyCode::Char('h'), KeyModifiers::CONTROL).unwrap();
    harness.assert_buffer_content("abef");
    assert_eq!(harness.screen_cursor_position(), (2, 0));
}

#[test]
fn test_enter_splits_line() {
    let mut harness = harness_with("hello world\n");
    harness
        .send_key_repeat(KeyCode::Right, KeyModifiers::NONE, 5)
        .unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("hello\n world");
    assert_eq!(harness.screen_cursor_position(), (0, 1));
    assert!(harness.status_bar().contains(" - 2 lines (modified)"));
}
