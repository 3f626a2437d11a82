use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Modifier;
use texc::config::Config;

/// New editor shows the banner and an empty status line
#[test]
fn test_empty_editor_shows_welcome() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();

    harness.assert_buffer_content("");
    let banner = format!("texc editor -- version {}", env!("CARGO_PKG_VERSION"));
    // 22 text rows, banner on row 22 / 3
    assert!(harness.get_row_text(7).contains(&banner));
    assert!(harness.get_row_text(7).starts_with('~'));
    assert_eq!(harness.get_row_text(0).trim_end(), "~");

    let status = harness.status_bar();
    assert!(status.starts_with("[No Name] - 0 lines"));
    assert!(status.ends_with("no ft | 1/0"));
}

#[test]
fn test_welcome_can_be_disabled() {
    let mut config = Config::default();
    config.editor.show_welcome = false;
    let mut harness = EditorTestHarness::with_config(80, 24, config).unwrap();
    harness.render().unwrap();
    harness.assert_screen_not_contains("texc editor");
}

/// Typing replaces the banner with text and flags the document as modified
#[test]
fn test_basic_typing() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("Hello, World!").unwrap();

    harness.assert_buffer_content("Hello, World!");
    assert_eq!(harness.get_row_text(0).trim_end(), "Hello, World!");
    harness.assert_screen_not_contains("texc editor");
    assert!(harness.status_bar().starts_with("[No Name] - 1 lines (modified)"));
    assert_eq!(harness.screen_cursor_position(), (13, 0));
}

#[test]
fn test_typing_multiple_lines() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("one\ntwo\n\nfour").unwrap();

    harness.assert_buffer_content("one\ntwo\n\nfour");
    assert_eq!(harness.get_row_text(1).trim_end(), "two");
    assert_eq!(harness.get_row_text(2).trim_end(), "");
    assert_eq!(harness.get_row_text(4).trim_end(), "~");
    assert!(harness.status_bar().ends_with("no ft | 4/4"));
}

/// Tabs render to the next multiple of eight
#[test]
fn test_tab_expansion_on_screen() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("a").unwrap();
    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    harness.type_text("b").unwrap();

    harness.assert_buffer_content("a\tb");
    assert_eq!(harness.get_row_text(0).trim_end(), "a       b");
    assert_eq!(harness.screen_cursor_position(), (9, 0));
}

/// Control bytes are drawn as reversed caret letters
#[test]
fn test_control_characters_drawn_reversed() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.open_content("ctrl.txt", "a\u{1}b\n").unwrap();

    assert!(harness.get_row_text(0).starts_with("aAb"));
    let style = harness.get_cell_style(1, 0).unwrap();
    assert!(style.add_modifier.contains(Modifier::REVERSED));
    let style = harness.get_cell_style(0, 0).unwrap();
    assert!(!style.add_modifier.contains(Modifier::REVERSED));
}

#[test]
fn test_quit_clean_document() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.send_ctrl('q').unwrap();
    assert!(harness.should_quit());
}

/// Unsaved changes need three Ctrl-Q presses in a row
#[test]
fn test_quit_with_unsaved_changes() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("x").unwrap();

    harness.send_ctrl('q').unwrap();
    assert!(!harness.should_quit());
    assert_eq!(
        harness.message_line(),
        "WARNING!!! File has unsaved changes. Press Ctrl-Q 2 more times to quit."
    );

    harness.send_ctrl('q').unwrap();
    assert_eq!(
        harness.message_line(),
        "WARNING!!! File has unsaved changes. Press Ctrl-Q 1 more times to quit."
    );
    assert!(!harness.should_quit());

    harness.send_ctrl('q').unwrap();
    assert!(harness.should_quit());
}

#[test]
fn test_unbound_keys_are_ignored() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("ab").unwrap();
    harness.send_key(KeyCode::F(5), KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Char('z'), KeyModifiers::CONTROL).unwrap();
    harness.send_ctrl('l').unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("ab");
}

/// A new harness draws a full frame and keeps drawing after a resize
#[test]
fn test_harness_draws_frames() {
    let mut harness = EditorTestHarness::new(30, 6).unwrap();
    harness.render().unwrap();
    assert!(harness.status_bar().starts_with("[No Name] - 0 lines"));

    harness.resize(40, 8).unwrap();
    assert_eq!(harness.buffer().area.width, 40);
    assert!(harness.status_bar().starts_with("[No Name] - 0 lines"));
}
