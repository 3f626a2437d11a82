use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

const C_SOURCE: &str = "int main() {\n  /* comment\n  still */ return 0;\n  char *s = \"hi\"; // done\n}\n";

#[test]
fn test_c_file_colors() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.open_content("main.c", C_SOURCE).unwrap();
    assert!(harness.status_bar().ends_with("c | 1/5"));

    // Secondary keyword
    assert_eq!(harness.get_cell_fg(0, 0), Some(Color::Cyan));
    assert_eq!(harness.get_cell_fg(4, 0), Some(Color::Reset));

    // Block comment spanning two rows
    assert_eq!(harness.get_cell_fg(2, 1), Some(Color::Green));
    assert_eq!(harness.get_cell_fg(2, 2), Some(Color::Green));
    assert_eq!(harness.get_cell_fg(9, 2), Some(Color::Green));

    // Keyword and number after the comment closes
    assert_eq!(harness.get_cell_fg(11, 2), Some(Color::Magenta));
    assert_eq!(harness.get_cell_fg(18, 2), Some(Color::Red));

    // String and line comment
    assert_eq!(harness.get_cell_fg(12, 3), Some(Color::Yellow));
    assert_eq!(harness.get_cell_fg(13, 3), Some(Color::Yellow));
    assert_eq!(harness.get_cell_fg(19, 3), Some(Color::Green));
    assert_eq!(harness.get_cell_fg(23, 3), Some(Color::Green));
}

/// Opening a block comment recolors the rows below it, closing it restores them
#[test]
fn test_comment_cascade_while_typing() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.open_content("cascade.c", "x\nint a;\nint b;\n").unwrap();
    assert_eq!(harness.get_cell_fg(0, 1), Some(Color::Cyan));
    assert_eq!(harness.get_cell_fg(0, 2), Some(Color::Cyan));

    harness.type_text("/*").unwrap();
    assert_eq!(harness.get_cell_fg(0, 1), Some(Color::Green));
    assert_eq!(harness.get_cell_fg(0, 2), Some(Color::Green));
    assert!(harness.editor().document().row(2).unwrap().open_comment());

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness.type_text("*/").unwrap();
    assert_eq!(harness.get_cell_fg(0, 2), Some(Color::Cyan));
    assert!(!harness.editor().document().row(2).unwrap().open_comment());

    harness
        .send_key_repeat(KeyCode::Backspace, KeyModifiers::NONE, 2)
        .unwrap();
    assert_eq!(harness.get_cell_fg(0, 2), Some(Color::Green));
}

/// Removing the opener and joining the rows leaves plain code behind
#[test]
fn test_comment_cascade_on_row_join() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.open_content("join.c", "/*\nint a;\n").unwrap();
    assert_eq!(harness.get_cell_fg(0, 1), Some(Color::Green));

    // Empty the first row, then join the second onto it
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness
        .send_key_repeat(KeyCode::Backspace, KeyModifiers::NONE, 2)
        .unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();

    harness.assert_buffer_content("int a;");
    assert_eq!(harness.get_cell_fg(0, 0), Some(Color::Cyan));
}

#[test]
fn test_keyword_needs_separator_after() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.open_content("kw.c", "integer int\n").unwrap();
    assert_eq!(harness.get_cell_fg(0, 0), Some(Color::Reset));
    assert_eq!(harness.get_cell_fg(8, 0), Some(Color::Cyan));
}

#[test]
fn test_python_file_colors() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .open_content("script.py", "def f():\n    return 'x' # note\n")
        .unwrap();
    assert!(harness.status_bar().ends_with("python | 1/2"));
    assert_eq!(harness.get_cell_fg(0, 0), Some(Color::Magenta));
    assert_eq!(harness.get_cell_fg(4, 1), Some(Color::Magenta));
    assert_eq!(harness.get_cell_fg(11, 1), Some(Color::Yellow));
    assert_eq!(harness.get_cell_fg(15, 1), Some(Color::Green));
}

#[test]
fn test_plain_text_has_no_colors() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .open_content("notes.txt", "int x = 42; // \"str\"\n")
        .unwrap();
    assert!(harness.status_bar().ends_with("no ft | 1/1"));
    for x in 0..20 {
        assert_eq!(harness.get_cell_fg(x, 0), Some(Color::Reset));
    }
}
