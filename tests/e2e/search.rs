use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

const TEXT: &str = "first line\nfoo here\nnothing\nand foo again\n";

fn harness_with_text() -> EditorTestHarness {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.open_content("search.txt", TEXT).unwrap();
    harness
}

/// Typing a query jumps to the first match and colors it
#[test]
fn test_incremental_search_highlights_match() {
    let mut harness = harness_with_text();
    harness.send_ctrl('f').unwrap();
    assert_eq!(harness.message_line(), "Search:  (Use ESC/Arrows/Enter)");

    harness.type_text("foo").unwrap();
    assert_eq!(harness.message_line(), "Search: foo (Use ESC/Arrows/Enter)");
    assert_eq!(harness.screen_cursor_position(), (0, 1));
    assert_eq!(harness.count_search_highlights(), 3);
}

/// Arrow keys move between matches and wrap around the document
#[test]
fn test_search_next_and_previous() {
    let mut harness = harness_with_text();
    harness.send_ctrl('f').unwrap();
    harness.type_text("foo").unwrap();

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (4, 3));
    assert_eq!(harness.count_search_highlights(), 3);

    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 1));

    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (4, 3));

    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 1));
}

/// Enter keeps the cursor on the match and clears the marking
#[test]
fn test_search_confirm() {
    let mut harness = harness_with_text();
    harness.send_ctrl('f').unwrap();
    harness.type_text("again").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert!(!harness.editor().is_prompting());
    assert_eq!(harness.screen_cursor_position(), (8, 3));
    assert_eq!(harness.count_search_highlights(), 0);
    assert_eq!(harness.message_line(), "");
    harness.assert_buffer_content("first line\nfoo here\nnothing\nand foo again");
}

/// Escape puts the cursor back where the search started
#[test]
fn test_search_cancel_restores_cursor() {
    let mut harness = harness_with_text();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (7, 2));

    harness.send_ctrl('f').unwrap();
    harness.type_text("foo").unwrap();
    assert_eq!(harness.screen_cursor_position(), (0, 1));

    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (7, 2));
    assert_eq!(harness.count_search_highlights(), 0);
}

/// A query that stops matching removes the marking
#[test]
fn test_search_no_match_clears_marking() {
    let mut harness = harness_with_text();
    harness.send_ctrl('f').unwrap();
    harness.type_text("foo").unwrap();
    assert_eq!(harness.count_search_highlights(), 3);

    harness.type_text("zzz").unwrap();
    assert_eq!(harness.count_search_highlights(), 0);
    assert_eq!(harness.screen_cursor_position(), (0, 1));

    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.count_search_highlights(), 3);
}

/// Search never edits the document
#[test]
fn test_search_does_not_modify_document() {
    let mut harness = harness_with_text();
    harness.send_ctrl('f').unwrap();
    harness.type_text("o").unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.editor().document().dirty(), 0);
    assert!(!harness.status_bar().contains("(modified)"));
}

/// A match far down the file scrolls it into view
#[test]
fn test_search_scrolls_to_match() {
    let mut harness = EditorTestHarness::new(80, 12).unwrap();
    let content: String = (0..100).map(|i| format!("row {i}\n")).collect();
    harness.open_content("long.txt", &content).unwrap();

    harness.send_ctrl('f').unwrap();
    harness.type_text("row 75").unwrap();
    assert_eq!(harness.editor().cursor().y, 75);
    assert_eq!(harness.get_row_text(9).trim_end(), "row 75");
    assert_eq!(harness.count_search_highlights(), 6);
}
