//! Incremental search
//!
//! A [`SearchSession`] lives for one search prompt. Every keystroke first
//! undoes the previous match marking, then either ends the session or scans
//! for the query starting next to the last match, wrapping around the
//! document.

use crate::input::keys::Key;
use crate::model::cursor::Cursor;
use crate::model::document::Document;
use crate::primitives::highlighter::HighlightClass;
use crate::view::prompt::{PromptContext, PromptHandler};
use crate::view::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Active,
    Confirmed,
    Cancelled,
}

/// Cursor and scroll position captured when the search began
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOrigin {
    pub cursor: Cursor,
    pub row_offset: usize,
    pub col_offset: usize,
}

/// Highlight array of the matched row before the match was marked
#[derive(Debug, Clone)]
struct SavedHighlight {
    row: usize,
    highlight: Vec<HighlightClass>,
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    last_match: Option<usize>,
    direction: SearchDirection,
    saved_highlight: Option<SavedHighlight>,
    origin: SearchOrigin,
    status: SearchStatus,
}

impl SearchSession {
    pub fn new(origin: SearchOrigin) -> Self {
        Self {
            last_match: None,
            direction: SearchDirection::Forward,
            saved_highlight: None,
            origin,
            status: SearchStatus::Active,
        }
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// Put the cursor and scroll offsets back where the search began
    pub fn restore_origin(&self, cursor: &mut Cursor, viewport: &mut Viewport) {
        *cursor = self.origin.cursor;
        viewport.row_offset = self.origin.row_offset;
        viewport.col_offset = self.origin.col_offset;
    }

    /// Process one keystroke with the prompt's current query
    pub fn step(
        &mut self,
        document: &mut Document,
        cursor: &mut Cursor,
        query: &[u8],
        key: Key,
    ) -> SearchStatus {
        if let Some(saved) = self.saved_highlight.take() {
            document.restore_highlight(saved.row, saved.highlight);
        }

        match key {
            Key::Enter | Key::Escape => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
                self.status = if key == Key::Enter {
                    SearchStatus::Confirmed
                } else {
                    SearchStatus::Cancelled
                };
                return self.status;
            }
            Key::Right | Key::Down => self.direction = SearchDirection::Forward,
            Key::Left | Key::Up => self.direction = SearchDirection::Backward,
            _ => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
            }
        }
        self.status = SearchStatus::Active;

        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }
        if !query.is_empty() {
            self.scan(document, cursor, query);
        }
        self.status
    }

    /// Visit at most `row_count` rows after the last match and mark the first hit
    fn scan(&mut self, document: &mut Document, cursor: &mut Cursor, query: &[u8]) {
        let rows = document.row_count();
        let mut current = self.last_match;
        for _ in 0..rows {
            let at = self.next_row(current, rows);
            current = Some(at);

            let Some(row) = document.row(at) else {
                continue;
            };
            let Some(col) = row.find_in_render(query) else {
                continue;
            };

            self.last_match = Some(at);
            cursor.y = at;
            cursor.x = row.rx_to_cx(col);
            self.saved_highlight = Some(SavedHighlight {
                row: at,
                highlight: row.highlight().to_vec(),
            });
            document.mark_highlight(at, col, query.len(), HighlightClass::Match);
            tracing::trace!("Search match at row {} column {}", at, col);
            return;
        }
    }

    /// Row following `current` in the search direction, wrapping at both ends
    fn next_row(&self, current: Option<usize>, rows: usize) -> usize {
        match (current, self.direction) {
            (None, _) => 0,
            (Some(at), SearchDirection::Forward) => {
                if at + 1 >= rows {
                    0
                } else {
                    at + 1
                }
            }
            (Some(at), SearchDirection::Backward) => {
                if at == 0 || at > rows {
                    rows - 1
                } else {
                    at - 1
                }
            }
        }
    }
}

impl PromptHandler for SearchSession {
    fn on_key(&mut self, ctx: PromptContext<'_>, query: &str, key: Key) {
        let status = self.step(ctx.document, ctx.cursor, query.as_bytes(), key);
        if status == SearchStatus::Cancelled {
            self.restore_origin(ctx.cursor, ctx.viewport);
        }
    }
}
