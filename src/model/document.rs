//! Row store for the text being edited
//!
//! Every mutation re-derives the rows it touched (render form, then
//! highlight) before returning, and re-classifies following rows for as long
//! as the block comment state keeps changing. Out-of-range indices are
//! clamped or ignored; no operation here fails.

use super::row::Row;
use crate::primitives::highlighter::HighlightClass;
use crate::primitives::syntax::SyntaxDefinition;

/// Ordered collection of rows plus the modification counter
#[derive(Debug, Clone, Default)]
pub struct Document {
    rows: Vec<Row>,
    /// Bumped on every content mutation, reset by [`Document::mark_saved`]
    dirty: u64,
    syntax: Option<&'static SyntaxDefinition>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from raw lines. The result is not dirty.
    pub fn from_lines<I, L>(lines: I, syntax: Option<&'static SyntaxDefinition>) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut doc = Self {
            rows: Vec::new(),
            dirty: 0,
            syntax,
        };
        for line in lines {
            doc.insert_row(doc.rows.len(), line.as_ref());
        }
        doc.dirty = 0;
        tracing::debug!("Loaded document with {} rows", doc.rows.len());
        doc
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Modification counter
    pub fn dirty(&self) -> u64 {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Record a successful save
    pub fn mark_saved(&mut self) {
        self.dirty = 0;
    }

    pub fn syntax(&self) -> Option<&'static SyntaxDefinition> {
        self.syntax
    }

    /// Switch the active syntax definition and re-classify every row
    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxDefinition>) {
        self.syntax = syntax;
        let mut in_comment = false;
        for row in &mut self.rows {
            row.update_highlight(in_comment, syntax);
            in_comment = row.open_comment;
        }
    }

    /// Insert a new row at `at` (`0..=row_count`), shifting later rows down
    pub fn insert_row(&mut self, at: usize, text: &[u8]) {
        if at > self.rows.len() {
            return;
        }
        let incoming = self.incoming_state(at);
        let mut row = Row::new(at, text.to_vec());
        // The successor used to receive `incoming`; starting from it makes the
        // change check below mean "the successor's input changed".
        row.open_comment = incoming;
        self.rows.insert(at, row);
        for row in &mut self.rows[at + 1..] {
            row.index += 1;
        }
        self.update_row(at);
        self.dirty += 1;
    }

    /// Remove row `at`, shifting later rows up
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        let removed = self.rows.remove(at);
        for row in &mut self.rows[at..] {
            row.index -= 1;
        }
        if at < self.rows.len() && removed.open_comment != self.incoming_state(at) {
            self.rehighlight_from(at);
        }
        self.dirty += 1;
    }

    /// Insert one byte into row `row` at `at`, clamped to the row length
    pub fn insert_char(&mut self, row: usize, at: usize, ch: u8) {
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        let at = at.min(target.raw.len());
        target.raw.insert(at, ch);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Remove the byte at `at` from row `row`
    pub fn delete_char(&mut self, row: usize, at: usize) {
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        if at >= target.raw.len() {
            return;
        }
        target.raw.remove(at);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Append `text` to the end of row `row`
    pub fn append_text(&mut self, row: usize, text: &[u8]) {
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        target.raw.extend_from_slice(text);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Split row `row` at byte `at`: the suffix becomes a new row right after it
    pub fn split_row(&mut self, row: usize, at: usize) {
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        let at = at.min(target.raw.len());
        let suffix = target.raw.split_off(at);
        self.update_row(row);
        self.insert_row(row + 1, &suffix);
    }

    /// Merge row `row` into its predecessor
    pub fn join_with_previous(&mut self, row: usize) {
        if row == 0 || row >= self.rows.len() {
            return;
        }
        let text = self.rows[row].raw.clone();
        self.append_text(row - 1, &text);
        self.delete_row(row);
    }

    /// Every row's raw content followed by a newline
    pub fn serialize(&self) -> Vec<u8> {
        let len = self.rows.iter().map(|row| row.raw.len() + 1).sum();
        let mut out = Vec::with_capacity(len);
        for row in &self.rows {
            out.extend_from_slice(&row.raw);
            out.push(b'\n');
        }
        out
    }

    /// Mutable highlight access for transient overlays such as search matches.
    /// The overlay is undone with [`Document::restore_highlight`].
    pub(crate) fn mark_highlight(
        &mut self,
        row: usize,
        start: usize,
        len: usize,
        class: HighlightClass,
    ) {
        if let Some(target) = self.rows.get_mut(row) {
            target.mark(start, len, class);
        }
    }

    pub(crate) fn restore_highlight(&mut self, row: usize, snapshot: Vec<HighlightClass>) {
        if let Some(target) = self.rows.get_mut(row) {
            target.restore_highlight(snapshot);
        }
    }

    /// Trailing comment state flowing into row `at`
    fn incoming_state(&self, at: usize) -> bool {
        at > 0 && self.rows.get(at - 1).is_some_and(|row| row.open_comment)
    }

    /// Re-derive one row after its raw content changed
    fn update_row(&mut self, at: usize) {
        if let Some(row) = self.rows.get_mut(at) {
            row.update_render();
            self.rehighlight_from(at);
        }
    }

    /// Re-classify row `start`, then keep going down while the trailing
    /// comment state changes. Bounded by the row count.
    fn rehighlight_from(&mut self, start: usize) {
        let mut at = start;
        while at < self.rows.len() {
            let incoming = self.incoming_state(at);
            let changed = self.rows[at].update_highlight(incoming, self.syntax);
            if !changed {
                break;
            }
            at += 1;
        }
        if at > start {
            tracing::debug!("Comment state cascaded over rows {}..{}", start, at);
        }
    }
}
