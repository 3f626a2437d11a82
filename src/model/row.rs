use crate::primitives::coords::{self, expand_tabs};
use crate::primitives::highlighter::{classify, HighlightClass};
use crate::primitives::syntax::SyntaxDefinition;

/// One line of text plus its derived render and highlight forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Position within the document
    pub(crate) index: usize,
    /// Editable bytes, without a line terminator
    pub(crate) raw: Vec<u8>,
    /// `raw` with tabs expanded
    pub(crate) render: Vec<u8>,
    /// One class per byte of `render`
    pub(crate) highlight: Vec<HighlightClass>,
    /// Whether the row ends inside an unterminated block comment
    pub(crate) open_comment: bool,
}

impl Row {
    /// Create an underived row. Callers must run [`Row::update_render`] and
    /// [`Row::update_highlight`] before exposing it.
    pub(crate) fn new(index: usize, raw: Vec<u8>) -> Self {
        Self {
            index,
            raw,
            render: Vec::new(),
            highlight: Vec::new(),
            open_comment: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn highlight(&self) -> &[HighlightClass] {
        &self.highlight
    }

    pub fn open_comment(&self) -> bool {
        self.open_comment
    }

    /// Length of the raw content in bytes
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Render column for raw column `cx`
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        coords::char_to_render(&self.raw, cx)
    }

    /// Raw column for render column `rx`
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        coords::render_to_char(&self.raw, rx)
    }

    /// Re-derive the render form from `raw`
    pub(crate) fn update_render(&mut self) {
        self.render = expand_tabs(&self.raw);
    }

    /// Re-classify the render form. Returns true when the trailing comment
    /// state changed, meaning the next row needs re-classification too.
    pub(crate) fn update_highlight(
        &mut self,
        in_comment: bool,
        syntax: Option<&SyntaxDefinition>,
    ) -> bool {
        let result = classify(&self.render, in_comment, syntax);
        self.highlight = result.highlight;
        let changed = self.open_comment != result.open_comment;
        self.open_comment = result.open_comment;
        changed
    }

    /// Overwrite `len` highlight cells starting at render column `start`,
    /// clamped to the row
    pub(crate) fn mark(&mut self, start: usize, len: usize, class: HighlightClass) {
        let end = start.saturating_add(len).min(self.highlight.len());
        if start < end {
            self.highlight[start..end].fill(class);
        }
    }

    /// Replace the highlight array with a snapshot of the same length
    pub(crate) fn restore_highlight(&mut self, snapshot: Vec<HighlightClass>) {
        if snapshot.len() == self.render.len() {
            self.highlight = snapshot;
        }
    }

    /// Byte offset of the first occurrence of `needle` in the render form
    pub fn find_in_render(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() || needle.len() > self.render.len() {
            return None;
        }
        self.render
            .windows(needle.len())
            .position(|window| window == needle)
    }

    /// Raw content as text, replacing invalid UTF-8
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.raw).into_owned()
    }
}
