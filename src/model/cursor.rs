/// Cursor position in raw-character space
///
/// `y` may equal the document's row count: that is the virtual empty line
/// after the last row, where typing appends a new row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Raw byte column within the row
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Cursor {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
