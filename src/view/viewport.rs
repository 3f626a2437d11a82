use crate::model::cursor::Cursor;
use crate::model::document::Document;

/// The viewport - what portion of the document is visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row
    pub row_offset: usize,

    /// First visible render column (horizontal scroll position)
    pub col_offset: usize,

    /// Text area dimensions, excluding the status and message lines
    pub rows: usize,
    pub cols: usize,

    /// Render column of the cursor, refreshed by [`Viewport::scroll`]
    pub render_x: usize,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Update text area dimensions
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Scroll just enough to keep the cursor inside the visible window
    pub fn scroll(&mut self, cursor: &Cursor, document: &Document) {
        self.render_x = document
            .row(cursor.y)
            .map_or(0, |row| row.cx_to_rx(cursor.x));

        if cursor.y < self.row_offset {
            self.row_offset = cursor.y;
        }
        if cursor.y >= self.row_offset + self.rows {
            self.row_offset = (cursor.y + 1).saturating_sub(self.rows);
        }
        if self.render_x < self.col_offset {
            self.col_offset = self.render_x;
        }
        if self.render_x >= self.col_offset + self.cols {
            self.col_offset = (self.render_x + 1).saturating_sub(self.cols);
        }
    }

    /// Whether document row `y` falls inside the visible window
    pub fn is_row_visible(&self, y: usize) -> bool {
        y >= self.row_offset && y < self.row_offset + self.rows
    }

    /// Get the cursor screen position (x, y) relative to the text area.
    /// Only meaningful after [`Viewport::scroll`].
    pub fn cursor_screen_position(&self, cursor: &Cursor) -> (u16, u16) {
        let x = self.render_x.saturating_sub(self.col_offset);
        let y = cursor.y.saturating_sub(self.row_offset);
        (
            u16::try_from(x).unwrap_or(u16::MAX),
            u16::try_from(y).unwrap_or(u16::MAX),
        )
    }
}
