//! Render grid: the visible rows as (symbol, highlight) cells, plus the
//! status and message lines.
//!
//! Nothing here touches the terminal. `app::render` turns the grid into
//! ratatui widgets.

use crate::model::document::Document;
use crate::model::row::Row;
use crate::primitives::highlighter::HighlightClass;
use crate::view::viewport::Viewport;
use ratatui::style::{Color, Modifier, Style};

/// Longest file name shown on the status line
pub const STATUS_FILENAME_WIDTH: usize = 20;

/// One screen cell of the text area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub class: HighlightClass,
    /// Drawn in reverse video as a caret-style substitute
    pub control: bool,
}

impl Cell {
    fn plain(symbol: char) -> Self {
        Self {
            symbol,
            class: HighlightClass::Normal,
            control: false,
        }
    }

    fn from_byte(byte: u8, class: HighlightClass) -> Self {
        if byte.is_ascii_control() || !byte.is_ascii() {
            let symbol = if byte <= 26 { char::from(b'@' + byte) } else { '?' };
            return Self {
                symbol,
                class,
                control: true,
            };
        }
        Self {
            symbol: char::from(byte),
            class,
            control: false,
        }
    }

    pub fn style(&self) -> Style {
        if self.control {
            return Style::default().add_modifier(Modifier::REVERSED);
        }
        match highlight_color(self.class) {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        }
    }
}

/// Foreground color for a highlight class; `None` keeps the terminal default
pub fn highlight_color(class: HighlightClass) -> Option<Color> {
    match class {
        HighlightClass::Normal => None,
        HighlightClass::Number => Some(Color::Red),
        HighlightClass::Comment | HighlightClass::MultiLineComment => Some(Color::Green),
        HighlightClass::String => Some(Color::Yellow),
        HighlightClass::Match => Some(Color::Blue),
        HighlightClass::Keyword1 => Some(Color::Magenta),
        HighlightClass::Keyword2 => Some(Color::Cyan),
    }
}

/// Slice a row's render text to `[col_offset, col_offset + cols)`
pub fn row_cells(row: &Row, col_offset: usize, cols: usize) -> Vec<Cell> {
    let render = row.render();
    let highlight = row.highlight();
    let start = col_offset.min(render.len());
    let end = col_offset.saturating_add(cols).min(render.len());
    render[start..end]
        .iter()
        .zip(&highlight[start..end])
        .map(|(&byte, &class)| Cell::from_byte(byte, class))
        .collect()
}

/// Centered version banner for an empty document, with the leading `~` kept
pub fn welcome_cells(banner: &str, cols: usize) -> Vec<Cell> {
    let banner: String = banner.chars().take(cols).collect();
    let mut padding = (cols - banner.chars().count()) / 2;
    let mut cells = Vec::with_capacity(cols);
    if padding > 0 {
        cells.push(Cell::plain('~'));
        padding -= 1;
    }
    cells.extend(std::iter::repeat_n(Cell::plain(' '), padding));
    cells.extend(banner.chars().map(Cell::plain));
    cells
}

/// Every text row of the screen, top to bottom
pub fn text_rows(document: &Document, viewport: &Viewport, banner: Option<&str>) -> Vec<Vec<Cell>> {
    let welcome_row = viewport.rows / 3;
    (0..viewport.rows)
        .map(|y| {
            let file_row = y + viewport.row_offset;
            match document.row(file_row) {
                Some(row) => row_cells(row, viewport.col_offset, viewport.cols),
                None => match banner {
                    Some(banner) if document.is_empty() && y == welcome_row => {
                        welcome_cells(banner, viewport.cols)
                    }
                    _ => vec![Cell::plain('~')],
                },
            }
        })
        .collect()
}

/// Reverse-video line between the text area and the message line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub left: String,
    pub right: String,
}

impl StatusLine {
    pub fn new(
        filename: Option<&str>,
        row_count: usize,
        modified: bool,
        file_type: Option<&str>,
        cursor_row: usize,
    ) -> Self {
        let name: String = match filename {
            Some(name) => name.chars().take(STATUS_FILENAME_WIDTH).collect(),
            None => "[No Name]".to_string(),
        };
        let left = format!(
            "{} - {} lines{}",
            name,
            row_count,
            if modified { " (modified)" } else { "" }
        );
        let right = format!(
            "{} | {}/{}",
            file_type.unwrap_or("no ft"),
            cursor_row + 1,
            row_count
        );
        Self { left, right }
    }

    /// Exactly `cols` characters: left part, padding, and the right part
    /// when it fits flush against the right edge
    pub fn format(&self, cols: usize) -> String {
        let left: String = self.left.chars().take(cols).collect();
        let used = left.chars().count();
        let right_len = self.right.chars().count();
        let mut line = left;
        if used + right_len <= cols {
            line.extend(std::iter::repeat_n(' ', cols - used - right_len));
            line.push_str(&self.right);
        } else {
            line.extend(std::iter::repeat_n(' ', cols - used));
        }
        line
    }
}

/// Message line text truncated to the screen width
pub fn message_line(text: &str, cols: usize) -> String {
    text.chars().take(cols).collect()
}
