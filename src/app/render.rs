use super::*;
use crate::view::grid::{self, Cell, StatusLine};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

impl Editor {
    /// Render the editor to the terminal
    pub fn render(&mut self, frame: &mut Frame) {
        let _span = tracing::trace_span!("render").entered();
        let size = frame.area();

        let [text_area, status_area, message_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(size);

        let (rows, cols) = (usize::from(text_area.height), usize::from(text_area.width));
        if (rows, cols) != (self.viewport.rows, self.viewport.cols) {
            self.viewport.resize(rows, cols);
        }
        self.viewport.scroll(&self.cursor, &self.document);

        self.render_text(frame, text_area);
        self.render_status(frame, status_area);
        self.render_message(frame, message_area);

        let (x, y) = self.viewport.cursor_screen_position(&self.cursor);
        if x < text_area.width && y < text_area.height {
            frame.set_cursor_position((text_area.x + x, text_area.y + y));
        }
    }

    fn render_text(&self, frame: &mut Frame, area: Rect) {
        let banner = self
            .config
            .editor
            .show_welcome
            .then(|| format!("texc editor -- version {}", env!("CARGO_PKG_VERSION")));
        let lines: Vec<Line> = grid::text_rows(&self.document, &self.viewport, banner.as_deref())
            .iter()
            .map(|cells| cells_to_line(cells))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let filename = self.filename.as_ref().map(|path| path.to_string_lossy());
        let status = StatusLine::new(
            filename.as_deref(),
            self.document.row_count(),
            self.document.is_dirty(),
            self.document.syntax().map(|s| s.file_type),
            self.cursor.y,
        );
        let line = status.format(usize::from(area.width));
        let style = Style::default().add_modifier(Modifier::REVERSED);
        frame.render_widget(Paragraph::new(line).style(style), area);
    }

    fn render_message(&self, frame: &mut Frame, area: Rect) {
        let cols = usize::from(area.width);
        let text = if let Some(active) = &self.prompt {
            grid::message_line(&active.prompt.display(), cols)
        } else {
            let timeout = self.config.editor.message_timeout();
            match &self.status_message {
                Some(message) if message.is_visible(Instant::now(), timeout) => {
                    grid::message_line(&message.text, cols)
                }
                _ => String::new(),
            }
        };
        frame.render_widget(Paragraph::new(text), area);
    }
}

/// Merge runs of equally styled cells into spans
fn cells_to_line(cells: &[Cell]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();

    for cell in cells {
        let style = cell.style();
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(cell.symbol);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    Line::from(spans)
}
