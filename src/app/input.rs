use super::*;
use crate::input::keys::Command;

impl Editor {
    /// Dispatch a key while no prompt is open
    pub(super) fn handle_normal_key(&mut self, key: Key) {
        match key {
            Key::Command(Command::Quit) => {
                self.request_quit();
                return;
            }
            Key::Command(Command::Save) => self.save(),
            Key::Command(Command::Find) => self.start_search(),
            Key::Command(Command::Refresh) | Key::Escape => {}
            Key::Enter => self.insert_newline(),
            Key::Backspace => self.delete_char_before_cursor(),
            Key::Delete => {
                self.move_cursor(Key::Right);
                self.delete_char_before_cursor();
            }
            Key::Char(ch) => self.insert_char(ch),
            Key::Home => self.cursor.x = 0,
            Key::End => {
                if let Some(row) = self.document.row(self.cursor.y) {
                    self.cursor.x = row.len();
                }
            }
            Key::PageUp | Key::PageDown => self.page(key),
            Key::Left | Key::Right | Key::Up | Key::Down => self.move_cursor(key),
        }
        self.quit_times_left = self.config.editor.quit_times;
    }

    fn request_quit(&mut self) {
        if self.document.is_dirty() && self.quit_times_left > 0 {
            self.set_status_message(format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                self.quit_times_left
            ));
            self.quit_times_left -= 1;
            return;
        }
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    fn insert_char(&mut self, ch: u8) {
        if self.cursor.y == self.document.row_count() {
            self.document.insert_row(self.cursor.y, b"");
        }
        self.document.insert_char(self.cursor.y, self.cursor.x, ch);
        self.cursor.x += 1;
    }

    fn insert_newline(&mut self) {
        if self.cursor.x == 0 {
            self.document.insert_row(self.cursor.y, b"");
        } else {
            self.document.split_row(self.cursor.y, self.cursor.x);
        }
        self.cursor.y += 1;
        self.cursor.x = 0;
    }

    /// Backspace: delete the byte before the cursor, or join the row onto
    /// the one above when at column 0
    fn delete_char_before_cursor(&mut self) {
        if self.cursor.y >= self.document.row_count() {
            return;
        }
        if self.cursor.x == 0 && self.cursor.y == 0 {
            return;
        }

        if self.cursor.x > 0 {
            self.document.delete_char(self.cursor.y, self.cursor.x - 1);
            self.cursor.x -= 1;
        } else {
            let join_at = self
                .document
                .row(self.cursor.y - 1)
                .map_or(0, |row| row.len());
            self.document.join_with_previous(self.cursor.y);
            self.cursor.y -= 1;
            self.cursor.x = join_at;
        }
    }

    fn move_cursor(&mut self, key: Key) {
        let row_len = self.document.row(self.cursor.y).map(|row| row.len());

        match key {
            Key::Left => {
                if self.cursor.x > 0 {
                    self.cursor.x -= 1;
                } else if self.cursor.y > 0 {
                    self.cursor.y -= 1;
                    self.cursor.x = self.document.row(self.cursor.y).map_or(0, |row| row.len());
                }
            }
            Key::Right => {
                if let Some(len) = row_len {
                    if self.cursor.x < len {
                        self.cursor.x += 1;
                    } else {
                        self.cursor.y += 1;
                        self.cursor.x = 0;
                    }
                }
            }
            Key::Up => self.cursor.y = self.cursor.y.saturating_sub(1),
            Key::Down => {
                if self.cursor.y < self.document.row_count() {
                    self.cursor.y += 1;
                }
            }
            _ => {}
        }

        let len = self.document.row(self.cursor.y).map_or(0, |row| row.len());
        self.cursor.x = self.cursor.x.min(len);
    }

    /// PageUp/PageDown: jump to the top or bottom edge of the screen, then
    /// move a full screen further
    fn page(&mut self, key: Key) {
        let rows = self.viewport.rows;
        let step = if key == Key::PageUp {
            self.cursor.y = self.viewport.row_offset;
            Key::Up
        } else {
            self.cursor.y = (self.viewport.row_offset + rows)
                .saturating_sub(1)
                .min(self.document.row_count());
            Key::Down
        };
        for _ in 0..rows {
            self.move_cursor(step);
        }
    }
}
