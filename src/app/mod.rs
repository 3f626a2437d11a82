mod input;
mod prompt_actions;
mod render;
pub mod search;
pub mod types;

use crate::config::Config;
use crate::input::key_translator;
use crate::input::keys::Key;
use crate::model::cursor::Cursor;
use crate::model::document::Document;
use crate::model::filesystem::FileSystem;
use crate::primitives::syntax;
use crate::view::prompt::Prompt;
use crate::view::viewport::Viewport;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use types::{ActivePrompt, StatusMessage};

/// Lines below the text area: status line and message line
const CHROME_ROWS: u16 = 2;

/// The editor context: the one document, its cursor and viewport, and the
/// state of the status and prompt lines
pub struct Editor {
    document: Document,

    /// Cursor in raw byte coordinates; `y` may be `row_count` (the line after the last row)
    cursor: Cursor,

    viewport: Viewport,

    /// File the document is saved to, once known
    filename: Option<PathBuf>,

    status_message: Option<StatusMessage>,

    /// Open prompt on the message line, if any
    prompt: Option<ActivePrompt>,

    /// Ctrl-Q presses still needed before quitting with unsaved changes
    quit_times_left: u32,

    should_quit: bool,

    config: Config,

    filesystem: Box<dyn FileSystem>,
}

impl Editor {
    /// Create an editor with an empty, unnamed document for a terminal of
    /// `width` x `height` cells
    pub fn new(config: Config, width: u16, height: u16, filesystem: Box<dyn FileSystem>) -> Self {
        let (rows, cols) = text_area_size(width, height);
        Self {
            document: Document::new(),
            cursor: Cursor::default(),
            viewport: Viewport::new(rows, cols),
            filename: None,
            status_message: None,
            prompt: None,
            quit_times_left: config.editor.quit_times,
            should_quit: false,
            config,
            filesystem,
        }
    }

    /// Load `path` into the editor, replacing the current document.
    ///
    /// A file that does not exist yet opens as an empty document under that
    /// name; it is created on first save.
    pub fn open_file(&mut self, path: &Path) -> io::Result<()> {
        let syntax = syntax::select_for_path(path);
        let lines = match self.filesystem.read_lines(path) {
            Ok(lines) => lines,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("{} does not exist yet, starting empty", path.display());
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                return Err(e);
            }
        };

        tracing::info!(
            "Opened {} ({} lines, filetype {})",
            path.display(),
            lines.len(),
            syntax.map_or("none", |s| s.file_type)
        );
        self.document = Document::from_lines(lines, syntax);
        self.filename = Some(path.to_path_buf());
        self.cursor = Cursor::default();
        self.viewport.row_offset = 0;
        self.viewport.col_offset = 0;
        self.viewport.scroll(&self.cursor, &self.document);
        Ok(())
    }

    /// Track a terminal resize
    pub fn resize(&mut self, width: u16, height: u16) {
        let (rows, cols) = text_area_size(width, height);
        self.viewport.resize(rows, cols);
        self.viewport.scroll(&self.cursor, &self.document);
    }

    /// Handle a key event from the terminal.
    /// This is the central key handling entry used by both main.rs and tests.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        tracing::trace!("Editor.handle_key: code={:?}, modifiers={:?}", code, modifiers);
        if let Some(key) = key_translator::translate_code(code, modifiers) {
            self.process_key(key);
        }
    }

    /// Handle a raw terminal key event; releases are ignored
    pub fn handle_key_event(&mut self, event: KeyEvent) {
        if let Some(key) = key_translator::translate(event) {
            self.process_key(key);
        }
    }

    /// Apply one logical key to the prompt, if open, or to the document
    pub fn process_key(&mut self, key: Key) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
        } else {
            self.handle_normal_key(key);
        }
        self.viewport.scroll(&self.cursor, &self.document);
    }

    /// Check if the editor should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Show `message` on the message line for the configured timeout
    pub fn set_status_message(&mut self, message: String) {
        tracing::debug!("Status: {}", message);
        self.status_message = Some(StatusMessage::new(message, Instant::now()));
    }

    /// The last status message, whether or not it has expired
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_ref().map(|m| m.text.as_str())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref().map(|active| &active.prompt)
    }

    pub fn is_prompting(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Text area rows and columns for a terminal of the given size
fn text_area_size(width: u16, height: u16) -> (usize, usize) {
    (
        usize::from(height.saturating_sub(CHROME_ROWS)),
        usize::from(width),
    )
}
