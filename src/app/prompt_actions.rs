//! Prompt flows: incremental search and save-as

use super::search::{SearchOrigin, SearchSession};
use super::*;
use crate::view::prompt::{PromptContext, PromptOutcome, PromptType};

impl Editor {
    /// Open the search prompt with a fresh search session attached
    pub(super) fn start_search(&mut self) {
        let origin = SearchOrigin {
            cursor: self.cursor,
            row_offset: self.viewport.row_offset,
            col_offset: self.viewport.col_offset,
        };
        let prompt = Prompt::new("Search: ", " (Use ESC/Arrows/Enter)", PromptType::Search);
        self.prompt = Some(ActivePrompt::with_handler(
            prompt,
            Box::new(SearchSession::new(origin)),
        ));
    }

    /// Save to the known file name, or ask for one first
    pub(super) fn save(&mut self) {
        match self.filename.clone() {
            Some(path) => self.write_document(&path),
            None => {
                let prompt = Prompt::new("Save as: ", " (ESC to cancel)", PromptType::SaveFileAs);
                self.prompt = Some(ActivePrompt::new(prompt));
            }
        }
    }

    /// Feed a key to the open prompt and its handler
    pub(super) fn handle_prompt_key(&mut self, key: Key) {
        let Some(mut active) = self.prompt.take() else {
            return;
        };

        let outcome = active.prompt.handle_key(key);
        if let Some(handler) = active.handler.as_mut() {
            let ctx = PromptContext {
                document: &mut self.document,
                cursor: &mut self.cursor,
                viewport: &mut self.viewport,
            };
            handler.on_key(ctx, &active.prompt.input, key);
        }

        match outcome {
            PromptOutcome::Editing => self.prompt = Some(active),
            PromptOutcome::Confirmed(input) => {
                self.status_message = None;
                self.confirm_prompt(active.prompt.prompt_type, input);
            }
            PromptOutcome::Cancelled => {
                self.status_message = None;
                if active.prompt.prompt_type == PromptType::SaveFileAs {
                    self.set_status_message("Save aborted".to_string());
                }
            }
        }
    }

    fn confirm_prompt(&mut self, prompt_type: PromptType, input: String) {
        match prompt_type {
            PromptType::Search => {}
            PromptType::SaveFileAs => {
                let path = PathBuf::from(input);
                let syntax = syntax::select_for_path(&path);
                tracing::info!(
                    "Saving as {} (filetype {})",
                    path.display(),
                    syntax.map_or("none", |s| s.file_type)
                );
                self.document.set_syntax(syntax);
                self.filename = Some(path.clone());
                self.write_document(&path);
            }
        }
    }

    /// Serialize the document to `path` and report the outcome on the message line
    fn write_document(&mut self, path: &Path) {
        let data = self.document.serialize();
        match self.filesystem.write(path, &data) {
            Ok(()) => {
                self.document.mark_saved();
                tracing::info!("Wrote {} bytes to {}", data.len(), path.display());
                self.set_status_message(format!("{} bytes written to disk", data.len()));
            }
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", path.display(), e);
                self.set_status_message(format!("Can't save! I/O error: {}", e));
            }
        }
    }
}
