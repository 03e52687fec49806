use iced::widget::text_editor;
use iced::Task;
use std::path::PathBuf;

use objectwriter_core::document::{self, Document};

use super::{notify, App, Message};

const PYTHON_FILTER: (&str, &[&str]) = ("Python files", &["py"]);
const ALL_FILTER: (&str, &[&str]) = ("All files", &["*"]);

impl App {
    /// Asks for a script to open.
    pub fn pick_open_path(&self) -> Task<Message> {
        let directory = self
            .document
            .source_path()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf());

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .add_filter(PYTHON_FILTER.0, PYTHON_FILTER.1)
                    .add_filter(ALL_FILTER.0, ALL_FILTER.1);
                if let Some(dir) = directory {
                    dialog = dialog.set_directory(dir);
                }
                dialog.pick_file().await.map(|f| f.path().to_path_buf())
            },
            Message::OpenPathChosen,
        )
    }

    /// Asks where to save, starting from the current file if there is one.
    pub fn pick_save_path(&self) -> Task<Message> {
        let (directory, file_name) = self.document.save_hint();

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .add_filter(PYTHON_FILTER.0, PYTHON_FILTER.1)
                    .add_filter(ALL_FILTER.0, ALL_FILTER.1)
                    .set_file_name(file_name);
                if let Some(dir) = directory {
                    dialog = dialog.set_directory(dir);
                }
                dialog.save_file().await.map(|f| f.path().to_path_buf())
            },
            Message::SavePathChosen,
        )
    }

    /// Loads `path` into the editor, replacing the whole buffer.
    pub fn open_path(&mut self, path: PathBuf) -> Task<Message> {
        match Document::open(&path) {
            Ok(document) => {
                self.content = text_editor::Content::with_text(document.text());
                self.document = document;
                self.modified = false;
                self.status_message = format!("Opened: {}", self.document.display_name());
                Task::none()
            }
            Err(e) => notify::report(&e),
        }
    }

    /// Writes the buffer to `path`, adding `.py` when no extension was typed.
    pub fn save_path(&mut self, path: PathBuf) -> Task<Message> {
        let path = document::with_default_extension(path);
        match self.document.save_to(&path) {
            Ok(()) => {
                self.modified = false;
                self.status_message = format!("Saved: {}", path.display());
                Task::none()
            }
            Err(e) => notify::report(&e),
        }
    }
}
