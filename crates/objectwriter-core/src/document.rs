//! The single open document.
//!
//! ## Learning: Invariants through Encapsulation
//!
//! `source_path` is private and only assigned inside [`Document::open`] and
//! [`Document::save_to`], after the filesystem call succeeded. Callers can
//! read it but never set it, so "a path means it is on disk" always holds.

use std::path::{Path, PathBuf};

use crate::{CoreError, CoreResult};

/// Script shown in a fresh editor.
pub const SAMPLE_SCRIPT: &str = r#"# Sample Python Script
def greet(name):
    return f"Hello, {name}!"

print(greet('World'))
"#;

/// Name suggested by the save dialog for a document that was never saved.
pub const DEFAULT_FILE_NAME: &str = "script.py";

/// Extension added to save destinations typed without one.
pub const DEFAULT_EXTENSION: &str = "py";

/// Appends `.py` to `path` when it has no extension.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

/// Text buffer plus the file it was last opened from or saved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    source_path: Option<PathBuf>,
}

impl Document {
    /// Creates an unsaved document holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_path: None,
        }
    }

    /// Creates the startup document with the sample script.
    pub fn sample() -> Self {
        Self::new(SAMPLE_SCRIPT)
    }

    /// Reads `path` into a new document.
    pub fn open(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Opened {}", path.display());

        Ok(Self {
            text,
            source_path: Some(path.to_path_buf()),
        })
    }

    /// Writes the buffer verbatim to `path` and remembers it.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.text).map_err(|source| CoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved {}", path.display());

        self.source_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Returns the buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the buffer contents. The path is untouched.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Path of the last successful open or save.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// File name for titles and the save dialog.
    pub fn display_name(&self) -> String {
        self.source_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Directory and file name to pre-fill the save dialog with.
    pub fn save_hint(&self) -> (Option<PathBuf>, String) {
        match &self.source_path {
            Some(path) => (
                path.parent().map(Path::to_path_buf),
                path.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            ),
            None => (None, DEFAULT_FILE_NAME.to_string()),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::sample()
    }
}
