//! # ObjectWriter Core
//!
//! Everything the editor does that is not drawing widgets.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   text    ┌────────────────┐
//! │   Document   │──────────▶│ Preview Runner │──▶ python -c <code>
//! │ text + path  │           └────────────────┘
//! └──────┬───────┘
//!        │ saved path
//!        ▼
//! ┌──────────────────┐  ensure  ┌──────────────┐
//! │ Packaging Launch │─────────▶│ Bootstrapper │──▶ pip install
//! │ request/template │          └──────────────┘
//! └──────┬───────────┘
//!        │ command string
//!        ▼
//! ┌──────────────────┐  ExecutionEvent  ┌────────┐
//! │ Executor (shell) │─────────────────▶│ UI log │
//! └──────────────────┘                  └────────┘
//! ```

pub mod bootstrap;
pub mod config;
pub mod document;
pub mod executor;
pub mod packaging;
pub mod preview;

pub use bootstrap::Bootstrapper;
pub use config::Config;
pub use document::Document;
pub use executor::{ExecutionEvent, ExecutionHandle};
pub use packaging::{CompileMode, CompileOutcome, CompileRequest, CompileStage};
pub use preview::{PreviewOutcome, PreviewRunner};

use std::path::PathBuf;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations.
///
/// Every variant is recoverable; the UI shows it in a dialog and carries on.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error executing `{program}`: {source}")]
    Execution {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Save the project before compiling.")]
    NotSaved,

    #[error("Please select a compile location.")]
    MissingOutputLocation,

    #[error("Failed to install {tool}: {reason}")]
    InstallationFailed { tool: String, reason: String },

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CoreError {
    /// Short dialog title for this error.
    pub fn title(&self) -> &'static str {
        match self {
            CoreError::Read { .. } => "Read Error",
            CoreError::Write { .. } => "Write Error",
            CoreError::Execution { .. } => "Execution Error",
            CoreError::NotSaved => "Save Error",
            CoreError::MissingOutputLocation => "Compile Location Error",
            CoreError::InstallationFailed { .. } => "Installation Failed",
            CoreError::Config(_) => "Configuration Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_titles() {
        assert_eq!(CoreError::NotSaved.title(), "Save Error");
        assert_eq!(
            CoreError::MissingOutputLocation.to_string(),
            "Please select a compile location."
        );
    }

    #[test]
    fn test_read_error_mentions_path() {
        let err = CoreError::Read {
            path: PathBuf::from("/tmp/missing.py"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.py"));
        assert_eq!(err.title(), "Read Error");
    }
}
