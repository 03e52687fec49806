//! Packaging requests, the recommended command template, and the compile
//! dialog's state machine.
//!
//! ```text
//! Idle ──choose──▶ AwaitingParameters(mode) ──start──▶ Running ──finish──▶ Finished
//! ```
//!
//! There is no edge back to `Idle`; a dialog is used for one build.

use std::path::{Path, PathBuf};

use crate::config::PackagingConfig;
use crate::document::Document;
use crate::{CoreError, CoreResult};

/// Returns the saved path of `document`, or `NotSaved`.
pub fn ensure_saved(document: &Document) -> CoreResult<&Path> {
    document.source_path().ok_or(CoreError::NotSaved)
}

/// Everything the recommended template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    pub entry_path: PathBuf,
    pub icon_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub extra_args: Option<String>,
}

impl CompileRequest {
    /// Builds a request for `document`.
    ///
    /// Fails with `NotSaved` before looking at the other inputs, then with
    /// `MissingOutputLocation` when `output_dir` is blank.
    pub fn new(
        document: &Document,
        icon_path: Option<PathBuf>,
        output_dir: &str,
        extra_args: Option<String>,
    ) -> CoreResult<Self> {
        let entry_path = ensure_saved(document)?.to_path_buf();

        let output_dir = output_dir.trim();
        if output_dir.is_empty() {
            return Err(CoreError::MissingOutputLocation);
        }

        Ok(Self {
            entry_path,
            icon_path,
            output_dir: PathBuf::from(output_dir),
            extra_args: extra_args.filter(|a| !a.trim().is_empty()),
        })
    }

    /// Renders the recommended packaging command line.
    pub fn command(&self, config: &PackagingConfig) -> String {
        let mut parts = vec![config.tool.clone()];

        if config.onefile {
            parts.push("--onefile".to_string());
        }
        if let Some(icon) = &self.icon_path {
            parts.push(format!("--icon={}", shell_quote(&icon.to_string_lossy())));
        }
        parts.push(format!("--name={}", shell_quote(&config.output_name)));
        parts.push(format!(
            "--distpath={}",
            shell_quote(&self.output_dir.to_string_lossy())
        ));
        if let Some(extra) = &self.extra_args {
            parts.push(extra.trim().to_string());
        }
        parts.push(shell_quote(&self.entry_path.to_string_lossy()));

        parts.join(" ")
    }
}

/// Quotes `value` for the platform shell when it would otherwise split or
/// expand.
pub fn shell_quote(value: &str) -> String {
    const SPECIAL: &[char] = &[
        '"', '\'', '$', '&', '|', ';', '<', '>', '(', ')', '*', '?', '[', ']', '{', '}', '`',
        '!', '#', '~', '%', '^',
    ];

    let needs_quotes =
        value.is_empty() || value.chars().any(|c| c.is_whitespace() || SPECIAL.contains(&c));
    if !needs_quotes {
        return value.to_string();
    }

    if cfg!(windows) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for c in value.chars() {
            if matches!(c, '"' | '\\' | '$' | '`') {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('"');
        quoted
    }
}

/// How the packaging command is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileMode {
    /// Built from the fixed template
    Recommended,
    /// Typed by the user and run verbatim
    Custom,
}

/// How a packaging run ended.
///
/// `Succeeded` means the process ran to exit; its exit status is not consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    Succeeded,
    Failed(String),
}

/// Compile dialog lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CompileStage {
    #[default]
    Idle,
    AwaitingParameters(CompileMode),
    Running,
    Finished(CompileOutcome),
}

impl CompileStage {
    /// Selects a mode. Allowed until the build starts.
    pub fn choose(&mut self, mode: CompileMode) -> bool {
        match self {
            CompileStage::Idle | CompileStage::AwaitingParameters(_) => {
                *self = CompileStage::AwaitingParameters(mode);
                true
            }
            _ => false,
        }
    }

    /// Marks the command as launched.
    pub fn start(&mut self) -> bool {
        if matches!(self, CompileStage::AwaitingParameters(_)) {
            *self = CompileStage::Running;
            true
        } else {
            false
        }
    }

    /// Records the end of the run.
    pub fn finish(&mut self, outcome: CompileOutcome) -> bool {
        if matches!(self, CompileStage::Running) {
            *self = CompileStage::Finished(outcome);
            true
        } else {
            false
        }
    }

    pub fn mode(&self) -> Option<CompileMode> {
        match self {
            CompileStage::AwaitingParameters(mode) => Some(*mode),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, CompileStage::Running)
    }

    /// The dialog may be dismissed in every stage but `Running`.
    pub fn can_close(&self) -> bool {
        !self.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn saved_document(name: &str) -> (tempfile::TempDir, Document) {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Document::new("print(1)\n");
        doc.save_to(dir.path().join(name)).unwrap();
        (dir, doc)
    }

    fn request(entry: &str, icon: Option<&str>, out: &str) -> CompileRequest {
        CompileRequest {
            entry_path: PathBuf::from(entry),
            icon_path: icon.map(PathBuf::from),
            output_dir: PathBuf::from(out),
            extra_args: None,
        }
    }

    #[test]
    fn test_unsaved_document_is_rejected() {
        let doc = Document::sample();
        assert!(matches!(ensure_saved(&doc), Err(CoreError::NotSaved)));
        assert!(matches!(
            CompileRequest::new(&doc, None, "", None),
            Err(CoreError::NotSaved)
        ));
    }

    #[test]
    fn test_blank_output_location_is_rejected() {
        let (_dir, doc) = saved_document("app.py");
        assert!(matches!(
            CompileRequest::new(&doc, None, "   ", None),
            Err(CoreError::MissingOutputLocation)
        ));
    }

    #[test]
    fn test_request_uses_saved_path() {
        let (_dir, doc) = saved_document("app.py");
        let req = CompileRequest::new(&doc, None, "/out", Some("  ".into())).unwrap();
        assert_eq!(Some(req.entry_path.as_path()), doc.source_path());
        assert_eq!(req.output_dir, PathBuf::from("/out"));
        assert!(req.extra_args.is_none());
    }

    #[test]
    fn test_recommended_command_without_icon() {
        let cmd = request("/src/app.py", None, "/dist").command(&PackagingConfig::default());
        assert_eq!(
            cmd,
            "pyinstaller --onefile --name=ObjectWriter --distpath=/dist /src/app.py"
        );
    }

    #[test]
    fn test_recommended_command_with_icon_and_extra_args() {
        let mut req = request("/src/app.py", Some("/img/app.ico"), "/dist");
        req.extra_args = Some("--noconsole --clean".into());
        let cmd = req.command(&PackagingConfig::default());
        assert_eq!(
            cmd,
            "pyinstaller --onefile --icon=/img/app.ico --name=ObjectWriter --distpath=/dist --noconsole --clean /src/app.py"
        );
    }

    #[test]
    fn test_onefile_can_be_disabled() {
        let config = PackagingConfig {
            onefile: false,
            ..PackagingConfig::default()
        };
        let cmd = request("a.py", None, "out").command(&config);
        assert!(!cmd.contains("--onefile"));
    }

    #[cfg(unix)]
    #[test]
    fn test_paths_with_spaces_are_quoted() {
        let cmd =
            request("/my scripts/app.py", None, "/out dir").command(&PackagingConfig::default());
        assert!(cmd.ends_with("\"/my scripts/app.py\""));
        assert!(cmd.contains("--distpath=\"/out dir\""));
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_quote_escapes_expansions() {
        assert_eq!(shell_quote("plain/path.py"), "plain/path.py");
        assert_eq!(shell_quote("$HOME/x"), "\"\\$HOME/x\"");
        assert_eq!(shell_quote(""), "\"\"");
    }

    #[test]
    fn test_stage_happy_path() {
        let mut stage = CompileStage::default();
        assert!(stage.can_close());
        assert!(!stage.start());

        assert!(stage.choose(CompileMode::Custom));
        assert_eq!(stage.mode(), Some(CompileMode::Custom));
        assert!(stage.choose(CompileMode::Recommended));

        assert!(stage.start());
        assert!(stage.is_running());
        assert!(!stage.can_close());
        assert!(!stage.choose(CompileMode::Custom));

        assert!(stage.finish(CompileOutcome::Succeeded));
        assert_eq!(stage, CompileStage::Finished(CompileOutcome::Succeeded));
        assert!(stage.can_close());
    }

    #[test]
    fn test_finished_stage_is_terminal() {
        let mut stage = CompileStage::Finished(CompileOutcome::Failed("boom".into()));
        assert!(!stage.choose(CompileMode::Recommended));
        assert!(!stage.start());
        assert!(!stage.finish(CompileOutcome::Succeeded));
    }

    proptest! {
        #[test]
        fn prop_icon_flag_only_when_chosen(
            entry in "[a-z]{1,12}\\.py",
            out in "[a-z/]{1,16}",
            icon in proptest::option::of("[a-z]{1,8}\\.ico"),
        ) {
            let req = request(&entry, icon.as_deref(), &out);
            let cmd = req.command(&PackagingConfig::default());

            prop_assert_eq!(cmd.contains("--icon="), icon.is_some());
            prop_assert!(cmd.contains("--name=ObjectWriter"));
            let distpath = format!("--distpath={}", out);
            prop_assert!(cmd.contains(&distpath));
            prop_assert!(cmd.ends_with(&entry));
        }
    }
}
