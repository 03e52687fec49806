//! Runs the buffer through an interpreter and captures what it prints.
//!
//! The call blocks until the script exits. There is no timeout and no way to
//! cancel: a script that never terminates keeps the caller waiting.

use std::process::{Command, Stdio};

use crate::config::InterpreterConfig;
use crate::{CoreError, CoreResult};

/// What a preview run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// The script wrote to stderr; stdout is dropped.
    Error(String),
    /// The script wrote nothing to stderr.
    Output(String),
}

impl PreviewOutcome {
    /// Picks the outcome from captured streams. Any stderr wins.
    pub fn from_streams(stdout: String, stderr: String) -> Self {
        if stderr.is_empty() {
            PreviewOutcome::Output(stdout)
        } else {
            PreviewOutcome::Error(stderr)
        }
    }

    /// Text for the output panel.
    pub fn display(&self) -> String {
        match self {
            PreviewOutcome::Error(stderr) => format!("Error:\n{}", stderr),
            PreviewOutcome::Output(stdout) => format!("Output:\n{}", stdout),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PreviewOutcome::Error(_))
    }
}

/// Executes scripts passed inline to an interpreter.
#[derive(Debug, Clone)]
pub struct PreviewRunner {
    config: InterpreterConfig,
}

impl PreviewRunner {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    /// Runs `code` as `<program> <inline_flag> <code>` and waits for it.
    pub fn run(&self, code: &str) -> CoreResult<PreviewOutcome> {
        tracing::info!(
            "Previewing {} bytes with {}",
            code.len(),
            self.config.program
        );

        let output = Command::new(&self.config.program)
            .arg(&self.config.inline_flag)
            .arg(code)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CoreError::Execution {
                program: self.config.program.clone(),
                source,
            })?;

        tracing::debug!("Preview exited with {}", output.status);

        Ok(PreviewOutcome::from_streams(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}

impl Default for PreviewRunner {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_wins_over_stdout() {
        let outcome = PreviewOutcome::from_streams("hello\n".into(), "Traceback\n".into());
        assert_eq!(outcome, PreviewOutcome::Error("Traceback\n".into()));
        assert_eq!(outcome.display(), "Error:\nTraceback\n");
        assert!(!outcome.display().contains("hello"));
    }

    #[test]
    fn test_stdout_only() {
        let outcome = PreviewOutcome::from_streams("Hello, World!\n".into(), String::new());
        assert_eq!(outcome.display(), "Output:\nHello, World!\n");
        assert!(!outcome.is_error());
    }

    #[test]
    fn test_missing_interpreter_is_execution_error() {
        let runner = PreviewRunner::new(InterpreterConfig {
            program: "objectwriter-no-such-interpreter".to_string(),
            inline_flag: "-c".to_string(),
        });
        let err = runner.run("print(1)").unwrap_err();
        assert!(matches!(err, CoreError::Execution { .. }));
    }

    #[cfg(unix)]
    fn sh_runner() -> PreviewRunner {
        PreviewRunner::new(InterpreterConfig {
            program: "sh".to_string(),
            inline_flag: "-c".to_string(),
        })
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captures_stdout() {
        let outcome = sh_runner().run("echo hello").unwrap();
        assert_eq!(outcome, PreviewOutcome::Output("hello\n".into()));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_reports_stderr_and_hides_stdout() {
        let outcome = sh_runner().run("echo visible; echo broken 1>&2").unwrap();
        assert_eq!(outcome.display(), "Error:\nbroken\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_code_is_passed_as_argument_not_file() {
        // A multi-line program survives intact as a single argument.
        let outcome = sh_runner().run("a=1\nb=2\necho $((a+b))").unwrap();
        assert_eq!(outcome, PreviewOutcome::Output("3\n".into()));
    }
}
