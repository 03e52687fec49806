//! Runs a command line through the platform shell on a worker thread and
//! streams its output back line by line.
//!
//! ## Learning: Channels between Threads
//!
//! The worker owns the child process and both of its pipes. The only thing it
//! shares with the caller is the sending half of an unbounded channel, so no
//! lock is needed: the UI thread just awaits [`ExecutionHandle::next_event`].
//!
//! stdout is read on the worker itself and stderr on a scoped reader inside
//! it. Draining both at once keeps a chatty stream from filling its pipe and
//! stalling the child.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::packaging::CompileOutcome;
use crate::{CoreError, CoreResult};

#[cfg(windows)]
const SHELL: &str = "cmd";
#[cfg(not(windows))]
const SHELL: &str = "sh";

/// Progress of a running command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionEvent {
    /// One line from stdout or stderr, without its line terminator.
    Line(String),
    /// The process exited. `code` is informational only.
    Exited { code: Option<i32> },
    /// The process could not be started or its output could not be read.
    Failed(String),
}

impl ExecutionEvent {
    /// Maps terminal events to the outcome shown to the user.
    ///
    /// Any exit counts as success, whatever the status code.
    pub fn outcome(&self) -> Option<CompileOutcome> {
        match self {
            ExecutionEvent::Line(_) => None,
            ExecutionEvent::Exited { .. } => Some(CompileOutcome::Succeeded),
            ExecutionEvent::Failed(reason) => Some(CompileOutcome::Failed(reason.clone())),
        }
    }
}

/// Receiving side of a running command.
#[derive(Debug)]
pub struct ExecutionHandle {
    events: UnboundedReceiver<ExecutionEvent>,
}

impl ExecutionHandle {
    /// Waits for the next event. `None` once the worker is done.
    pub async fn next_event(&mut self) -> Option<ExecutionEvent> {
        self.events.recv().await
    }

    /// Blocking variant of [`next_event`](Self::next_event) for use outside
    /// an async runtime.
    pub fn blocking_next(&mut self) -> Option<ExecutionEvent> {
        self.events.blocking_recv()
    }

    /// Blocks until the worker finishes and returns every event.
    pub fn collect_blocking(mut self) -> Vec<ExecutionEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.blocking_next() {
            events.push(event);
        }
        events
    }
}

/// Builds the platform shell invocation for `command`.
///
/// The string reaches the shell untouched, so pipes, redirections and
/// variable expansion all work.
pub fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new(SHELL);

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.arg("/C").raw_arg(command);
    }

    #[cfg(not(windows))]
    {
        cmd.arg("-c").arg(command);
    }

    cmd
}

/// Starts `command` on a new worker thread.
pub fn spawn(command: impl Into<String>) -> ExecutionHandle {
    let command = command.into();
    let (tx, rx) = mpsc::unbounded_channel();

    tracing::info!("Running: {}", command);

    let worker_tx = tx.clone();
    let spawned = std::thread::Builder::new()
        .name("objectwriter-exec".to_string())
        .spawn(move || match run(&command, &worker_tx) {
            Ok(code) => {
                tracing::info!("Command finished with exit code {:?}", code);
                let _ = worker_tx.send(ExecutionEvent::Exited { code });
            }
            Err(e) => {
                tracing::warn!("Command failed: {}", e);
                let _ = worker_tx.send(ExecutionEvent::Failed(e.to_string()));
            }
        });

    if let Err(e) = spawned {
        let _ = tx.send(ExecutionEvent::Failed(format!(
            "could not start worker thread: {}",
            e
        )));
    }

    ExecutionHandle { events: rx }
}

fn run(command: &str, tx: &UnboundedSender<ExecutionEvent>) -> CoreResult<Option<i32>> {
    let execution_error = |source| CoreError::Execution {
        program: command.to_string(),
        source,
    };

    let mut child = shell_command(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(execution_error)?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let streamed = std::thread::scope(|scope| {
        let stderr_reader = stderr.map(|pipe| scope.spawn(move || forward_lines(pipe, tx)));

        let stdout_result = match stdout {
            Some(pipe) => forward_lines(pipe, tx),
            None => Ok(()),
        };
        let stderr_result = match stderr_reader {
            Some(reader) => reader
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stderr reader panicked"))),
            None => Ok(()),
        };

        stdout_result.and(stderr_result)
    });

    if let Err(e) = streamed {
        let _ = child.kill();
        let _ = child.wait();
        return Err(execution_error(e));
    }

    let status = child.wait().map_err(execution_error)?;
    Ok(status.code())
}

fn forward_lines(pipe: impl Read, tx: &UnboundedSender<ExecutionEvent>) -> std::io::Result<()> {
    let mut reader = BufReader::new(pipe);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        tracing::debug!("| {}", line);

        // Keep draining after the receiver is gone so the child never blocks.
        let _ = tx.send(ExecutionEvent::Line(line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(events: &[ExecutionEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|e| match e {
                ExecutionEvent::Line(l) => Some(l.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_outcome_mapping() {
        assert_eq!(ExecutionEvent::Line("x".into()).outcome(), None);
        assert_eq!(
            ExecutionEvent::Exited { code: Some(0) }.outcome(),
            Some(CompileOutcome::Succeeded)
        );
        assert_eq!(
            ExecutionEvent::Failed("nope".into()).outcome(),
            Some(CompileOutcome::Failed("nope".into()))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_streams_stdout_lines_then_exit() {
        let events = spawn("echo one; echo two").collect_blocking();
        assert_eq!(lines(&events), vec!["one", "two"]);
        assert_eq!(events.last(), Some(&ExecutionEvent::Exited { code: Some(0) }));
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_lines_are_streamed_too() {
        let events = spawn("echo out; echo err 1>&2").collect_blocking();
        let mut got = lines(&events);
        got.sort();
        assert_eq!(got, vec!["err", "out"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_metacharacters_reach_the_shell() {
        let events =
            spawn("echo abc | tr a-c x-z && echo \"$((2 + 3))\"; echo done").collect_blocking();
        assert_eq!(lines(&events), vec!["xyz", "5", "done"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_still_succeeds() {
        let events = spawn("echo building; exit 3").collect_blocking();
        let last = events.last().unwrap();
        assert_eq!(last, &ExecutionEvent::Exited { code: Some(3) });
        assert_eq!(last.outcome(), Some(CompileOutcome::Succeeded));
    }

    #[cfg(unix)]
    #[test]
    fn test_large_stderr_does_not_stall() {
        let script = "i=0; while [ $i -lt 20000 ]; do echo \"log line $i\" 1>&2; i=$((i+1)); done; echo finished";
        let events = spawn(script).collect_blocking();
        let got = lines(&events);
        assert_eq!(got.len(), 20001);
        assert!(got.contains(&"finished"));
        assert_eq!(events.last(), Some(&ExecutionEvent::Exited { code: Some(0) }));
    }

    #[cfg(unix)]
    #[test]
    fn test_crlf_is_trimmed() {
        let events = spawn("printf 'a\\r\\nb\\n'").collect_blocking();
        assert_eq!(lines(&events), vec!["a", "b"]);
    }
}
