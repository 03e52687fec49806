//! The compile dialog: choosing a mode, bootstrapping the packaging tool and
//! streaming the build.

use iced::futures::stream;
use iced::widget::scrollable;
use iced::Task;
use std::path::PathBuf;

use objectwriter_core::packaging::{self, CompileMode, CompileOutcome, CompileRequest};
use objectwriter_core::{executor, CoreError, ExecutionEvent};

use super::{notify, App, CompileDialog, Message};
use crate::components::compile_log::log_scroll_id;

impl App {
    /// Opens the compile dialog if the document has been saved.
    pub fn show_compile_dialog(&mut self) -> Task<Message> {
        if let Err(e) = packaging::ensure_saved(&self.document) {
            return notify::report(&e);
        }
        if self.compile.is_none() {
            self.compile = Some(CompileDialog::default());
        }
        Task::none()
    }

    /// Dismisses the dialog unless a build is running.
    pub fn close_compile_dialog(&mut self) -> Task<Message> {
        match &self.compile {
            Some(dialog) if !dialog.stage.can_close() => {
                self.status_message = "Compilation in progress".to_string();
            }
            _ => self.compile = None,
        }
        Task::none()
    }

    /// True while the dialog is gathering parameters for `mode`.
    fn awaiting(&self, mode: CompileMode) -> bool {
        self.compile
            .as_ref()
            .is_some_and(|dialog| dialog.stage.mode() == Some(mode))
    }

    /// Ends the flow before anything was launched.
    fn abort_compile(&mut self, reason: &str) {
        tracing::info!("Packaging aborted: {}", reason);
        self.compile = None;
        self.status_message = reason.to_string();
    }

    pub fn use_recommended(&mut self) -> Task<Message> {
        let tool = self.bootstrapper.tool().to_string();
        let Some(dialog) = self.compile.as_mut() else {
            return Task::none();
        };
        if !dialog.stage.choose(CompileMode::Recommended) {
            return Task::none();
        }
        dialog.status = format!("Checking for {}...", tool);

        let bootstrapper = self.bootstrapper.clone();
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || bootstrapper.is_installed())
                    .await
                    .unwrap_or(false)
            },
            Message::ToolChecked,
        )
    }

    pub fn tool_checked(&mut self, installed: bool) -> Task<Message> {
        if !self.awaiting(CompileMode::Recommended) {
            return Task::none();
        }
        if installed {
            return self.update(Message::PickIcon);
        }

        let tool = self.bootstrapper.tool().to_string();
        if let Some(dialog) = self.compile.as_mut() {
            dialog.status = format!("{} not found", tool);
        }
        notify::confirm(
            &format!("{} Not Found", tool),
            &format!("{} is not installed. Do you want to install it?", tool),
            Message::InstallConsent,
        )
    }

    pub fn install_consent(&mut self, consent: bool) -> Task<Message> {
        if !self.awaiting(CompileMode::Recommended) {
            return Task::none();
        }
        if !consent {
            self.abort_compile("Packaging cancelled");
            return Task::none();
        }

        let tool = self.bootstrapper.tool().to_string();
        if let Some(dialog) = self.compile.as_mut() {
            dialog.status = format!("Installing {}...", tool);
        }

        let bootstrapper = self.bootstrapper.clone();
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    bootstrapper.install().map_err(|e| e.to_string())
                })
                .await
                .unwrap_or_else(|e| Err(e.to_string()))
            },
            Message::ToolInstalled,
        )
    }

    pub fn tool_installed(&mut self, result: Result<(), String>) -> Task<Message> {
        if !self.awaiting(CompileMode::Recommended) {
            return Task::none();
        }
        let tool = self.bootstrapper.tool().to_string();
        match result {
            Ok(()) => {
                tracing::info!("{} installed", tool);
                if let Some(dialog) = self.compile.as_mut() {
                    dialog.status = format!("{} installed", tool);
                }
                notify::notify(
                    rfd::MessageLevel::Info,
                    "Installation Complete",
                    &format!("{} has been successfully installed.", tool),
                    Message::PickIcon,
                )
            }
            Err(reason) => {
                self.abort_compile("Installation failed");
                notify::report(&CoreError::InstallationFailed { tool, reason })
            }
        }
    }

    pub fn pick_icon(&mut self) -> Task<Message> {
        if !self.awaiting(CompileMode::Recommended) {
            return Task::none();
        }
        let Some(dialog) = self.compile.as_mut() else {
            return Task::none();
        };
        dialog.status = "Choose an icon (optional)".to_string();

        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Choose an icon")
                    .add_filter("Icon files", &["ico"])
                    .pick_file()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::IconChosen,
        )
    }

    pub fn icon_chosen(&mut self, icon: Option<PathBuf>) -> Task<Message> {
        if !self.awaiting(CompileMode::Recommended) {
            return Task::none();
        }
        let Some(dialog) = self.compile.as_ref() else {
            return Task::none();
        };

        let request = CompileRequest::new(
            &self.document,
            icon,
            &dialog.output_dir,
            Some(dialog.extra_args.clone()),
        );

        match request {
            Ok(request) => {
                let command = request.command(&self.config.packaging);
                self.start_packaging(command)
            }
            Err(e) => {
                self.abort_compile(e.title());
                notify::report(&e)
            }
        }
    }

    pub fn use_custom(&mut self) -> Task<Message> {
        if let Some(dialog) = self.compile.as_mut() {
            if dialog.stage.choose(CompileMode::Custom) {
                dialog.status = String::new();
            }
        }
        Task::none()
    }

    pub fn run_custom_command(&mut self) -> Task<Message> {
        let Some(dialog) = self.compile.as_ref() else {
            return Task::none();
        };
        if dialog.stage.mode() != Some(CompileMode::Custom)
            || dialog.custom_command.trim().is_empty()
        {
            return Task::none();
        }

        let command = dialog.custom_command.clone();
        self.start_packaging(command)
    }

    /// Launches `command` and streams its events back as messages.
    pub fn start_packaging(&mut self, command: String) -> Task<Message> {
        let Some(dialog) = self.compile.as_mut() else {
            return Task::none();
        };
        if !dialog.stage.start() {
            return Task::none();
        }
        tracing::debug!("Compile stage: {:?}", dialog.stage);

        dialog.status = String::new();
        dialog.log.clear();
        dialog.command = Some(command.clone());
        self.busy.start();
        self.status_message = "Compiling...".to_string();

        let handle = executor::spawn(command);
        let events = stream::unfold(handle, |mut handle| async move {
            handle.next_event().await.map(|event| (event, handle))
        });

        Task::run(events, Message::Execution)
    }

    pub fn execution_event(&mut self, event: ExecutionEvent) -> Task<Message> {
        let Some(dialog) = self.compile.as_mut() else {
            return Task::none();
        };

        let outcome = match event {
            ExecutionEvent::Line(line) => {
                dialog.log.push(line);
                return scrollable::snap_to(log_scroll_id(), scrollable::RelativeOffset::END);
            }
            other => match other.outcome() {
                Some(outcome) => outcome,
                None => return Task::none(),
            },
        };

        dialog.stage.finish(outcome.clone());
        tracing::debug!("Compile stage: {:?}", dialog.stage);
        self.busy.stop();

        match outcome {
            CompileOutcome::Succeeded => {
                self.status_message = "Compilation finished".to_string();
                notify::info("Compilation Success", "Compilation finished successfully!")
            }
            CompileOutcome::Failed(reason) => {
                self.status_message = "Compilation failed".to_string();
                notify::error(
                    "Compilation Error",
                    &format!("Error during compilation: {}", reason),
                )
            }
        }
    }

    pub fn pick_output_dir(&self) -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Select Compile Location")
                    .pick_folder()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::OutputDirChosen,
        )
    }
}
