use iced::{keyboard, Task};

use super::{notify, App, Message};

/// Font size limits for zooming.
const MIN_FONT_SIZE: f32 = 8.0;
const MAX_FONT_SIZE: f32 = 32.0;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFile => {
                self.active_menu = None;
                return self.pick_open_path();
            }

            Message::SaveFile => {
                self.active_menu = None;
                return self.pick_save_path();
            }

            Message::Exit => {
                self.active_menu = None;
                return self.request_exit();
            }

            Message::OpenPathChosen(path) => {
                // Cancelled dialogs change nothing.
                if let Some(path) = path {
                    return self.open_path(path);
                }
            }

            Message::SavePathChosen(path) => {
                if let Some(path) = path {
                    return self.save_path(path);
                }
            }

            Message::EditorAction(action) => {
                // Modal dialogs own the input.
                if self.compile.is_some() || self.about_visible {
                    return Task::none();
                }
                self.active_menu = None;
                let is_edit = action.is_edit();
                self.content.perform(action);
                if is_edit {
                    self.document.set_text(self.content.text());
                    self.modified = true;
                }
            }

            Message::Preview => {
                self.active_menu = None;
                return self.run_preview();
            }

            Message::ShowCompileDialog => {
                self.active_menu = None;
                return self.show_compile_dialog();
            }

            Message::CloseCompileDialog => return self.close_compile_dialog(),

            Message::OutputDirChanged(value) => {
                if let Some(dialog) = self.compile.as_mut() {
                    dialog.output_dir = value;
                }
            }

            Message::BrowseOutputDir => return self.pick_output_dir(),

            Message::OutputDirChosen(dir) => {
                if let (Some(dir), Some(dialog)) = (dir, self.compile.as_mut()) {
                    dialog.output_dir = dir.display().to_string();
                }
            }

            Message::ExtraArgsChanged(value) => {
                if let Some(dialog) = self.compile.as_mut() {
                    dialog.extra_args = value;
                }
            }

            Message::UseRecommended => return self.use_recommended(),
            Message::ToolChecked(installed) => return self.tool_checked(installed),
            Message::InstallConsent(consent) => return self.install_consent(consent),
            Message::ToolInstalled(result) => return self.tool_installed(result),
            Message::PickIcon => return self.pick_icon(),
            Message::IconChosen(icon) => return self.icon_chosen(icon),

            Message::UseCustom => return self.use_custom(),

            Message::CustomCommandChanged(value) => {
                if let Some(dialog) = self.compile.as_mut() {
                    dialog.custom_command = value;
                }
            }

            Message::RunCustomCommand => return self.run_custom_command(),

            Message::Execution(event) => return self.execution_event(event),

            Message::BusyTick => self.busy.tick(),

            Message::ToggleTopMenu(menu) => {
                if self.active_menu == Some(menu) {
                    self.active_menu = None;
                } else {
                    self.active_menu = Some(menu);
                }
            }

            Message::CloseTopMenu => {
                self.active_menu = None;
            }

            Message::ZoomIn => {
                self.active_menu = None;
                self.font_size = (self.font_size + 1.0).min(MAX_FONT_SIZE);
                self.status_message = format!("Font size: {}", self.font_size);
            }

            Message::ZoomOut => {
                self.active_menu = None;
                self.font_size = (self.font_size - 1.0).max(MIN_FONT_SIZE);
                self.status_message = format!("Font size: {}", self.font_size);
            }

            Message::ZoomReset => {
                self.active_menu = None;
                self.font_size = self.config.editor.font_size;
                self.status_message = format!("Font size: {}", self.font_size);
            }

            Message::ShowAbout => {
                self.active_menu = None;
                self.about_visible = true;
            }

            Message::HideAbout => {
                self.about_visible = false;
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }

            Message::CloseRequested(_) => return self.request_exit(),

            Message::DialogClosed => {}
        }

        Task::none()
    }

    /// Runs the buffer through the interpreter. Blocks until it exits.
    pub fn run_preview(&mut self) -> Task<Message> {
        self.status_message = "Running preview...".to_string();
        match self.preview.run(self.document.text()) {
            Ok(outcome) => {
                self.preview_is_error = outcome.is_error();
                self.preview_output = outcome.display();
                self.status_message = "Preview finished".to_string();
                Task::none()
            }
            Err(e) => {
                self.status_message = "Preview failed".to_string();
                notify::report(&e)
            }
        }
    }

    /// Quits unless a packaging process is still running.
    pub fn request_exit(&mut self) -> Task<Message> {
        if self.is_compiling() {
            self.status_message = "Wait for the compilation to finish before closing".to_string();
            return Task::none();
        }
        tracing::info!("Exiting");
        iced::exit()
    }

    pub fn handle_key_pressed(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match &key {
            keyboard::Key::Named(keyboard::key::Named::F5) if self.compile.is_none() => {
                return self.update(Message::Preview);
            }
            keyboard::Key::Named(keyboard::key::Named::F7) if self.compile.is_none() => {
                return self.update(Message::ShowCompileDialog);
            }
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                if self.active_menu.is_some() {
                    self.active_menu = None;
                } else if self.about_visible {
                    self.about_visible = false;
                } else if self.compile.is_some() {
                    return self.close_compile_dialog();
                }
                return Task::none();
            }
            _ => {}
        }

        if self.compile.is_some() {
            return Task::none();
        }

        if modifiers.control() && !modifiers.alt() {
            if let keyboard::Key::Character(c) = &key {
                match c.to_lowercase().as_str() {
                    "o" => return self.update(Message::OpenFile),
                    "s" => return self.update(Message::SaveFile),
                    "q" => return self.update(Message::Exit),
                    "=" | "+" => return self.update(Message::ZoomIn),
                    "-" => return self.update(Message::ZoomOut),
                    "0" => return self.update(Message::ZoomReset),
                    _ => {}
                }
            }
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{CompileDialog, Flags, TopMenu};
    use iced::widget::text_editor;
    use objectwriter_core::{CompileMode, CompileOutcome, CompileStage, Document, ExecutionEvent};

    fn app() -> App {
        App::new(Flags::default()).0
    }

    fn app_with_saved_document() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();
        let mut document = Document::sample();
        document.save_to(dir.path().join("main.py")).unwrap();
        app.document = document;
        (dir, app)
    }

    #[test]
    fn test_typing_marks_document_modified() {
        let mut app = app();
        assert!(!app.modified);
        assert_eq!(app.title(), "ObjectWriter - Untitled");

        let _ = app.update(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Insert('x'),
        )));

        assert!(app.modified);
        assert_eq!(app.document.text(), app.content.text());
        assert!(app.title().ends_with(" *"));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut app = app();
        for _ in 0..100 {
            let _ = app.update(Message::ZoomIn);
        }
        assert_eq!(app.font_size, MAX_FONT_SIZE);

        for _ in 0..100 {
            let _ = app.update(Message::ZoomOut);
        }
        assert_eq!(app.font_size, MIN_FONT_SIZE);

        let _ = app.update(Message::ZoomReset);
        assert_eq!(app.font_size, app.config.editor.font_size);
    }

    #[test]
    fn test_top_menu_toggles() {
        let mut app = app();
        let _ = app.update(Message::ToggleTopMenu(TopMenu::File));
        assert_eq!(app.active_menu, Some(TopMenu::File));
        let _ = app.update(Message::ToggleTopMenu(TopMenu::Run));
        assert_eq!(app.active_menu, Some(TopMenu::Run));
        let _ = app.update(Message::ToggleTopMenu(TopMenu::Run));
        assert_eq!(app.active_menu, None);
    }

    #[test]
    fn test_compile_dialog_needs_saved_document() {
        let mut app = app();
        let _ = app.update(Message::ShowCompileDialog);
        assert!(app.compile.is_none());

        let (_dir, mut app) = app_with_saved_document();
        let _ = app.update(Message::ShowCompileDialog);
        assert!(app.compile.is_some());
    }

    #[test]
    fn test_running_dialog_cannot_be_closed() {
        let (_dir, mut app) = app_with_saved_document();
        let mut dialog = CompileDialog::default();
        dialog.stage.choose(CompileMode::Custom);
        dialog.stage.start();
        app.compile = Some(dialog);

        let _ = app.update(Message::CloseCompileDialog);
        assert!(app.compile.is_some());

        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Named(keyboard::key::Named::Escape),
            keyboard::Modifiers::empty(),
        ));
        assert!(app.compile.is_some());
        assert!(app.is_compiling());
    }

    #[test]
    fn test_modal_blocks_editor_input() {
        let (_dir, mut app) = app_with_saved_document();
        let _ = app.update(Message::ShowCompileDialog);
        let before = app.content.text();

        let _ = app.update(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Insert('x'),
        )));

        assert_eq!(app.content.text(), before);
        assert!(!app.modified);
    }

    #[test]
    fn test_blank_custom_command_does_nothing() {
        let (_dir, mut app) = app_with_saved_document();
        let _ = app.update(Message::ShowCompileDialog);
        let _ = app.update(Message::UseCustom);
        let _ = app.update(Message::CustomCommandChanged("   ".into()));
        let _ = app.update(Message::RunCustomCommand);

        let dialog = app.compile.as_ref().unwrap();
        assert_eq!(dialog.stage.mode(), Some(CompileMode::Custom));
        assert!(!dialog.stage.is_running());
        assert!(!app.busy.is_running());
    }

    #[test]
    fn test_stale_tool_check_is_ignored() {
        let (_dir, mut app) = app_with_saved_document();
        let _ = app.update(Message::ShowCompileDialog);
        let _ = app.update(Message::UseCustom);

        let _ = app.update(Message::ToolInstalled(Err("boom".into())));

        let dialog = app.compile.as_ref().unwrap();
        assert_eq!(dialog.stage.mode(), Some(CompileMode::Custom));
    }

    #[test]
    fn test_escape_closes_about_first() {
        let mut app = app();
        let _ = app.update(Message::ShowAbout);
        assert!(app.about_visible);

        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Named(keyboard::key::Named::Escape),
            keyboard::Modifiers::empty(),
        ));
        assert!(!app.about_visible);
    }

    #[test]
    fn test_declining_install_closes_dialog() {
        let (_dir, mut app) = app_with_saved_document();
        let _ = app.update(Message::ShowCompileDialog);
        if let Some(dialog) = app.compile.as_mut() {
            dialog.stage.choose(CompileMode::Recommended);
        }

        let _ = app.update(Message::InstallConsent(false));

        assert!(app.compile.is_none());
        assert!(!app.busy.is_running());
        assert!(!app.is_compiling());
    }

    #[test]
    fn test_blank_output_location_closes_dialog() {
        let (_dir, mut app) = app_with_saved_document();
        let _ = app.update(Message::ShowCompileDialog);
        if let Some(dialog) = app.compile.as_mut() {
            dialog.stage.choose(CompileMode::Recommended);
            dialog.output_dir = "   ".to_string();
        }

        let _ = app.update(Message::IconChosen(None));

        assert!(app.compile.is_none());
        assert!(!app.busy.is_running());
    }

    #[test]
    fn test_nonzero_exit_is_reported_as_success() {
        let (_dir, mut app) = app_with_saved_document();
        let mut dialog = CompileDialog::default();
        dialog.stage.choose(CompileMode::Custom);
        dialog.stage.start();
        app.compile = Some(dialog);
        app.busy.start();

        let _ = app.update(Message::Execution(ExecutionEvent::Line("building".into())));
        let _ = app.update(Message::Execution(ExecutionEvent::Exited { code: Some(3) }));

        let dialog = app.compile.as_ref().unwrap();
        assert_eq!(dialog.stage, CompileStage::Finished(CompileOutcome::Succeeded));
        assert_eq!(dialog.log.last_line(), Some("building"));
        assert!(!app.busy.is_running());
        assert!(!app.is_compiling());
    }

    #[test]
    fn test_save_adds_py_extension_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();

        let _ = app.update(Message::SavePathChosen(Some(dir.path().join("notes"))));

        let saved = dir.path().join("notes.py");
        assert!(saved.exists());
        assert_eq!(app.document.source_path(), Some(saved.as_path()));
        assert!(!dir.path().join("notes").exists());
    }
}
