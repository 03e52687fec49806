use iced::widget::text_editor;
use iced::{keyboard, window, Size, Subscription, Task};
use std::time::Duration;

use objectwriter_core::{Bootstrapper, Config, Document, PreviewRunner};

use crate::components::BusyIndicator;

pub mod compile;
pub mod file_ops;
pub mod messages;
pub mod notify;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

/// Frame interval of the busy indicator.
const BUSY_FRAME: Duration = Duration::from_millis(30);

pub struct App {
    pub config: Config,
    pub document: Document,
    pub content: text_editor::Content,
    pub modified: bool,
    pub preview: PreviewRunner,
    pub preview_output: String,
    pub preview_is_error: bool,
    pub bootstrapper: Bootstrapper,
    pub compile: Option<CompileDialog>,
    pub busy: BusyIndicator,
    pub active_menu: Option<TopMenu>,
    pub about_visible: bool,
    pub status_message: String,
    pub font_size: f32,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags { file, config } = flags;

        let document = Document::sample();
        let app = Self {
            content: text_editor::Content::with_text(document.text()),
            document,
            modified: false,
            preview: PreviewRunner::new(config.interpreter.clone()),
            preview_output: String::new(),
            preview_is_error: false,
            bootstrapper: Bootstrapper::new(config.packaging.clone(), config.installer.clone()),
            compile: None,
            busy: BusyIndicator::new(),
            active_menu: None,
            about_visible: false,
            status_message: "Ready | Ctrl+O: Open | Ctrl+S: Save | F5: Preview | F7: Compile"
                .to_string(),
            font_size: config.editor.font_size,
            config,
        };

        let task = match file {
            Some(path) => Task::perform(async move { Some(path) }, Message::OpenPathChosen),
            None => Task::none(),
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        let modified = if self.modified { " *" } else { "" };
        format!(
            "ObjectWriter - {}{}",
            self.document.display_name(),
            modified
        )
    }

    /// True while a packaging process is alive.
    pub fn is_compiling(&self) -> bool {
        self.compile
            .as_ref()
            .is_some_and(|dialog| dialog.stage.is_running())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        });
        let close_sub = window::close_requests().map(Message::CloseRequested);

        if self.busy.is_running() {
            Subscription::batch([
                keyboard_sub,
                close_sub,
                iced::time::every(BUSY_FRAME).map(|_| Message::BusyTick),
            ])
        } else {
            Subscription::batch([keyboard_sub, close_sub])
        }
    }
}

pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1000.0, 760.0),
            exit_on_close_request: false,
            ..Default::default()
        })
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
