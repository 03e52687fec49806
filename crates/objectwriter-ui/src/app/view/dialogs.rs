use iced::widget::{
    button, column, container, horizontal_space, progress_bar, row, scrollable, text, text_input,
    Column, Space,
};
use iced::{Element, Font, Length, Padding};

use objectwriter_core::{CompileMode, CompileOutcome, CompileStage};

use crate::app::{App, CompileDialog, Message};
use crate::components::compile_log::log_scroll_id;
use crate::style;
use crate::theme::colors;

const LOG_HEIGHT: f32 = 220.0;

impl App {
    pub fn view_compile_modal<'a>(&'a self, dialog: &'a CompileDialog) -> Element<'a, Message> {
        let choosing = matches!(
            dialog.stage,
            CompileStage::Idle | CompileStage::AwaitingParameters(_)
        );
        let running = dialog.stage.is_running();

        let entry = self
            .document
            .source_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        let mut output_input = text_input("Folder for the finished executable", &dialog.output_dir)
            .padding(6)
            .size(13);
        if choosing {
            output_input = output_input.on_input(Message::OutputDirChanged);
        }

        let mut args_input = text_input("Additional arguments (optional)", &dialog.extra_args)
            .padding(6)
            .size(13);
        if choosing {
            args_input = args_input.on_input(Message::ExtraArgsChanged);
        }

        let mut items: Vec<Element<'a, Message>> = vec![
            text("Compile Project").size(18).color(colors::ACCENT).into(),
            Space::with_height(4).into(),
            text(format!("Script: {}", entry))
                .size(12)
                .color(colors::TEXT_SECONDARY)
                .into(),
            Space::with_height(8).into(),
            text("Compile location").size(12).color(colors::TEXT_SECONDARY).into(),
            row![
                output_input,
                button(text("Browse...").size(13))
                    .padding(Padding::from([6, 12]))
                    .style(style::secondary_button)
                    .on_press_maybe(choosing.then_some(Message::BrowseOutputDir)),
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center)
            .into(),
            text("Extra arguments").size(12).color(colors::TEXT_SECONDARY).into(),
            args_input.into(),
            Space::with_height(8).into(),
            row![
                button(text("Use Recommended Settings").size(13))
                    .padding(Padding::from([8, 16]))
                    .style(style::primary_button)
                    .on_press_maybe(choosing.then_some(Message::UseRecommended)),
                button(text("Custom Command").size(13))
                    .padding(Padding::from([8, 16]))
                    .style(style::secondary_button)
                    .on_press_maybe(choosing.then_some(Message::UseCustom)),
            ]
            .spacing(8)
            .into(),
        ];

        if dialog.stage.mode() == Some(CompileMode::Custom) {
            let ready = !dialog.custom_command.trim().is_empty();
            items.push(
                row![
                    text_input("Command to run", &dialog.custom_command)
                        .on_input(Message::CustomCommandChanged)
                        .on_submit(Message::RunCustomCommand)
                        .font(Font::MONOSPACE)
                        .padding(6)
                        .size(13),
                    button(text("Run").size(13))
                        .padding(Padding::from([6, 16]))
                        .style(style::primary_button)
                        .on_press_maybe(ready.then_some(Message::RunCustomCommand)),
                ]
                .spacing(8)
                .align_y(iced::Alignment::Center)
                .into(),
            );
        }

        if !dialog.status.is_empty() {
            items.push(text(&dialog.status).size(12).color(colors::TEXT_SECONDARY).into());
        }

        if let Some(command) = &dialog.command {
            items.push(
                text(format!("$ {}", command))
                    .size(12)
                    .font(Font::MONOSPACE)
                    .color(colors::TEXT_MUTED)
                    .into(),
            );
        }

        items.push(Self::view_compile_log(dialog));
        items.push(
            progress_bar(0.0..=100.0, self.busy.value())
                .height(Length::Fixed(6.0))
                .into(),
        );

        let result: Element<'a, Message> = match &dialog.stage {
            CompileStage::Finished(CompileOutcome::Succeeded) => {
                text("Compilation finished").size(12).color(colors::ACCENT).into()
            }
            CompileStage::Finished(CompileOutcome::Failed(reason)) => {
                text(format!("Compilation failed: {}", reason))
                    .size(12)
                    .color(colors::ERROR)
                    .into()
            }
            _ => Space::with_height(0).into(),
        };

        items.push(
            row![
                result,
                horizontal_space(),
                button(text("Close").size(13))
                    .padding(Padding::from([8, 24]))
                    .style(style::secondary_button)
                    .on_press_maybe((!running).then_some(Message::CloseCompileDialog)),
            ]
            .align_y(iced::Alignment::Center)
            .into(),
        );

        let modal_content = Column::with_children(items)
            .spacing(6)
            .padding(24)
            .width(Length::Fixed(640.0));

        container(container(modal_content).style(style::modal))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn view_compile_log(dialog: &CompileDialog) -> Element<'_, Message> {
        let body: Element<'_, Message> = if dialog.log.is_empty() {
            text("Build output appears here")
                .size(12)
                .color(colors::TEXT_MUTED)
                .into()
        } else {
            text(dialog.log.text())
                .size(12)
                .font(Font::MONOSPACE)
                .color(colors::TEXT_PRIMARY)
                .into()
        };

        container(
            scrollable(column![body].padding(Padding::from([6, 10])).width(Length::Fill))
                .id(log_scroll_id())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fixed(LOG_HEIGHT))
        .style(style::console)
        .into()
    }

    pub fn view_about_modal(&self) -> Element<'_, Message> {
        let modal_content = column![
            text("ObjectWriter").size(20).color(colors::ACCENT),
            Space::with_height(8),
            text("Write Python scripts, preview their output and package them into executables")
                .size(13)
                .color(colors::TEXT_SECONDARY),
            Space::with_height(12),
            text(format!("Version {}", env!("CARGO_PKG_VERSION")))
                .size(12)
                .color(colors::TEXT_MUTED),
            Space::with_height(20),
            button(text("Close").size(13))
                .padding(Padding::from([8, 24]))
                .style(style::primary_button)
                .on_press(Message::HideAbout),
        ]
        .padding(24)
        .width(Length::Fixed(360.0))
        .align_x(iced::Alignment::Center);

        container(container(modal_content).style(style::modal))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
