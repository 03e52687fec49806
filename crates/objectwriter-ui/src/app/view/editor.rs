use iced::widget::{
    button, column, container, horizontal_space, row, scrollable, text, text_editor, Space,
};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Theme};

use crate::app::{App, Message};
use crate::style;
use crate::theme::colors;

/// Height of the preview output panel.
const OUTPUT_HEIGHT: f32 = 200.0;

impl App {
    pub fn view_main_area(&self) -> Element<'_, Message> {
        column![
            self.view_editor(),
            self.view_preview_bar(),
            self.view_preview_output(),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    pub fn view_editor(&self) -> Element<'_, Message> {
        let selection_color = Color::from_rgba(0.36, 0.54, 0.90, 0.35);

        let editor = text_editor(&self.content)
            .height(Length::Fill)
            .padding(Padding {
                top: 12.0,
                right: 16.0,
                bottom: 12.0,
                left: 16.0,
            })
            .font(Font::MONOSPACE)
            .size(self.font_size)
            .style(move |_: &Theme, _status| text_editor::Style {
                background: Background::Color(colors::BG_DARK),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: Color::TRANSPARENT,
                },
                icon: colors::TEXT_MUTED,
                placeholder: colors::TEXT_MUTED,
                value: colors::TEXT_PRIMARY,
                selection: selection_color,
            })
            .on_action(Message::EditorAction);

        container(editor)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_preview_bar(&self) -> Element<'_, Message> {
        let bar = row![
            button(text("Preview Output").size(13))
                .padding(Padding::from([6, 16]))
                .style(style::primary_button)
                .on_press(Message::Preview),
            horizontal_space(),
            text("F5").size(11).color(colors::TEXT_MUTED),
        ]
        .padding(Padding::from([6, 12]))
        .align_y(iced::Alignment::Center);

        container(bar).width(Length::Fill).style(style::bar).into()
    }

    /// Result of the last preview, red when the script wrote to stderr.
    fn view_preview_output(&self) -> Element<'_, Message> {
        let color = if self.preview_is_error {
            colors::ERROR
        } else {
            colors::TEXT_PRIMARY
        };

        let body: Element<'_, Message> = if self.preview_output.is_empty() {
            text("Press Preview Output to run the script")
                .size(12)
                .color(colors::TEXT_MUTED)
                .into()
        } else {
            text(&self.preview_output)
                .size(self.font_size - 1.0)
                .font(Font::MONOSPACE)
                .color(color)
                .into()
        };

        container(
            scrollable(column![body, Space::with_height(4)].padding(Padding::from([8, 12])))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fixed(OUTPUT_HEIGHT))
        .style(style::console)
        .into()
    }
}
