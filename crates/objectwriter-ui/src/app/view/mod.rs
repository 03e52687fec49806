pub mod dialogs;
pub mod docks;
pub mod editor;

use iced::widget::{column, container, mouse_area, stack, Space};
use iced::{Background, Element, Length};

use crate::app::{App, Message};
use crate::style;
use crate::theme::colors;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_toolbar(),
            self.view_main_area(),
            self.view_status_bar(),
        ];

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into();

        if let Some(dialog) = &self.compile {
            stack![
                main_view,
                Self::backdrop(Message::CloseCompileDialog),
                self.view_compile_modal(dialog),
            ]
            .into()
        } else if self.about_visible {
            stack![
                main_view,
                Self::backdrop(Message::HideAbout),
                self.view_about_modal(),
            ]
            .into()
        } else if self.active_menu.is_some() {
            stack![
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::CloseTopMenu),
                main_view,
                self.view_menu_dropdown(),
            ]
            .into()
        } else {
            main_view
        }
    }

    /// Dimmed full-window layer that sends `on_press` when clicked.
    fn backdrop<'a>(on_press: Message) -> Element<'a, Message> {
        mouse_area(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(style::backdrop),
        )
        .on_press(on_press)
        .into()
    }
}
