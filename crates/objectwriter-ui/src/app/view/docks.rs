use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row, Space};
use iced::{Background, Border, Element, Length, Padding, Theme};

use crate::app::{App, Message, TopMenu};
use crate::style;
use crate::theme::colors;

impl App {
    pub fn view_toolbar(&self) -> Element<'_, Message> {
        let mut menu_items: Vec<Element<'_, Message>> = Vec::new();

        for menu in TopMenu::ALL {
            let is_active = self.active_menu == Some(menu);

            let menu_btn = button(text(menu.label()).size(12).color(if is_active {
                colors::TEXT_PRIMARY
            } else {
                colors::TEXT_SECONDARY
            }))
            .padding(Padding::from([6, 10]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = if is_active {
                    colors::BG_ACTIVE
                } else {
                    match status {
                        button::Status::Hovered => colors::BG_HOVER,
                        _ => colors::BG_MEDIUM,
                    }
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::ToggleTopMenu(menu));

            menu_items.push(menu_btn.into());
        }

        menu_items.push(horizontal_space().into());

        let toolbar = Row::with_children(menu_items)
            .spacing(2)
            .padding(Padding::from([4, 8]))
            .align_y(iced::Alignment::Center);

        container(toolbar)
            .width(Length::Fill)
            .style(style::bar)
            .into()
    }

    /// Dropdown entry with its shortcut hint.
    pub fn menu_item<'a>(label: &'a str, shortcut: &'a str, msg: Message) -> Element<'a, Message> {
        button(
            row![
                text(label).size(12).color(colors::TEXT_PRIMARY),
                horizontal_space(),
                text(shortcut).size(11).color(colors::TEXT_MUTED),
            ]
            .width(Length::Fill)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 16]))
        .style(style::menu_button)
        .on_press(msg)
        .into()
    }

    pub fn menu_separator<'a>() -> Element<'a, Message> {
        container(Space::new(Length::Fill, 1))
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BORDER)),
                ..Default::default()
            })
            .into()
    }

    pub fn view_menu_dropdown(&self) -> Element<'_, Message> {
        let menu = match self.active_menu {
            Some(m) => m,
            None => return Space::new(0, 0).into(),
        };

        let mut items: Vec<Element<'_, Message>> = Vec::new();

        match menu {
            TopMenu::File => {
                items.push(Self::menu_item("Open File...", "Ctrl+O", Message::OpenFile));
                items.push(Self::menu_item("Save File...", "Ctrl+S", Message::SaveFile));
                items.push(Self::menu_separator());
                items.push(Self::menu_item("Compile...", "F7", Message::ShowCompileDialog));
                items.push(Self::menu_separator());
                items.push(Self::menu_item("Exit", "Ctrl+Q", Message::Exit));
            }
            TopMenu::Run => {
                items.push(Self::menu_item("Preview Output", "F5", Message::Preview));
                items.push(Self::menu_item("Compile...", "F7", Message::ShowCompileDialog));
            }
            TopMenu::View => {
                items.push(Self::menu_item("Zoom In", "Ctrl++", Message::ZoomIn));
                items.push(Self::menu_item("Zoom Out", "Ctrl+-", Message::ZoomOut));
                items.push(Self::menu_item("Reset Zoom", "Ctrl+0", Message::ZoomReset));
            }
            TopMenu::Help => {
                items.push(Self::menu_item("About ObjectWriter", "", Message::ShowAbout));
            }
        }

        let menu_content = Column::with_children(items)
            .width(Length::Fixed(240.0))
            .padding(4);

        let menu_offset_x = match menu {
            TopMenu::File => 8.0,
            TopMenu::Run => 46.0,
            TopMenu::View => 86.0,
            TopMenu::Help => 130.0,
        };

        let menu_box = container(menu_content).style(|_| container::Style {
            background: Some(Background::Color(colors::BG_MEDIUM)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        });

        column![
            Space::with_height(Length::Fixed(32.0)),
            row![Space::with_width(Length::Fixed(menu_offset_x)), menu_box],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let file_info = if self.modified {
            format!("{} [modified]", self.document.display_name())
        } else {
            self.document.display_name()
        };

        let cursor_info = {
            let (line, col) = self.content.cursor_position();
            format!("Ln {}, Col {}", line + 1, col + 1)
        };

        let status_content = row![
            text(&self.status_message)
                .size(12)
                .color(colors::TEXT_SECONDARY),
            horizontal_space(),
            text(file_info).size(12).color(colors::TEXT_SECONDARY),
            Space::with_width(24),
            text(cursor_info).size(12).color(colors::TEXT_PRIMARY),
            Space::with_width(24),
            text("Python").size(12).color(colors::ACCENT),
            Space::with_width(12),
        ]
        .padding(Padding::from([6, 12]))
        .align_y(iced::Alignment::Center);

        container(status_content)
            .width(Length::Fill)
            .height(28)
            .style(style::bar)
            .into()
    }
}
