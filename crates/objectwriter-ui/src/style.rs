//! Style functions shared by the views.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

use crate::theme::colors;

/// Filled accent button for the main action of a dialog.
pub fn primary_button(_: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => colors::ACCENT_HOVER,
        button::Status::Disabled => colors::BG_ACTIVE,
        _ => colors::ACCENT,
    };
    let text_color = match status {
        button::Status::Disabled => colors::TEXT_MUTED,
        _ => Color::WHITE,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outlined neutral button.
pub fn secondary_button(_: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => colors::BG_HOVER,
        _ => colors::BG_LIGHT,
    };
    let text_color = match status {
        button::Status::Disabled => colors::TEXT_MUTED,
        _ => colors::TEXT_PRIMARY,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color,
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Flat button used in menus.
pub fn menu_button(_: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => colors::BG_HOVER,
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: colors::TEXT_PRIMARY,
        border: Border::default(),
        ..Default::default()
    }
}

/// Box around a modal dialog.
pub fn modal(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BG_MEDIUM)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Dimmed layer behind a modal.
pub fn backdrop(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BACKDROP)),
        ..Default::default()
    }
}

/// Dark panel for process output.
pub fn console(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BG_CONSOLE)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Top bar and status bar.
pub fn bar(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BG_MEDIUM)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}
