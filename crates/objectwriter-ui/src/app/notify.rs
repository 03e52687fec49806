//! Native message dialogs.

use iced::Task;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use objectwriter_core::CoreError;

use super::Message;

/// Shows a modal message box and sends `then` once it is dismissed.
pub fn notify(level: MessageLevel, title: &str, body: &str, then: Message) -> Task<Message> {
    let title = title.to_string();
    let body = body.to_string();

    Task::perform(
        async move {
            AsyncMessageDialog::new()
                .set_level(level)
                .set_title(title.as_str())
                .set_description(body.as_str())
                .set_buttons(MessageButtons::Ok)
                .show()
                .await;
        },
        move |_| then.clone(),
    )
}

/// Shows an informational message box.
pub fn info(title: &str, body: &str) -> Task<Message> {
    notify(MessageLevel::Info, title, body, Message::DialogClosed)
}

/// Shows an error message box.
pub fn error(title: &str, body: &str) -> Task<Message> {
    tracing::warn!("{}: {}", title, body);
    notify(MessageLevel::Error, title, body, Message::DialogClosed)
}

/// Shows `err` in an error message box titled after its kind.
pub fn report(err: &CoreError) -> Task<Message> {
    error(err.title(), &err.to_string())
}

/// Asks a yes/no question; the answer arrives through `on_answer`.
pub fn confirm(title: &str, body: &str, on_answer: fn(bool) -> Message) -> Task<Message> {
    let title = title.to_string();
    let body = body.to_string();

    Task::perform(
        async move {
            let answer = AsyncMessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title(title.as_str())
                .set_description(body.as_str())
                .set_buttons(MessageButtons::YesNo)
                .show()
                .await;
            matches!(answer, MessageDialogResult::Yes)
        },
        on_answer,
    )
}
