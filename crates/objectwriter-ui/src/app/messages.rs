use iced::keyboard;
use iced::widget::text_editor;
use iced::window;
use std::path::PathBuf;

use objectwriter_core::ExecutionEvent;

use crate::app::types::TopMenu;

#[derive(Debug, Clone)]
pub enum Message {
    // File operations
    OpenFile,
    SaveFile,
    Exit,

    // Editor
    EditorAction(text_editor::Action),

    // Preview
    Preview,

    // Compile dialog
    ShowCompileDialog,
    CloseCompileDialog,
    OutputDirChanged(String),
    BrowseOutputDir,
    ExtraArgsChanged(String),
    UseRecommended,
    UseCustom,
    CustomCommandChanged(String),
    RunCustomCommand,
    PickIcon,

    // Build process
    Execution(ExecutionEvent),
    BusyTick,

    // Top menu bar
    ToggleTopMenu(TopMenu),
    CloseTopMenu,

    // Zoom
    ZoomIn,
    ZoomOut,
    ZoomReset,

    // Help
    ShowAbout,
    HideAbout,

    // Window
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    CloseRequested(window::Id),

    // Async results
    OpenPathChosen(Option<PathBuf>),
    SavePathChosen(Option<PathBuf>),
    OutputDirChosen(Option<PathBuf>),
    ToolChecked(bool),
    InstallConsent(bool),
    ToolInstalled(Result<(), String>),
    IconChosen(Option<PathBuf>),
    DialogClosed,
}
