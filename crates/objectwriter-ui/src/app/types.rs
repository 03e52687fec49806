use std::path::PathBuf;

use objectwriter_core::{CompileStage, Config};

use crate::components::CompileLog;

/// Launch options passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// File to open at startup
    pub file: Option<PathBuf>,
    pub config: Config,
}

/// State of the open compile dialog.
#[derive(Debug, Clone, Default)]
pub struct CompileDialog {
    pub stage: CompileStage,
    /// Output location field
    pub output_dir: String,
    /// Extra arguments appended to the recommended command
    pub extra_args: String,
    /// Raw command for custom mode
    pub custom_command: String,
    /// Progress line shown while parameters are gathered
    pub status: String,
    /// Command that was launched
    pub command: Option<String>,
    pub log: CompileLog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMenu {
    File,
    Run,
    View,
    Help,
}

impl TopMenu {
    pub const ALL: [TopMenu; 4] = [TopMenu::File, TopMenu::Run, TopMenu::View, TopMenu::Help];

    pub fn label(self) -> &'static str {
        match self {
            TopMenu::File => "File",
            TopMenu::Run => "Run",
            TopMenu::View => "View",
            TopMenu::Help => "Help",
        }
    }
}
