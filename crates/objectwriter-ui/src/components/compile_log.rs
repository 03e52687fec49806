//! Text shown in the compile dialog's log panel.

use iced::widget::scrollable;

/// Id of the scrollable that shows the log, for snapping to its end.
pub fn log_scroll_id() -> scrollable::Id {
    scrollable::Id::new("compile-log")
}

/// Append-only output of one packaging run.
///
/// Lines are kept joined so the view renders a single text block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileLog {
    contents: String,
    lines: usize,
}

impl CompileLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl AsRef<str>) {
        if self.lines > 0 {
            self.contents.push('\n');
        }
        self.contents.push_str(line.as_ref());
        self.lines += 1;
    }

    pub fn clear(&mut self) {
        self.contents.clear();
        self.lines = 0;
    }

    pub fn text(&self) -> &str {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }

    pub fn last_line(&self) -> Option<&str> {
        if self.is_empty() {
            None
        } else {
            self.contents.rsplit('\n').next()
        }
    }
}
