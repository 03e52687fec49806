//! # ObjectWriter UI
//!
//! The editor window, built with iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`] holds the document, the preview output and the
//!   compile dialog
//! - **Message**: every click, keystroke and process event
//! - **Update**: `App::update` applies a message and may return a `Task`
//! - **View**: `App::view` renders the current state
//!
//! Native dialogs (file pickers, alerts, yes/no prompts) come from `rfd` and
//! run as tasks, so their answers arrive as messages like everything else.

pub mod app;
pub mod components;
pub mod style;
pub mod theme;

pub use app::{run, App, Flags};
