//! Reusable UI state holders.
//!
//! These keep no widget handles, only data, so `update` can drive them and
//! tests can check them without a window.

pub mod busy_indicator;
pub mod compile_log;

pub use busy_indicator::BusyIndicator;
pub use compile_log::CompileLog;
