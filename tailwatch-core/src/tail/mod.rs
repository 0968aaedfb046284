//! Polling loop over the watched file.
//!
//! The tailer drains complete lines into a `Statistician`, reports whenever a log-time
//! interval closes, and falls back to a wall-clock idle flush when the file goes quiet.
//! Every report also runs the alert state machine, which only speaks up on transitions.

mod alert;
mod constants;
mod error;
mod render;
mod shutdown;
mod sink;
mod source;
mod tailer;

#[cfg(test)]
mod tests;

pub use alert::{AlertState, AlertTransition};
pub use constants::{POLL_INTERVAL, REPORT_DEBOUNCE};
pub use error::TailError;
pub use render::{render_alert, render_report};
pub use shutdown::Shutdown;
pub use sink::{OutputEvent, ReportSink, TracingSink};
pub use source::{open_log, tail_file};
pub use tailer::{PollOutcome, TailOptions, Tailer};
