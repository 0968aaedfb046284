//! Interval statistics over parsed log entries.
//!
//! The engine keeps the entries of the interval that is currently open, plus a circular
//! buffer of hit counts for the intervals that make up the rolling window:
//!
//! ```text
//! line -> parse_line -> LogEntry -> StatisticsEngine -> Statistics
//! ```
//!
//! Interval boundaries are detected from log timestamps, never from the wall clock.

mod engine;
mod snapshot;
mod top_n;


use crate::parse::ParseError;

pub use engine::StatisticsEngine;
pub use snapshot::{ReportKind, Reports, Statistics};
pub use top_n::{TOP_N, TopN};

/// Something that turns log lines into interval statistics.
pub trait Statistician {
    /// Feed one raw line. Returns `true` when the line's timestamp closed an interval,
    /// in which case a snapshot is waiting in `statistics()`.
    fn update(&mut self, line: &str) -> Result<bool, ParseError>;

    /// Take the pending snapshot, computing one from the open interval if none is pending.
    fn statistics(&mut self) -> Statistics;
}
