//! Access log line grammar.
//!
//! Each line of the watched file is expected to look like
//!
//! ```text
//! 127.0.0.1 - james [09/May/2018:16:00:39 +0000] "GET /report HTTP/1.0" 200 123
//! ```
//!
//! optionally followed by referrer and user-agent fields, which are accepted but ignored.

mod entry;
mod error;
mod line;

#[cfg(test)]
mod tests;

pub use entry::{LogEntry, Request};
pub use error::ParseError;
pub use line::{TIMESTAMP_FORMAT, parse_line};
