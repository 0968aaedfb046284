use std::num::ParseIntError;
use thiserror::Error;

/// A single line that could not be parsed. Recoverable: callers log it and move on.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line does not match access log format: {line}")]
    Format { line: String },

    #[error("invalid timestamp '{value}' in line: {line}")]
    Timestamp {
        line: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid {field} '{value}' in line: {line}")]
    Number {
        line: String,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    /// The offending raw line.
    pub fn line(&self) -> &str {
        match self {
            Self::Format { line } | Self::Timestamp { line, .. } | Self::Number { line, .. } => {
                line
            }
        }
    }
}
