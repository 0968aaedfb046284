use crate::parse::entry::{LogEntry, Request};
use crate::parse::error::ParseError;
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::str::FromStr;

/// `dd/Mon/yyyy:HH:mm:ss ±HHMM`
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

static LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^(?P<remote>\S+) (?P<rfc_user>\S+) (?P<user>\S+) "#,
        r#"\[(?P<timestamp>[^\]]+)\] "#,
        r#""(?P<request>(?P<verb>\w+) /(?P<path>[^/\s"]+)(?:/(?P<page>[^\s"]*))? (?P<protocol>[^"]+))" "#,
        r#"(?P<status>\d+) (?P<bytes>\d+)(?:\s.*)?$"#,
    ))
    .expect("access log pattern compiles")
});

/// Parse one raw line. Trailing `\r`/`\n` must already be stripped.
pub fn parse_line(line: &str) -> Result<LogEntry, ParseError> {
    let caps = LINE.captures(line).ok_or_else(|| ParseError::Format {
        line: line.to_string(),
    })?;

    let raw_ts = &caps["timestamp"];
    let timestamp =
        DateTime::parse_from_str(raw_ts, TIMESTAMP_FORMAT).map_err(|e| ParseError::Timestamp {
            line: line.to_string(),
            value: raw_ts.to_string(),
            source: e,
        })?;

    Ok(LogEntry {
        remote: caps["remote"].to_string(),
        user: caps["user"].to_string(),
        timestamp,
        request: Request {
            verb: caps["verb"].to_string(),
            path: caps["path"].to_string(),
            page: caps
                .name("page")
                .map(|m| m.as_str())
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            original: caps["request"].to_string(),
        },
        status: number(line, &caps, "status")?,
        bytes: number(line, &caps, "bytes")?,
    })
}

fn number<T>(line: &str, caps: &Captures<'_>, field: &'static str) -> Result<T, ParseError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let value = &caps[field];
    value.parse().map_err(|e| ParseError::Number {
        line: line.to_string(),
        field,
        value: value.to_string(),
        source: e,
    })
}

impl FromStr for LogEntry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}
