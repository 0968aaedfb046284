use chrono::{DateTime, FixedOffset};

/// The quoted request section of a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub verb: String,
    /// First path segment, without the leading slash: `api` for `/api/user`.
    pub path: String,
    /// Whatever follows the first segment: `user` for `/api/user`.
    pub page: Option<String>,
    /// The full request text between the quotes, verbatim.
    pub original: String,
}

/// One parsed access log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub remote: String,
    /// Authenticated user, `-` when absent.
    pub user: String,
    /// Log time, not wall clock.
    pub timestamp: DateTime<FixedOffset>,
    pub request: Request,
    pub status: u16,
    pub bytes: u64,
}

impl LogEntry {
    /// 4xx and 5xx responses.
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}
