use std::time::Duration;

/// Sleep between polls when no complete line is available.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Added to the idle-flush deadline after every report, so a log-triggered report and the
/// wall-clock flush do not fire back to back for the same interval.
pub const REPORT_DEBOUNCE: Duration = Duration::from_millis(750);
