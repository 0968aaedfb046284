use crate::stats::Statistics;
use crate::tail::alert::AlertTransition;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write;

const LABEL_WIDTH: usize = 18;

/// Multi-line interval report: a header line, then one line per non-empty breakdown.
///
/// ```text
/// Last 10 seconds:  100 hits (10/sec). Average over 120 seconds: 9/sec.
/// Top Sections:     api: 40, user: 30, blog: 20, report: 10
/// ```
pub fn render_report(stats: &Statistics, interval_secs: u64, window_secs: u64) -> String {
    let mut out = format!(
        "{:<width$}{} hits ({}/sec). Average over {} seconds: {}/sec.",
        format!("Last {interval_secs} seconds:"),
        stats.total_requests,
        stats.requests_per_second,
        window_secs,
        stats.window_average,
        width = LABEL_WIDTH,
    );

    for (kind, report) in stats.reports.iter().filter(|(_, r)| !r.is_empty()) {
        let pairs = report
            .iter()
            .map(|(key, count)| format!("{key}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");

        let _ = write!(
            out,
            "\n{:<width$}{pairs}",
            format!("{kind}:"),
            width = LABEL_WIDTH
        );
    }

    out
}

pub fn render_alert(transition: AlertTransition, window_average: u64, at: DateTime<Utc>) -> String {
    let at = at.to_rfc3339_opts(SecondsFormat::Secs, true);

    match transition {
        AlertTransition::Raised => {
            format!("high traffic alert raised, rate={window_average}/sec, at={at}")
        }
        AlertTransition::Recovered => {
            format!("alert recovered, rate={window_average}/sec, at={at}")
        }
    }
}
