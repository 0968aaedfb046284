use crate::parse::LogEntry;
use crate::stats::top_n::{TOP_N, Tally, TopN};
use std::fmt;
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    TopSections,
    TopUsers,
    TopErrors,
    ProblemSections,
}

impl ReportKind {
    /// Report order in rendered output.
    pub const ALL: [ReportKind; 4] = [
        ReportKind::TopSections,
        ReportKind::TopUsers,
        ReportKind::TopErrors,
        ReportKind::ProblemSections,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::TopSections => "Top Sections",
            ReportKind::TopUsers => "Top Users",
            ReportKind::TopErrors => "Top Errors",
            ReportKind::ProblemSections => "Problem Sections",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed set of top-N breakdowns for one interval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reports {
    top_sections: TopN,
    top_users: TopN,
    top_errors: TopN,
    problem_sections: TopN,
}

impl Reports {
    pub(crate) fn from_entries(entries: &[LogEntry]) -> Self {
        let mut sections = Tally::default();
        let mut users = Tally::default();
        let mut errors = Tally::default();
        let mut problems = Tally::default();

        for entry in entries {
            sections.record(&entry.request.path);
            users.record(&entry.user);

            if entry.is_error() {
                errors.record(&entry.status.to_string());
                problems.record(&entry.request.path);
            }
        }

        Self {
            top_sections: sections.top(TOP_N),
            top_users: users.top(TOP_N),
            top_errors: errors.top(TOP_N),
            problem_sections: problems.top(TOP_N),
        }
    }

    pub fn get(&self, kind: ReportKind) -> &TopN {
        match kind {
            ReportKind::TopSections => &self.top_sections,
            ReportKind::TopUsers => &self.top_users,
            ReportKind::TopErrors => &self.top_errors,
            ReportKind::ProblemSections => &self.problem_sections,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ReportKind, &TopN)> {
        ReportKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

/// Traffic figures for one closed interval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Hits in the interval.
    pub total_requests: u64,
    /// Interval-local rate, rounded up.
    pub requests_per_second: u64,
    /// Rolling rate over the whole window, rounded up.
    pub window_average: u64,
    /// `window_average > threshold`.
    pub threshold_exceeded: bool,
    pub reports: Reports,
}

impl Statistics {
    pub fn new(
        total_requests: u64,
        requests_per_second: u64,
        window_average: u64,
        threshold_exceeded: bool,
    ) -> Self {
        Self {
            total_requests,
            requests_per_second,
            window_average,
            threshold_exceeded,
            reports: Reports::default(),
        }
    }
}

/// A computed snapshot waiting for its single consumer.
#[derive(Debug, Default)]
pub(crate) enum Snapshot {
    Fresh(Statistics),
    #[default]
    Stale,
}

impl Snapshot {
    pub(crate) fn take(&mut self) -> Option<Statistics> {
        match mem::take(self) {
            Snapshot::Fresh(stats) => Some(stats),
            Snapshot::Stale => None,
        }
    }

    pub(crate) fn is_fresh(&self) -> bool {
        matches!(self, Snapshot::Fresh(_))
    }
}
