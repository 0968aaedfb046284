use crate::conf::{ConfigError, TailerConfig, ValidatedConfig};
use crate::parse::{LogEntry, ParseError, parse_line};
use crate::stats::Statistician;
use crate::stats::snapshot::{Reports, Snapshot, Statistics};
use chrono::{DateTime, FixedOffset};

pub struct StatisticsEngine {
    interval_secs: i64,
    window_secs: u64,
    threshold: u64,

    // open interval
    entries: Vec<LogEntry>,
    hits: u64,
    last_boundary: Option<DateTime<FixedOffset>>,

    // rolling window, one slot per interval
    buckets: Vec<u64>,
    cursor: usize,

    snapshot: Snapshot,
}

impl StatisticsEngine {
    pub fn new(config: &ValidatedConfig) -> Self {
        Self {
            interval_secs: i64::try_from(config.interval).unwrap_or(i64::MAX),
            window_secs: config.window,
            threshold: config.threshold,
            entries: Vec::new(),
            hits: 0,
            last_boundary: None,
            buckets: vec![0; config.bucket_count()],
            cursor: 0,
            snapshot: Snapshot::Stale,
        }
    }

    pub fn from_config(config: TailerConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(&config.validate()?))
    }

    /// Add one parsed entry. Returns `true` when its timestamp closed the open interval.
    ///
    /// The entry that crosses a boundary is counted in the interval it opens.
    pub fn record(&mut self, entry: LogEntry) -> bool {
        let last = *self.last_boundary.get_or_insert(entry.timestamp);
        let elapsed = (entry.timestamp - last).num_seconds();

        let boundary = elapsed >= self.interval_secs;
        if boundary {
            self.buckets[self.cursor] = self.hits;
            self.snapshot = Snapshot::Fresh(self.compute());
            self.cursor = (self.cursor + 1) % self.buckets.len();
            self.entries.clear();
            self.hits = 0;
            self.last_boundary = Some(entry.timestamp);
        }

        self.hits += 1;
        self.entries.push(entry);

        boundary
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn has_pending_snapshot(&self) -> bool {
        self.snapshot.is_fresh()
    }

    pub(crate) fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    fn compute(&self) -> Statistics {
        let total_requests = self.entries.len() as u64;

        let requests_per_second = match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => {
                let span = (last.timestamp - first.timestamp).num_seconds().max(0) as u64;
                total_requests.div_ceil(span + 1)
            }
            _ => 0,
        };

        let window_average = self.buckets.iter().sum::<u64>().div_ceil(self.window_secs);

        Statistics {
            total_requests,
            requests_per_second,
            window_average,
            threshold_exceeded: window_average > self.threshold,
            reports: Reports::from_entries(&self.entries),
        }
    }
}

impl Statistician for StatisticsEngine {
    fn update(&mut self, line: &str) -> Result<bool, ParseError> {
        let entry = parse_line(line)?;
        Ok(self.record(entry))
    }

    fn statistics(&mut self) -> Statistics {
        if let Some(stats) = self.snapshot.take() {
            return stats;
        }

        // Idle flush: the log-time interval is still open, so the slot is refreshed with the
        // running hit count and the cursor stays put. The boundary commit later overwrites
        // the same slot with the final count.
        self.buckets[self.cursor] = self.hits;
        let stats = self.compute();
        self.entries.clear();
        stats
    }
}
