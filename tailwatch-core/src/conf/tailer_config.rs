use crate::conf::error::ConfigError;
use serde::Deserialize;
use std::ops::Deref;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PATH: &str = "/tmp/access.log";
pub const DEFAULT_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_WINDOW_SECS: u64 = 120;
pub const DEFAULT_THRESHOLD: u64 = 10;

/// Longest accepted interval: one day.
pub const MAX_INTERVAL_SECS: u64 = 86_400;
/// Most rolling buckets a window may hold.
pub const MAX_BUCKETS: u64 = 86_400;

/// User-facing tailer settings, as read from a config file or the command line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TailerConfig {
    /// The access log being watched.
    pub path: PathBuf,

    /// Process the current content of the file before tailing new lines.
    /// When false, tailing starts at end-of-file.
    pub parse_existing: bool,

    /// Seconds between statistics reports. Also the width of one rolling bucket.
    pub interval: u64,

    /// Seconds of traffic considered when checking the threshold.
    pub window: u64,

    /// Average hits/sec over the window above which an alert is raised.
    pub threshold: u64,
}

impl Default for TailerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            parse_existing: false,
            interval: DEFAULT_INTERVAL_SECS,
            window: DEFAULT_WINDOW_SECS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl TailerConfig {
    /// Reject interval/window combinations that leave the rolling buffer empty or
    /// too large to allocate.
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        if self.interval > MAX_INTERVAL_SECS {
            return Err(ConfigError::IntervalTooLong {
                interval: self.interval,
                max: MAX_INTERVAL_SECS,
            });
        }

        if self.window < self.interval {
            return Err(ConfigError::WindowShorterThanInterval {
                window: self.window,
                interval: self.interval,
            });
        }

        let buckets = self.window / self.interval;
        let bucket_count = usize::try_from(buckets)
            .ok()
            .filter(|_| buckets <= MAX_BUCKETS)
            .ok_or(ConfigError::TooManyBuckets {
                buckets,
                max: MAX_BUCKETS,
            })?;

        Ok(ValidatedConfig {
            config: self,
            bucket_count,
        })
    }
}

/// A `TailerConfig` known to produce between one and `MAX_BUCKETS` rolling buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    config: TailerConfig,
    bucket_count: usize,
}

impl ValidatedConfig {
    /// Number of interval-sized buckets that fit in the window (always >= 1).
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    pub fn interval_duration(&self) -> Duration {
        Duration::from_secs(self.config.interval)
    }
}

impl Deref for ValidatedConfig {
    type Target = TailerConfig;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}
