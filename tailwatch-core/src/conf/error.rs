use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // Validation
    #[error("invalid interval: 0s (must be at least 1s)")]
    ZeroInterval,

    #[error(
        "invalid window: {window}s is shorter than the {interval}s interval (at least one bucket is required)"
    )]
    WindowShorterThanInterval { window: u64, interval: u64 },

    #[error("invalid interval: {interval}s (must be at most {max}s)")]
    IntervalTooLong { interval: u64, max: u64 },

    #[error("invalid window: {buckets} buckets of one interval each (at most {max} are allowed)")]
    TooManyBuckets { buckets: u64, max: u64 },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
