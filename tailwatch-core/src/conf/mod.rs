mod error;
mod loader;
mod tailer_config;


pub use error::ConfigError;
pub use loader::load_config;
pub use tailer_config::{
    DEFAULT_INTERVAL_SECS, DEFAULT_PATH, DEFAULT_THRESHOLD, DEFAULT_WINDOW_SECS, MAX_BUCKETS,
    MAX_INTERVAL_SECS, TailerConfig, ValidatedConfig,
};
