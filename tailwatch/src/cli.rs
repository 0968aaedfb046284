use clap::Parser;
use std::path::PathBuf;
use tailwatch_core::conf::{ConfigError, TailerConfig, load_config};
use tailwatch_core::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(
    name = "tailwatch",
    version,
    about = "Tail an access log and report traffic statistics and high-traffic alerts"
)]
pub struct Cli {
    /// Optional TOML config file; flags given on the command line take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// The path to watch [default: /tmp/access.log]
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Process the current content of the file before tailing new lines
    #[arg(short = 'e', long, conflicts_with = "skip_existing")]
    pub parse_existing: bool,

    /// Skip over existing content and only report on new lines (the default)
    #[arg(short, long)]
    pub skip_existing: bool,

    /// Seconds between statistics reports [default: 10]
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Seconds of traffic to consider when triggering threshold alerts [default: 120]
    #[arg(short, long)]
    pub window: Option<u64>,

    /// Requests per second over the window that trigger a high traffic alert [default: 10]
    #[arg(short, long)]
    pub threshold: Option<u64>,

    /// Log output format: text or json [default: text on a terminal, json otherwise]
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Defaults, then the config file, then command-line flags.
    pub fn resolve(&self) -> Result<TailerConfig, ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => TailerConfig::default(),
        };

        if let Some(path) = &self.path {
            cfg.path = path.clone();
        }
        if self.parse_existing {
            cfg.parse_existing = true;
        }
        if self.skip_existing {
            cfg.parse_existing = false;
        }
        if let Some(interval) = self.interval {
            cfg.interval = interval;
        }
        if let Some(window) = self.window {
            cfg.window = window;
        }
        if let Some(threshold) = self.threshold {
            cfg.threshold = threshold;
        }

        Ok(cfg)
    }
}
