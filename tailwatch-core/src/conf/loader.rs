use crate::conf::error::ConfigError;
use crate::conf::tailer_config::TailerConfig;

use std::fs;
use std::path::Path;

/// Read a TOML config file. Keys missing from the file keep their defaults.
pub fn load_config(path: &Path) -> Result<TailerConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    parse_config(path, &raw)
}

pub(crate) fn parse_config(path: &Path, raw: &str) -> Result<TailerConfig, ConfigError> {
    toml::from_str(raw).map_err(|e| ConfigError::parse(path, e))
}
