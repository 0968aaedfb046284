use crate::conf::ValidatedConfig;
use crate::stats::StatisticsEngine;
use crate::tail::error::TailError;
use crate::tail::shutdown::Shutdown;
use crate::tail::sink::ReportSink;
use crate::tail::tailer::Tailer;
use std::fs::File;
use std::io::BufReader;

/// Open the configured log and pick the starting offset: 0 when existing content is
/// parsed, end-of-file otherwise.
pub fn open_log(config: &ValidatedConfig) -> Result<(BufReader<File>, u64), TailError> {
    let file = File::open(&config.path).map_err(|source| TailError::Open {
        path: config.path.clone(),
        source,
    })?;

    let offset = if config.parse_existing {
        0
    } else {
        file.metadata()?.len()
    };

    Ok((BufReader::new(file), offset))
}

/// Tail the configured file with a fresh `StatisticsEngine` until `shutdown` triggers.
pub fn tail_file<K: ReportSink>(
    config: &ValidatedConfig,
    sink: K,
    shutdown: &Shutdown,
) -> Result<(), TailError> {
    let (reader, offset) = open_log(config)?;
    tracing::info!(path = %config.path.display(), offset, "processing {}", config.path.display());

    let engine = StatisticsEngine::new(config);
    Tailer::new(config, engine, sink).run(reader, offset, shutdown)
}
