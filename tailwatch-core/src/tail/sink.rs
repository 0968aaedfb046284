use tracing::Level;

/// Output category attached to every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputEvent {
    NormalTraffic,
    HighTraffic,
    Statistics,
    BadData,
}

impl OutputEvent {
    pub fn name(self) -> &'static str {
        match self {
            OutputEvent::NormalTraffic => "normal_traffic",
            OutputEvent::HighTraffic => "high_traffic",
            OutputEvent::Statistics => "statistics",
            OutputEvent::BadData => "bad_data",
        }
    }
}

/// Where the tailer sends reports, alerts and bad-data notices.
pub trait ReportSink {
    fn emit(&mut self, level: Level, event: OutputEvent, message: &str);
}

/// Forwards everything to `tracing`, tagged with an `event` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn emit(&mut self, level: Level, event: OutputEvent, message: &str) {
        let event = event.name();
        match level {
            Level::ERROR => tracing::error!(event, "{message}"),
            Level::WARN => tracing::warn!(event, "{message}"),
            Level::INFO => tracing::info!(event, "{message}"),
            Level::DEBUG => tracing::debug!(event, "{message}"),
            _ => tracing::trace!(event, "{message}"),
        }
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, level: Level, event: OutputEvent, message: &str) {
        (**self).emit(level, event, message)
    }
}
