
use crate::parse::ParseError;
use crate::stats::{Statistician, Statistics};
use crate::tail::{OutputEvent, ReportSink};
use std::collections::VecDeque;
use tracing::Level;

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub messages: Vec<(Level, OutputEvent, String)>,
}

impl RecordingSink {
    pub fn of(&self, event: OutputEvent) -> Vec<&(Level, OutputEvent, String)> {
        self.messages.iter().filter(|(_, e, _)| *e == event).collect()
    }

    pub fn events(&self) -> Vec<OutputEvent> {
        self.messages.iter().map(|(_, e, _)| *e).collect()
    }
}

impl ReportSink for RecordingSink {
    fn emit(&mut self, level: Level, event: OutputEvent, message: &str) {
        self.messages.push((level, event, message.to_string()));
    }
}

/// Canned statistician: every line closes an interval when `boundary` is set, lines equal
/// to `"bad"` fail to parse, and snapshots are handed out in order.
#[derive(Debug, Default)]
pub struct ScriptedStatistician {
    pub lines: Vec<String>,
    pub boundary: bool,
    pub snapshots: VecDeque<Statistics>,
}

impl ScriptedStatistician {
    pub fn reporting(snapshots: impl IntoIterator<Item = Statistics>) -> Self {
        Self {
            boundary: true,
            snapshots: snapshots.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl Statistician for ScriptedStatistician {
    fn update(&mut self, line: &str) -> Result<bool, ParseError> {
        self.lines.push(line.to_string());
        if line == "bad" {
            return Err(ParseError::Format {
                line: line.to_string(),
            });
        }
        Ok(self.boundary)
    }

    fn statistics(&mut self) -> Statistics {
        self.snapshots.pop_front().unwrap_or_default()
    }
}
