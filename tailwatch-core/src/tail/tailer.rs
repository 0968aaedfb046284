use crate::conf::ValidatedConfig;
use crate::stats::Statistician;
use crate::tail::alert::{AlertState, AlertTransition};
use crate::tail::constants::{POLL_INTERVAL, REPORT_DEBOUNCE};
use crate::tail::error::TailError;
use crate::tail::render::{render_alert, render_report};
use crate::tail::shutdown::Shutdown;
use crate::tail::sink::{OutputEvent, ReportSink};
use chrono::Utc;
use std::io::{BufRead, Seek, SeekFrom};
use std::thread;
use std::time::{Duration, Instant};
use tracing::Level;

#[derive(Debug, Clone, Copy)]
pub struct TailOptions {
    pub poll_interval: Duration,
    pub report_debounce: Duration,
}

impl Default for TailOptions {
    fn default() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
            report_debounce: REPORT_DEBOUNCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No complete line was available.
    Idle,
    /// This many complete lines were consumed.
    Drained(usize),
}

pub struct Tailer<S, K> {
    interval: Duration,
    interval_secs: u64,
    window_secs: u64,
    options: TailOptions,

    statistician: S,
    sink: K,
    alert: AlertState,

    // bytes consumed so far, always at a line boundary
    offset: u64,
    next_idle_flush: Instant,
}

impl<S, K> Tailer<S, K>
where
    S: Statistician,
    K: ReportSink,
{
    pub fn new(config: &ValidatedConfig, statistician: S, sink: K) -> Self {
        let interval = config.interval_duration();

        Self {
            interval,
            interval_secs: config.interval,
            window_secs: config.window,
            options: TailOptions::default(),
            statistician,
            sink,
            alert: AlertState::default(),
            offset: 0,
            next_idle_flush: Instant::now() + interval,
        }
    }

    pub fn with_options(mut self, options: TailOptions) -> Self {
        self.options = options;
        self
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_alerted(&self) -> bool {
        self.alert.is_alerted()
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn statistician(&self) -> &S {
        &self.statistician
    }

    /// Tail `stream` from `offset` until `shutdown` is triggered.
    ///
    /// Only I/O failures end the loop early; malformed lines are reported and skipped.
    pub fn run<R>(
        &mut self,
        mut stream: R,
        offset: u64,
        shutdown: &Shutdown,
    ) -> Result<(), TailError>
    where
        R: BufRead + Seek,
    {
        self.offset = stream.seek(SeekFrom::Start(offset))?;
        tracing::debug!(offset = self.offset, "tailer started");

        while !shutdown.is_triggered() {
            if let PollOutcome::Drained(lines) = self.poll(&mut stream)? {
                tracing::trace!(lines, offset = self.offset, "drained");
                continue;
            }

            if shutdown.is_triggered() {
                break;
            }

            thread::sleep(self.options.poll_interval);
            self.flush_if_idle(Instant::now());
        }

        tracing::debug!(offset = self.offset, "tailer stopped");
        Ok(())
    }

    /// Consume every complete line currently available. A trailing partial line is left
    /// in the stream for the next poll.
    pub fn poll<R>(&mut self, stream: &mut R) -> Result<PollOutcome, TailError>
    where
        R: BufRead + Seek,
    {
        let mut buf = Vec::new();
        let mut lines = 0;

        loop {
            buf.clear();
            let read = stream.read_until(b'\n', &mut buf)?;
            if read == 0 {
                break;
            }

            if buf.last() != Some(&b'\n') {
                stream.seek(SeekFrom::Start(self.offset))?;
                break;
            }

            self.offset += read as u64;
            lines += 1;

            let line = String::from_utf8_lossy(&buf);
            self.consume(line.trim_end_matches(['\n', '\r']));
        }

        Ok(match lines {
            0 => PollOutcome::Idle,
            n => PollOutcome::Drained(n),
        })
    }

    /// Report if the file has been quiet past the idle-flush deadline.
    pub fn flush_if_idle(&mut self, now: Instant) -> bool {
        if now <= self.next_idle_flush {
            return false;
        }

        self.report_at(now);
        true
    }

    pub fn report(&mut self) {
        self.report_at(Instant::now());
    }

    fn consume(&mut self, line: &str) {
        match self.statistician.update(line) {
            Ok(true) => self.report(),
            Ok(false) => {}
            Err(err) => self
                .sink
                .emit(Level::ERROR, OutputEvent::BadData, &err.to_string()),
        }
    }

    fn report_at(&mut self, now: Instant) {
        self.next_idle_flush = now + self.interval + self.options.report_debounce;

        let stats = self.statistician.statistics();

        if let Some(transition) = self.alert.observe(stats.threshold_exceeded) {
            let event = match transition {
                AlertTransition::Raised => OutputEvent::HighTraffic,
                AlertTransition::Recovered => OutputEvent::NormalTraffic,
            };
            let message = render_alert(transition, stats.window_average, Utc::now());
            self.sink.emit(Level::WARN, event, &message);
        }

        let message = render_report(&stats, self.interval_secs, self.window_secs);
        self.sink.emit(Level::INFO, OutputEvent::Statistics, &message);
    }
}
