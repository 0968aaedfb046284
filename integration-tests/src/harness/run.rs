use crate::harness::tracing::{CapturedEvent, capture};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tailwatch_core::conf::TailerConfig;
use tailwatch_core::tail::{Shutdown, TailError, TracingSink, tail_file};

/// A `tail_file` call running on a background thread with its output captured.
pub struct TailRun {
    shutdown: Shutdown,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
    handle: JoinHandle<Result<(), TailError>>,
}

impl TailRun {
    pub fn start(
        path: &Path,
        parse_existing: bool,
        interval: u64,
        window: u64,
        threshold: u64,
    ) -> Self {
        let config = TailerConfig {
            path: path.to_path_buf(),
            parse_existing,
            interval,
            window,
            threshold,
        }
        .validate()
        .unwrap();

        let shutdown = Shutdown::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        let handle = thread::spawn({
            let shutdown = shutdown.clone();
            let events = events.clone();
            move || capture(events, || tail_file(&config, TracingSink, &shutdown))
        });

        // let the tailer open the file and pick its offset
        thread::sleep(Duration::from_millis(200));

        Self {
            shutdown,
            events,
            handle,
        }
    }

    /// Give the tailer time to drain, stop it, and return everything it logged.
    pub fn stop_after(self, settle: Duration) -> Vec<CapturedEvent> {
        thread::sleep(settle);
        self.shutdown.trigger();
        self.handle.join().unwrap().unwrap();

        self.events.lock().unwrap().clone()
    }
}

/// Captured events carrying the given `event` tag.
pub fn tagged<'a>(events: &'a [CapturedEvent], tag: &str) -> Vec<&'a CapturedEvent> {
    events.iter().filter(|e| e.event() == Some(tag)).collect()
}
