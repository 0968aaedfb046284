use chrono::Duration as LogDuration;
use integration_tests::harness::{LogFile, TailRun, start, tagged};
use pretty_assertions::assert_eq;
use std::time::Duration;
use tailwatch_core::conf::TailerConfig;
use tailwatch_core::tail::{Shutdown, TailError, TracingSink, tail_file};
use tracing::Level;

const SETTLE: Duration = Duration::from_millis(400);

#[test]
fn existing_content_is_parsed_when_asked() {
    // Arrange
    let mut log = LogFile::new();
    log.append_traffic(start(), 21, 2);
    log.append("definitely not an access log line");

    // Act
    let run = TailRun::start(log.path(), true, 10, 120, 10);
    let events = run.stop_after(SETTLE);

    // Assert
    let stats = tagged(&events, "statistics");
    assert_eq!(stats.len(), 2);
    assert!(stats.iter().all(|e| e.level == Level::INFO));
    assert!(stats[0].message().starts_with("Last 10 seconds:"));
    assert!(stats[0].message().contains("20 hits (2/sec)"));

    let bad = tagged(&events, "bad_data");
    assert_eq!(bad.len(), 1);
    assert_eq!(bad[0].level, Level::ERROR);
    assert!(bad[0].message().contains("definitely not an access log line"));

    assert!(
        events
            .iter()
            .any(|e| e.message().starts_with("processing "))
    );
}

#[test]
fn existing_content_is_skipped_by_default() {
    // Arrange
    let mut log = LogFile::new();
    for _ in 0..5 {
        log.append("garbage written before the tailer started");
    }
    let run = TailRun::start(log.path(), false, 10, 120, 10);

    // Act
    log.append_traffic(start(), 11, 2);
    let events = run.stop_after(SETTLE);

    // Assert
    assert!(tagged(&events, "bad_data").is_empty());

    let stats = tagged(&events, "statistics");
    assert_eq!(stats.len(), 1);
    assert!(stats[0].message().contains("20 hits (2/sec)"));
}

#[test]
fn high_traffic_raises_then_recovers() {
    // Arrange
    let mut log = LogFile::new();
    let run = TailRun::start(log.path(), false, 10, 20, 1);

    // Act
    log.append_traffic(start(), 10, 5);
    log.append_traffic(start() + LogDuration::seconds(10), 40, 1);
    let events = run.stop_after(SETTLE);

    // Assert
    let sequence: Vec<&str> = events.iter().filter_map(|e| e.event()).collect();
    assert_eq!(
        sequence,
        vec![
            "high_traffic",
            "statistics",
            "statistics",
            "normal_traffic",
            "statistics",
            "statistics",
        ]
    );

    let raised = tagged(&events, "high_traffic");
    assert_eq!(raised[0].level, Level::WARN);
    assert!(
        raised[0]
            .message()
            .starts_with("high traffic alert raised, rate=3/sec, at=")
    );

    let recovered = tagged(&events, "normal_traffic");
    assert_eq!(recovered[0].level, Level::WARN);
    assert!(
        recovered[0]
            .message()
            .starts_with("alert recovered, rate=1/sec, at=")
    );
}

#[test]
fn missing_file_fails_to_open() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let config = TailerConfig {
        path: dir.path().join("absent.log"),
        ..Default::default()
    }
    .validate()
    .unwrap();
    let shutdown = Shutdown::new();

    // Act
    let result = tail_file(&config, TracingSink, &shutdown);

    // Assert
    assert!(matches!(result, Err(TailError::Open { .. })));
}
