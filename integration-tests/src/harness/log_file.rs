use chrono::{DateTime, Duration, FixedOffset};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tailwatch_core::parse::TIMESTAMP_FORMAT;
use tempfile::NamedTempFile;

pub fn start() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2018-05-09T16:00:00+00:00").unwrap()
}

pub fn access_line(user: &str, at: DateTime<FixedOffset>, url: &str, status: u16) -> String {
    format!(
        r#"127.0.0.1 - {user} [{}] "GET {url} HTTP/1.0" {status} 512"#,
        at.format(TIMESTAMP_FORMAT)
    )
}

/// A temporary access log that tests append to while a tailer follows it.
pub struct LogFile {
    file: NamedTempFile,
    writer: File,
}

impl LogFile {
    pub fn new() -> Self {
        let file = NamedTempFile::new().unwrap();
        let writer = OpenOptions::new().append(true).open(file.path()).unwrap();
        Self { file, writer }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn append(&mut self, line: &str) {
        writeln!(self.writer, "{line}").unwrap();
        self.writer.flush().unwrap();
    }

    /// `rate` requests per second for `seconds` seconds of log time, starting at `from`.
    pub fn append_traffic(&mut self, from: DateTime<FixedOffset>, seconds: i64, rate: usize) {
        const USERS: [&str; 3] = ["james", "jill", "frank"];
        const URLS: [&str; 4] = ["/api/user", "/report", "/api/post/1", "/user/tina"];

        for t in 0..seconds {
            let at = from + Duration::seconds(t);
            for i in 0..rate {
                let line = access_line(USERS[i % USERS.len()], at, URLS[i % URLS.len()], 200);
                self.append(&line);
            }
        }
    }
}

impl Default for LogFile {
    fn default() -> Self {
        Self::new()
    }
}
