mod log_file;
mod run;
pub mod tracing;

pub use log_file::{LogFile, access_line, start};
pub use run::{TailRun, tagged};
pub use tracing::{CapturedEvent, capture};
