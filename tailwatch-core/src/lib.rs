pub mod conf;
pub mod logging;
pub mod parse;
pub mod stats;
pub mod tail;
