/// Installs the global `tracing` subscriber.
pub mod subscriber;

pub use subscriber::{LoggerError, init_tracing, level_filter};
