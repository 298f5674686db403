//! # lib_common
//!
//! A modular utility library with folder-based feature gating.
//!
//! - `utils`: locale number parsing, set, random, JSON and object helpers.
//! - `loggers`: `tracing` subscriber setup for binaries.

#![forbid(unsafe_code)]

#[cfg(feature = "loggers")]
pub mod loggers;
#[cfg(feature = "utils")]
pub mod utils;

#[cfg(feature = "loggers")]
pub use loggers::{LoggerError, init_tracing};
#[cfg(feature = "utils")]
pub use utils::number::{NumberFormatError, is_spanish_formatted_number, parse_spanish_formatted_number};
