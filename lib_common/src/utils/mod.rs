//! # Utilities Module
//!
//! A collection point for small, general-purpose helpers used across the
//! `lib_common` crate and its consumers.
//!
//! ## Contained Modules:
//!
//! - **`number`**: Recognition and conversion of Spanish-formatted numbers
//!   (`"10.000,01"`).
//! - **`sets`**: `HashSet` union and in-place merge.
//! - **`random`**: Random floats and integers within a range.
//! - **`json`**: JSON stringification with indentation control and a
//!   map-as-entries serializer.
//! - **`object`**: Moving properties out of JSON objects.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Spanish-formatted number classifier and converter.
pub mod number;
/// Set union and merge helpers.
pub mod sets;
/// Random number helpers.
pub mod random;
/// JSON stringification helpers.
pub mod json;
/// Property extraction from JSON objects.
pub mod object;

// --- Public API Re-exports ---
pub use number::{NumberFormatError, is_spanish_formatted_number, parse_spanish_formatted_number};
pub use sets::{add_to_set, union};
pub use random::{RandomRangeError, get_random_int, get_random_number};
pub use json::{JsonSpace, json_stringify, map_as_entries};
pub use object::{extract_properties_from_object, extract_property_from_object};
