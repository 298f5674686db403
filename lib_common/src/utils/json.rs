//! # JSON Stringification
//!
//! `serde_json` wrappers for turning values into JSON text with an optional
//! indentation setting, plus a `serialize_with` helper for maps.
//!
//! Sets serialize as arrays through serde out of the box. Maps serialize as
//! objects, which requires string-like keys; [`map_as_entries`] renders any
//! map as an array of `[key, value]` pairs instead.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

/// Upper bound on indentation width, in spaces or characters.
const MAX_INDENT: usize = 10;

/// # JSON Space
///
/// Indentation used by [`json_stringify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonSpace {
    /// Indent with this many spaces. Capped at 10; `0` means compact output.
    Spaces(usize),
    /// Indent with this text. Only the first 10 characters are used; an empty
    /// string means compact output.
    Text(String),
}

impl JsonSpace {
    fn indent(&self) -> String {
        match self {
            JsonSpace::Spaces(n) => " ".repeat((*n).min(MAX_INDENT)),
            JsonSpace::Text(text) => text.chars().take(MAX_INDENT).collect(),
        }
    }
}

impl From<usize> for JsonSpace {
    fn from(n: usize) -> Self {
        JsonSpace::Spaces(n)
    }
}

impl From<&str> for JsonSpace {
    fn from(text: &str) -> Self {
        JsonSpace::Text(text.to_string())
    }
}

/// # JSON Stringify
///
/// Serializes `value` to a JSON string.
///
/// # Arguments
/// * `value` - Anything implementing `Serialize`.
/// * `space` - Optional indentation. `None`, `Spaces(0)` and empty `Text`
///   produce compact output.
///
/// # Errors
/// Returns the `serde_json::Error` raised by the value's `Serialize` impl,
/// for example a map with non-string keys.
pub fn json_stringify<T>(value: &T, space: Option<JsonSpace>) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let indent = space.map(|s| s.indent()).unwrap_or_default();
    if indent.is_empty() {
        return serde_json::to_string(value);
    }

    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

/// Serializes a map as an array of `[key, value]` pairs.
///
/// ```
/// use std::collections::BTreeMap;
/// use serde::Serialize;
/// use lib_common::utils::json::{json_stringify, map_as_entries};
///
/// #[derive(Serialize)]
/// struct Grid {
///     #[serde(serialize_with = "map_as_entries")]
///     cells: BTreeMap<(u8, u8), char>,
/// }
///
/// let grid = Grid { cells: BTreeMap::from([((0, 1), 'x')]) };
/// assert_eq!(json_stringify(&grid, None).unwrap(), r#"{"cells":[[[0,1],"x"]]}"#);
/// ```
pub fn map_as_entries<'a, M, K, V, S>(map: &'a M, serializer: S) -> Result<S::Ok, S::Error>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Serialize + 'a,
    V: Serialize + 'a,
    S: Serializer,
{
    serializer.collect_seq(map)
}
