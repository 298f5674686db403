//! # Object Property Extraction
//!
//! Moves entries out of a JSON object: the value is returned to the caller and
//! the key no longer exists on the source object afterwards.

use serde_json::{Map, Value};

/// Removes `key` from `object` and returns its value, or `None` if the key
/// was not present.
pub fn extract_property_from_object(object: &mut Map<String, Value>, key: &str) -> Option<Value> {
    object.remove(key)
}

/// # Extract Properties From Object
///
/// Removes every key in `keys` from `object` and returns the removed entries
/// as a new object. Keys missing from `object` are skipped, so the result may
/// hold fewer entries than `keys`.
///
/// # Arguments
/// * `object` - The JSON object to take entries from.
/// * `keys` - The keys to move out.
pub fn extract_properties_from_object<K>(object: &mut Map<String, Value>, keys: &[K]) -> Map<String, Value>
where
    K: AsRef<str>,
{
    let mut values = Map::new();
    for key in keys {
        let key = key.as_ref();
        if let Some(value) = object.remove(key) {
            values.insert(key.to_string(), value);
        }
    }
    values
}
