//! # Set Helpers
//!
//! Small helpers for combining `HashSet`s without spelling out the
//! iterator plumbing at every call site.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Returns a new set holding every element of `set1` and `set2`.
///
/// Neither input is modified.
pub fn union<T, S>(set1: &HashSet<T, S>, set2: &HashSet<T, S>) -> HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    let mut merged = HashSet::with_capacity_and_hasher(set1.len() + set2.len(), S::default());
    merged.extend(set1.iter().cloned());
    merged.extend(set2.iter().cloned());
    merged
}

/// # Add To Set
///
/// Inserts every element of `set_to_be_added` into `original_set` in place.
///
/// # Arguments
/// * `original_set` - The set that receives the elements.
/// * `set_to_be_added` - The set whose elements are copied over. Left untouched.
pub fn add_to_set<T, S>(original_set: &mut HashSet<T, S>, set_to_be_added: &HashSet<T, S>)
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    original_set.extend(set_to_be_added.iter().cloned());
}
