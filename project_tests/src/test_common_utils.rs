//! # Common Utilities Integration Tests
//!
//! Checks the set, random, JSON and object helpers working together the way
//! a consumer of `lib_common` would combine them.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use lib_common::utils::{
    JsonSpace, add_to_set, extract_properties_from_object, extract_property_from_object, json_stringify,
    map_as_entries, union,
};
use lib_common::utils::random::{get_random_int_with, get_random_number_with};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct Snapshot {
    tags: BTreeSet<&'static str>,
    #[serde(serialize_with = "map_as_entries")]
    counts: BTreeMap<u8, u32>,
}

#[test]
fn test_sets_feed_json_output() {
    let first: HashSet<&str> = ["red", "green"].into_iter().collect();
    let second: HashSet<&str> = ["green", "blue"].into_iter().collect();

    let mut merged = union(&first, &second);
    add_to_set(&mut merged, &["violet"].into_iter().collect());

    let snapshot = Snapshot {
        tags: merged.into_iter().collect(),
        counts: BTreeMap::from([(1, 10), (2, 20)]),
    };

    let expected = "{\n\t\"tags\": [\n\t\t\"blue\",\n\t\t\"green\",\n\t\t\"red\",\n\t\t\"violet\"\n\t],\n\t\"counts\": [\n\t\t[\n\t\t\t1,\n\t\t\t10\n\t\t],\n\t\t[\n\t\t\t2,\n\t\t\t20\n\t\t]\n\t]\n}";
    assert_eq!(json_stringify(&snapshot, Some(JsonSpace::Text("\t".into()))).unwrap(), expected);
}

#[test]
fn test_extracted_properties_stringify() {
    let mut object = match json!({ "secret": "s3cr3t", "user": "ana", "role": "admin" }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    };

    let secret = extract_property_from_object(&mut object, "secret");
    let picked = extract_properties_from_object(&mut object, &["role"]);

    assert_eq!(secret, Some(json!("s3cr3t")));
    assert_eq!(json_stringify(&picked, None).unwrap(), r#"{"role":"admin"}"#);
    assert_eq!(json_stringify(&object, None).unwrap(), r#"{"user":"ana"}"#);
}

#[test]
fn test_seeded_random_is_reproducible() {
    let mut a = StdRng::seed_from_u64(2024);
    let mut b = StdRng::seed_from_u64(2024);

    for _ in 0..100 {
        assert_eq!(get_random_number_with(&mut a, 0.0, 1.0), get_random_number_with(&mut b, 0.0, 1.0));
        assert_eq!(get_random_int_with(&mut a, -10.0, 10.0), get_random_int_with(&mut b, -10.0, 10.0));
    }
}
