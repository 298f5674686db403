//! # Spanish Number Utilities Integration Tests
//!
//! Exercises `lib_common::utils::number` through the crate's public API:
//! documented samples first, then property-based checks with `proptest`.

use lib_common::utils::number::NumberFormatError;
use lib_common::{is_spanish_formatted_number, parse_spanish_formatted_number};
use project_tests::{RECOGNIZED_BUT_MALFORMED, RECOGNIZED_SAMPLES, REJECTED_SAMPLES};
use proptest::prelude::*;

#[test]
fn test_recognized_samples_round_trip() {
    for (input, expected) in RECOGNIZED_SAMPLES {
        assert!(is_spanish_formatted_number(input), "should recognize {:?}", input);
        assert_eq!(parse_spanish_formatted_number(input), Ok(*expected), "value of {:?}", input);
    }
}

#[test]
fn test_rejected_samples() {
    for input in REJECTED_SAMPLES {
        assert!(!is_spanish_formatted_number(input), "should reject {:?}", input);
    }
}

#[test]
fn test_recognized_but_malformed() {
    for input in RECOGNIZED_BUT_MALFORMED {
        assert!(is_spanish_formatted_number(input), "should recognize {:?}", input);
        assert!(
            matches!(parse_spanish_formatted_number(input), Err(NumberFormatError::Malformed { .. })),
            "should fail to convert {:?}",
            input
        );
    }
}

proptest! {
    #[test]
    fn prop_foreign_characters_are_rejected(input in "[0-9,. ]{0,6}[a-zA-Z+_\\-]{1}[0-9,. ]{0,6}") {
        prop_assert!(!is_spanish_formatted_number(&input));
    }

    #[test]
    fn prop_repeated_commas_are_rejected(input in "[0-9.]{0,4},[0-9.]{0,4},[0-9.,]{0,4}") {
        prop_assert!(!is_spanish_formatted_number(&input));
    }

    #[test]
    fn prop_single_dot_without_three_digit_group_is_rejected(
        input in "[0-9]{1,6}\\.([0-9]{0,2}|[0-9]{4,8})"
    ) {
        prop_assert!(!is_spanish_formatted_number(&input));
    }

    #[test]
    fn prop_surrounding_whitespace_is_ignored(input in "[0-9,.]{1,10}", pad in "[ \t]{0,3}") {
        let padded = format!("{}{}{}", pad, input, pad);
        prop_assert_eq!(is_spanish_formatted_number(&padded), is_spanish_formatted_number(&input));
    }

    #[test]
    fn prop_classifier_is_deterministic(input in ".{0,12}") {
        prop_assert_eq!(is_spanish_formatted_number(&input), is_spanish_formatted_number(&input));
    }

    #[test]
    fn prop_one_group_with_decimals_converts(thousands in 1u32..1000, group in 0u32..1000, cents in 0u32..100) {
        let input = format!("{}.{:03},{:02}", thousands, group, cents);
        let expected: f64 = format!("{}{:03}.{:02}", thousands, group, cents).parse().unwrap();

        prop_assert!(is_spanish_formatted_number(&input));
        prop_assert_eq!(parse_spanish_formatted_number(&input), Ok(expected));
    }

    #[test]
    fn prop_comma_decimal_converts(whole in 0u32..1_000_000, frac in "[0-9]{1,4}") {
        let input = format!("{},{}", whole, frac);
        let expected: f64 = format!("{}.{}", whole, frac).parse().unwrap();

        prop_assert!(is_spanish_formatted_number(&input));
        prop_assert_eq!(parse_spanish_formatted_number(&input), Ok(expected));
    }
}
