//! # Locale Number Utilities
//!
//! Recognition and conversion of numbers written with the Spanish/European
//! convention: a comma as decimal separator and dots as thousands separators
//! (`"10.000,01"` rather than `"10,000.01"`).
//!
//! The two functions form a validate-then-convert pair. Call
//! [`is_spanish_formatted_number`] first and only hand recognized inputs to
//! [`parse_spanish_formatted_number`], which does no validation of its own.
//!
//! ## Known limitation:
//! The converter strips only the **first** dot and rewrites only the **first**
//! comma. Inputs with several thousands separators are accepted by the
//! classifier but not converted to their grouped value: `"10.000.000"` becomes
//! `"10000.000"` (ten thousand) and `"1.000.000.000"` is malformed.

use thiserror::Error;
use tracing::trace;

/// Number of characters that must follow a lone dot for it to be read as a
/// thousands separator.
const THOUSANDS_GROUP_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// # Number Format Error
///
/// Raised when a string does not coerce to a number once its separators have
/// been normalized.
pub enum NumberFormatError {
    /// The normalized text is not a numeric literal.
    #[error("'{input}' is not a number (normalized to '{normalized}')")]
    Malformed {
        /// The text handed to the converter.
        input: String,
        /// The text after separator normalization.
        normalized: String,
    },
}

/// # Is Spanish Formatted Number
///
/// Checks whether a numeric string is written in Spanish format.
///
/// Single-comma inputs (`"1,00"`, `"10.000,01"`) and multi-dot inputs
/// (`"1.000.000"`) are recognized. A single dot with no comma (`"1.000"`) is
/// recognized only when exactly three characters follow it, since any other
/// length reads more naturally as an English decimal point.
///
/// Surrounding whitespace is ignored. Empty input, input with anything other
/// than ASCII digits, commas and dots, and input with more than one comma are
/// never recognized.
///
/// # Arguments
/// * `number` - Candidate number text.
///
/// # Returns
/// `true` if the text can be read unambiguously as a Spanish-formatted number.
pub fn is_spanish_formatted_number(number: &str) -> bool {
    let trimmed = number.trim();
    if trimmed.is_empty() {
        return false;
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.') {
        trace!(input = number, "rejected: unexpected characters");
        return false;
    }

    let first_comma = trimmed.find(',');
    let comma_count = trimmed.matches(',').count();
    let first_dot = trimmed.find('.');
    let dot_count = trimmed.matches('.').count();

    if comma_count > 1 {
        trace!(input = number, comma_count, "rejected: repeated decimal comma");
        return false;
    }

    // 1,234
    let comma_without_dots = comma_count == 1 && dot_count == 0;
    // 10.000,01
    let dot_before_comma = matches!((first_dot, first_comma), (Some(dot), Some(comma)) if dot < comma);
    // 10.000.000
    let repeated_dots = dot_count > 1;
    // 1.234
    let grouped_single_dot = comma_count == 0
        && dot_count == 1
        && first_dot.is_some_and(|dot| trimmed.len() - dot - 1 == THOUSANDS_GROUP_LEN);

    comma_without_dots || dot_before_comma || repeated_dots || grouped_single_dot
}

/// # Parse Spanish Formatted Number
///
/// Converts a Spanish-formatted number to `f64` by removing the first dot and
/// replacing the first comma with a dot. Assumes the formatting is correct;
/// see the module docs for what happens with several thousands separators.
///
/// ```
/// use lib_common::utils::number::parse_spanish_formatted_number;
///
/// assert_eq!(parse_spanish_formatted_number("10,0"), Ok(10.0));
/// assert_eq!(parse_spanish_formatted_number("10.0"), Ok(100.0));
/// assert_eq!(parse_spanish_formatted_number("10.000"), Ok(10000.0));
/// assert_eq!(parse_spanish_formatted_number("10.000,01"), Ok(10000.01));
/// ```
///
/// # Errors
/// Returns [`NumberFormatError::Malformed`] when the normalized text is not a
/// numeric literal.
pub fn parse_spanish_formatted_number(number: &str) -> Result<f64, NumberFormatError> {
    let normalized = number.replacen('.', "", 1).replacen(',', ".", 1);
    coerce_to_number(&normalized).ok_or_else(|| NumberFormatError::Malformed {
        input: number.to_string(),
        normalized,
    })
}

/// Loose string-to-number coercion: surrounding whitespace is ignored and
/// only decimal literals (optional sign, one decimal point, optional exponent)
/// are accepted. Word spellings such as `inf` or `NaN` are rejected.
fn coerce_to_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_accepts_documented_shapes() {
        assert!(is_spanish_formatted_number("1,234"));
        assert!(is_spanish_formatted_number("1,00"));
        assert!(is_spanish_formatted_number("10.000,01"));
        assert!(is_spanish_formatted_number("10.000.000"));
        assert!(is_spanish_formatted_number("1.234"));
        assert!(is_spanish_formatted_number("  1.234\t"));
    }

    #[test]
    fn test_classifier_single_dot_needs_three_trailing_digits() {
        assert!(!is_spanish_formatted_number("1.2"));
        assert!(!is_spanish_formatted_number("1.23"));
        assert!(!is_spanish_formatted_number("1.2345"));
        assert!(!is_spanish_formatted_number("1."));
        // Trailing whitespace is not counted as a digit.
        assert!(!is_spanish_formatted_number("1.23 "));
    }

    #[test]
    fn test_classifier_rejects_invalid_input() {
        assert!(!is_spanish_formatted_number(""));
        assert!(!is_spanish_formatted_number("   "));
        assert!(!is_spanish_formatted_number("1,234,567"));
        assert!(!is_spanish_formatted_number("1.000,00,0"));
        assert!(!is_spanish_formatted_number("-1,5"));
        assert!(!is_spanish_formatted_number("1 234,5"));
        assert!(!is_spanish_formatted_number("12a,5"));
        assert!(!is_spanish_formatted_number("١,٢"));
        // Comma before the dot is English grouping.
        assert!(!is_spanish_formatted_number("1,234.5"));
        // Plain integers carry no separator at all.
        assert!(!is_spanish_formatted_number("1234"));
    }

    #[test]
    fn test_classifier_is_deterministic() {
        for input in ["1,5", "1.23", "10.000.000", "", "x"] {
            assert_eq!(is_spanish_formatted_number(input), is_spanish_formatted_number(input));
        }
    }

    #[test]
    fn test_parse_single_separator_inputs() {
        assert_eq!(parse_spanish_formatted_number("1,234"), Ok(1.234));
        assert_eq!(parse_spanish_formatted_number("10.000,01"), Ok(10000.01));
        assert_eq!(parse_spanish_formatted_number("1.234"), Ok(1234.0));
        assert_eq!(parse_spanish_formatted_number(" 0,5 "), Ok(0.5));
    }

    #[test]
    fn test_parse_multi_dot_only_strips_first_dot() {
        // "10.000.000" -> "10000.000"
        assert_eq!(parse_spanish_formatted_number("10.000.000"), Ok(10000.0));

        // "1.000.000.000" -> "1000.000.000"
        let err = parse_spanish_formatted_number("1.000.000.000").unwrap_err();
        assert_eq!(
            err,
            NumberFormatError::Malformed {
                input: "1.000.000.000".to_string(),
                normalized: "1000.000.000".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_malformed_input() {
        assert!(parse_spanish_formatted_number("").is_err());
        assert!(parse_spanish_formatted_number("abc").is_err());
        assert!(parse_spanish_formatted_number("1,2,3").is_err());
        assert!(parse_spanish_formatted_number("inf").is_err());
        assert!(parse_spanish_formatted_number("NaN").is_err());
        assert!(parse_spanish_formatted_number(",").is_err());
    }

    #[test]
    fn test_malformed_error_message() {
        let err = parse_spanish_formatted_number("1,2,3").unwrap_err();
        assert_eq!(err.to_string(), "'1,2,3' is not a number (normalized to '1.2,3')");
    }
}
