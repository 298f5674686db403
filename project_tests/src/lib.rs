//! # Project Test Fixtures
//!
//! Shared sample tables for the workspace integration tests in `src/test_*.rs`.

/// Inputs that are recognized as Spanish-formatted, paired with what the
/// converter actually returns for them.
pub const RECOGNIZED_SAMPLES: &[(&str, f64)] = &[
    ("1,234", 1.234),
    ("10,0", 10.0),
    ("1,00", 1.0),
    ("10.000,01", 10000.01),
    ("1.234", 1234.0),
    ("10.000", 10000.0),
    // Only the first thousands separator is removed.
    ("10.000.000", 10000.0),
];

/// Inputs the classifier must reject.
pub const REJECTED_SAMPLES: &[&str] = &[
    "", "   ", "1.2", "1.23", "1.2345", "1234", "1,234,567", "1,234.56", "-1,5", "1e3", "12 345", "€1,5",
];

/// Recognized inputs that the converter cannot turn into a number.
pub const RECOGNIZED_BUT_MALFORMED: &[&str] = &["1.000.000.000", "1.2.3.4"];
