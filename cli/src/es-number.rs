use anyhow::Result;
use clap::Parser;
use lib_common::init_tracing;
use lib_common::utils::number::{is_spanish_formatted_number, parse_spanish_formatted_number};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Checks whether numbers are written in Spanish format and converts them.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Reads numbers from the command line (or one per line from stdin when none are given), reports whether each one is Spanish-formatted (comma decimals, dot thousands separators) and prints its numeric value."
)]
struct Args {
    /// Numbers to check. When omitted, non-blank stdin lines are used.
    values: Vec<String>,

    /// Logging level or filter directive (RUST_LOG takes precedence).
    #[arg(long, env = "ES_NUMBER_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Print one JSON object per input instead of tab-separated text.
    #[arg(long, env = "ES_NUMBER_JSON")]
    json: bool,

    /// Exit with status 1 if any input is not recognized or fails to parse.
    #[arg(long, env = "ES_NUMBER_STRICT")]
    strict: bool,
}

/// Outcome for a single input.
#[derive(Debug, Serialize, PartialEq)]
struct Report {
    input: String,
    spanish: bool,
    value: Option<f64>,
    error: Option<String>,
}

impl Report {
    fn is_ok(&self) -> bool {
        self.spanish && self.error.is_none()
    }

    fn to_text(&self) -> String {
        match (&self.value, &self.error) {
            (Some(value), _) => format!("{}\t{}", self.input, value),
            (None, Some(error)) => format!("{}\terror: {}", self.input, error),
            (None, None) => format!("{}\tnot spanish-formatted", self.input),
        }
    }
}

/// Classifies `input` and converts it only when it is recognized.
fn evaluate(input: &str) -> Report {
    let spanish = is_spanish_formatted_number(input);
    if !spanish {
        debug!(input, "Not a Spanish-formatted number");
        return Report {
            input: input.to_string(),
            spanish,
            value: None,
            error: None,
        };
    }

    match parse_spanish_formatted_number(input) {
        Ok(value) => Report {
            input: input.to_string(),
            spanish,
            value: Some(value),
            error: None,
        },
        Err(e) => Report {
            input: input.to_string(),
            spanish,
            value: None,
            error: Some(e.to_string()),
        },
    }
}

fn read_stdin_values() -> io::Result<Vec<String>> {
    let mut values = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            values.push(line);
        }
    }
    Ok(values)
}

fn main() -> Result<()> {
    // A missing .env file is not an error.
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(&args.log_level, false)?;

    let inputs = if args.values.is_empty() {
        read_stdin_values()?
    } else {
        args.values.clone()
    };

    let mut out = io::stdout().lock();
    let mut failures = 0usize;
    for input in &inputs {
        let report = evaluate(input);
        if !report.is_ok() {
            failures += 1;
        }
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(out, "{}", report.to_text())?;
        }
    }
    out.flush()?;

    info!(total = inputs.len(), failures, "Processed inputs");
    if args.strict && failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        // Test default values.
        let args = Args::try_parse_from(["es-number"]).unwrap();
        assert!(args.values.is_empty());
        assert!(!args.json);
        assert!(!args.strict);

        let args = Args::try_parse_from(["es-number", "--json", "--strict", "--log-level", "debug", "1,5", "2.000"]).unwrap();
        assert_eq!(args.values, vec!["1,5", "2.000"]);
        assert!(args.json);
        assert!(args.strict);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_evaluate_recognized() {
        let report = evaluate("10.000,01");
        assert!(report.is_ok());
        assert_eq!(report.value, Some(10000.01));
        assert_eq!(report.to_text(), "10.000,01\t10000.01");
    }

    #[test]
    fn test_evaluate_unrecognized() {
        let report = evaluate("1.23");
        assert!(!report.is_ok());
        assert_eq!(report.to_text(), "1.23\tnot spanish-formatted");
    }

    #[test]
    fn test_evaluate_recognized_but_malformed() {
        let report = evaluate("1.000.000.000");
        assert!(report.spanish);
        assert!(!report.is_ok());
        assert_eq!(
            report.to_text(),
            "1.000.000.000\terror: '1.000.000.000' is not a number (normalized to '1000.000.000')"
        );
    }

    #[test]
    fn test_report_json() {
        let json = serde_json::to_string(&evaluate("1,5")).unwrap();
        assert_eq!(json, r#"{"input":"1,5","spanish":true,"value":1.5,"error":null}"#);
    }
}
