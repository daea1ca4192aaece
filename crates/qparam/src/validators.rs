//! # Built-in Validator Predicates
//!
//! Ready-made [`Predicate`] implementations for the checks schemas declare
//! most often. Display names use the conventional camelCase identifiers
//! (`isInt`, `isAlpha`, ...) so failure messages read the way schema
//! authors expect.
//!
//! All built-ins read their bounds from the spec's options object and
//! ignore option keys they do not understand — options are opaque to the
//! evaluator, and a predicate interprets only what it knows.

use serde_json::Value;

use crate::predicate::Predicate;

/// Optionally-signed decimal integer check.
///
/// Options: integer `min` and `max`, inclusive bounds on the parsed value.
/// Values outside the `i64` range are rejected.
pub struct IsInt;

impl Predicate for IsInt {
    fn display_name(&self) -> &str {
        "isInt"
    }

    fn evaluate(&self, value: &str, options: Option<&Value>) -> bool {
        let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let Ok(parsed) = value.parse::<i64>() else {
            return false;
        };
        if let Some(min) = option_i64(options, "min") {
            if parsed < min {
                return false;
            }
        }
        if let Some(max) = option_i64(options, "max") {
            if parsed > max {
                return false;
            }
        }
        true
    }
}

/// ASCII-letters-only check. Empty strings are rejected.
pub struct IsAlpha;

impl Predicate for IsAlpha {
    fn display_name(&self) -> &str {
        "isAlpha"
    }

    fn evaluate(&self, value: &str, _options: Option<&Value>) -> bool {
        !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphabetic())
    }
}

/// Decimal number check: optional sign, digits, at most one fractional
/// point, no exponent.
///
/// Options: boolean `no_symbols` rejects the sign and the point, leaving
/// digits only.
pub struct IsNumeric;

impl Predicate for IsNumeric {
    fn display_name(&self) -> &str {
        "isNumeric"
    }

    fn evaluate(&self, value: &str, options: Option<&Value>) -> bool {
        let no_symbols = option_bool(options, "no_symbols").unwrap_or(false);
        if no_symbols {
            return !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
        }

        let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
        if digits.is_empty() || digits.starts_with('.') || digits.ends_with('.') {
            return false;
        }
        let mut seen_point = false;
        for b in digits.bytes() {
            match b {
                b'0'..=b'9' => {}
                b'.' if !seen_point => seen_point = true,
                _ => return false,
            }
        }
        true
    }
}

/// Character-count check.
///
/// Options: integer `min` and `max`, inclusive bounds on the number of
/// characters; a missing bound is open. With no options every value
/// passes.
pub struct IsLength;

impl Predicate for IsLength {
    fn display_name(&self) -> &str {
        "isLength"
    }

    fn evaluate(&self, value: &str, options: Option<&Value>) -> bool {
        let count = value.chars().count() as i64;
        if let Some(min) = option_i64(options, "min") {
            if count < min {
                return false;
            }
        }
        if let Some(max) = option_i64(options, "max") {
            if count > max {
                return false;
            }
        }
        true
    }
}

fn option_i64(options: Option<&Value>, key: &str) -> Option<i64> {
    options.and_then(|o| o.get(key)).and_then(Value::as_i64)
}

fn option_bool(options: Option<&Value>, key: &str) -> Option<bool> {
    options.and_then(|o| o.get(key)).and_then(Value::as_bool)
}
