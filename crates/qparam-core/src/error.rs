//! # Error Types — The Caller-Facing Message Surface
//!
//! Evaluation errors are data, not control flow: the evaluator never
//! returns `Err` or panics, it hands back an [`EvalError`] inside its
//! result and the caller decides how to react. Nothing here is fatal.
//!
//! ## Design
//!
//! - Exactly one error per evaluation: the first failure wins and aborts
//!   the remaining schema entries.
//! - `Display` output is the stable, human-readable contract. Tests assert
//!   on the full text, including the canonical options suffix.
//! - The options suffix on [`EvalError::ValidationFailed`] carries the
//!   already-canonicalized JSON text (see `canonical`), so the error type
//!   itself stays `Eq` and cheap to clone.

use thiserror::Error;

/// An evaluation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input bag itself was nil, as opposed to empty.
    #[error("Parameters cannot be null!")]
    NullBag,

    /// A required parameter had no supplied value and no declared default.
    #[error("Required parameter {name} not provided")]
    MissingRequired {
        /// The schema name of the parameter (the bag lookup key, not the
        /// mapped output key).
        name: String,
    },

    /// A declared validator rejected the stringified value.
    #[error("Parameter {name} failed validation. Expected validator: {validator}{}", options_suffix(.options))]
    ValidationFailed {
        /// The schema name of the parameter.
        name: String,
        /// The validator's display name, verbatim.
        validator: String,
        /// Canonical JSON text of the options the validator ran with,
        /// if any were declared. `Some` even for an empty options object.
        options: Option<String>,
    },
}

fn options_suffix(options: &Option<String>) -> String {
    match options {
        Some(text) => format!(" with options: {text}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_bag_message() {
        assert_eq!(EvalError::NullBag.to_string(), "Parameters cannot be null!");
    }

    #[test]
    fn test_missing_required_message() {
        let err = EvalError::MissingRequired { name: "id".into() };
        assert_eq!(err.to_string(), "Required parameter id not provided");
    }

    #[test]
    fn test_validation_failed_without_options() {
        let err = EvalError::ValidationFailed {
            name: "id".into(),
            validator: "isInt".into(),
            options: None,
        };
        assert_eq!(
            err.to_string(),
            "Parameter id failed validation. Expected validator: isInt"
        );
    }

    #[test]
    fn test_validation_failed_with_options() {
        let err = EvalError::ValidationFailed {
            name: "age".into(),
            validator: "isInt".into(),
            options: Some(r#"{"min":19}"#.into()),
        };
        assert_eq!(
            err.to_string(),
            r#"Parameter age failed validation. Expected validator: isInt with options: {"min":19}"#
        );
    }

    #[test]
    fn test_validation_failed_with_empty_options_object() {
        // Declared-but-empty options still count as present.
        let err = EvalError::ValidationFailed {
            name: "age".into(),
            validator: "isInt".into(),
            options: Some("{}".into()),
        };
        assert_eq!(
            err.to_string(),
            "Parameter age failed validation. Expected validator: isInt with options: {}"
        );
    }
}
