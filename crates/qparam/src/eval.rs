//! # The Evaluator
//!
//! A short-circuiting fold over the expected-parameter schema. Each spec
//! goes through three straight-line steps:
//!
//! 1. [`validate`] — classify the bag lookup as supplied or not and route
//!    to the right branch;
//! 2. [`validate_empty_params`] — default substitution and the
//!    required-policy check, for unsupplied parameters;
//! 3. [`validate_params`] — predicate invocation and failure-message
//!    construction, for supplied parameters with a declared validator.
//!
//! The helpers are public: they are independently callable units with
//! their own contracts, not internals.
//!
//! Terminal states are exactly two: the first error, with empty outputs,
//! or the fully mapped result. Errors come back as data inside
//! [`EvaluationResult`]; nothing here returns `Err` or panics.

use indexmap::IndexMap;

use qparam_core::{canonical_json, EvalError, ParamValue};

use crate::bag::InputBag;
use crate::schema::ParameterSpec;

/// Evaluation mode flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Skip parameters whose resolved value is falsy (`Null`, `""`, `0`,
    /// `0.0`, `false`) instead of including them in the outputs. The skip
    /// is silent even when the falsy value came from a declared default.
    pub ignore_empty: bool,
}

/// Outcome of one evaluation: either a single error with empty outputs,
/// or the full accepted set in both shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// `None` on success; the first failure otherwise.
    pub error: Option<EvalError>,
    /// `mapped_name -> accepted value`, in schema order. Values keep the
    /// caller's original scalar type.
    pub object: IndexMap<String, ParamValue>,
    /// `mapped_name=value` pairs joined by `&`, schema order, values not
    /// percent-encoded.
    pub string: String,
}

impl EvaluationResult {
    /// True when evaluation succeeded.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The error text, or the empty string on success. Convenience for
    /// callers that treat "empty message" as the ok signal.
    pub fn error_message(&self) -> String {
        match &self.error {
            Some(error) => error.to_string(),
            None => String::new(),
        }
    }

    fn failure(error: EvalError) -> Self {
        Self {
            error: Some(error),
            object: IndexMap::new(),
            string: String::new(),
        }
    }
}

/// Evaluate `bag` against `specs` with default options.
///
/// See [`evaluate_parameters_with`].
pub fn evaluate_parameters(
    bag: Option<&InputBag>,
    specs: &[ParameterSpec],
) -> EvaluationResult {
    evaluate_parameters_with(bag, specs, EvalOptions::default())
}

/// Evaluate `bag` against `specs`.
///
/// `None` for the bag is the distinct "no parameters at all" case and
/// fails immediately, without inspecting the schema. Otherwise specs are
/// processed in order; the first failing spec aborts evaluation and any
/// accumulation so far is discarded — the result is all-or-nothing.
///
/// Pure function of its inputs (given side-effect-free predicates).
pub fn evaluate_parameters_with(
    bag: Option<&InputBag>,
    specs: &[ParameterSpec],
    options: EvalOptions,
) -> EvaluationResult {
    let Some(bag) = bag else {
        return EvaluationResult::failure(EvalError::NullBag);
    };

    let mut object = IndexMap::new();
    let mut parts = Vec::with_capacity(specs.len());

    for spec in specs {
        let (error, value) = validate(spec, bag.get(&spec.name));
        if let Some(error) = error {
            return EvaluationResult::failure(error);
        }
        if options.ignore_empty && value.is_falsy() {
            continue;
        }
        parts.push(format!("{}={}", spec.mapped_name, value));
        object.insert(spec.mapped_name.clone(), value);
    }

    EvaluationResult {
        error: None,
        object,
        string: parts.join("&"),
    }
}

/// Classify a bag lookup and resolve one parameter.
///
/// An absent key (`None`) and a key supplied as explicit nil
/// (`Some(&ParamValue::Null)`) are the same case: "no value supplied",
/// routed to [`validate_empty_params`]. A supplied value with a declared
/// validator goes through [`validate_params`] against its string view;
/// the value itself comes back unchanged either way. A supplied value
/// without a validator is accepted as-is.
pub fn validate(
    spec: &ParameterSpec,
    raw: Option<&ParamValue>,
) -> (Option<EvalError>, ParamValue) {
    match raw {
        None => validate_empty_params(spec),
        Some(value) if value.is_null() => validate_empty_params(spec),
        Some(value) => {
            let error = if spec.validator.is_some() {
                validate_params(spec, &value.to_string())
            } else {
                None
            };
            (error, value.clone())
        }
    }
}

/// Resolve an unsupplied parameter: default substitution plus the
/// required-policy check.
///
/// The error fires iff the parameter is required and no default is
/// declared. Declaration is presence-of-key: `Some(ParamValue::Null)`
/// exempts, as do defaults of `""`, `0`, and `false`. The resolved value
/// is the declared default, or the empty string when none is declared.
///
/// Error and value are independent — both are returned even together
/// (the evaluator discards the value on error).
pub fn validate_empty_params(spec: &ParameterSpec) -> (Option<EvalError>, ParamValue) {
    let error = if spec.required && spec.default.is_none() {
        Some(EvalError::MissingRequired {
            name: spec.name.clone(),
        })
    } else {
        None
    };

    let value = spec
        .default
        .clone()
        .unwrap_or_else(|| ParamValue::String(String::new()));

    (error, value)
}

/// Run the spec's validator against the string view of a supplied value.
///
/// Returns `None` on acceptance (also when the spec declares no
/// validator). On rejection the failure message names the validator, and
/// — iff options were declared, empty object included — carries their
/// canonical JSON text so the message is byte-stable.
pub fn validate_params(spec: &ParameterSpec, string_value: &str) -> Option<EvalError> {
    let validator = spec.validator.as_ref()?;

    if validator.evaluate(string_value, spec.options.as_ref()) {
        return None;
    }

    Some(EvalError::ValidationFailed {
        name: spec.name.clone(),
        validator: validator.display_name().to_string(),
        options: spec.options.as_ref().map(canonical_json),
    })
}
