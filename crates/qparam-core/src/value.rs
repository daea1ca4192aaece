//! # Parameter Values
//!
//! [`ParamValue`] is the scalar type a parameter bag can hold: string,
//! integer, float, boolean, or the explicit `Null` sentinel.
//!
//! ## Tri-state Invariant
//!
//! A parameter lookup has three distinguishable outcomes:
//!
//! 1. key absent from the bag — "not supplied";
//! 2. key present with [`ParamValue::Null`] — also "not supplied" (the two
//!    collapse only at the evaluation step, never in the data model);
//! 3. key present with any other variant — "supplied", even when the value
//!    is falsy (`""`, `0`, `0.0`, `false`).
//!
//! ## String View
//!
//! `Display` renders the representation fed to validator predicates and to
//! query-string building. The stored value itself is never transformed;
//! stringification exists only to give validators a uniform input.
//! `Null` renders as the empty string.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A scalar parameter value.
///
/// Serializes untagged, so a bag round-trips as a plain JSON object of
/// scalars: `{"id": "2018", "age": 27, "active": true, "note": null}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Explicit nil. Treated as "no value supplied" by the evaluator.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Integer(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    String(String),
}

impl ParamValue {
    /// True for the `Null` sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// True for values the `ignore_empty` evaluation mode skips:
    /// `Null`, `""`, `0`, `0.0`, and `false`.
    pub fn is_falsy(&self) -> bool {
        match self {
            ParamValue::Null => true,
            ParamValue::Bool(b) => !b,
            ParamValue::Integer(n) => *n == 0,
            ParamValue::Float(f) => *f == 0.0,
            ParamValue::String(s) => s.is_empty(),
        }
    }

    /// Convert a JSON scalar into a `ParamValue`.
    ///
    /// Returns `None` for arrays and objects — parameter bags hold scalars
    /// only. Numbers that fit `i64` become `Integer`; all other numbers
    /// become `Float`.
    pub fn from_json_scalar(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(ParamValue::Null),
            Value::Bool(b) => Some(ParamValue::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(ParamValue::Integer(i))
                } else {
                    n.as_f64().map(ParamValue::Float)
                }
            }
            Value::String(s) => Some(ParamValue::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => Ok(()),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Integer(n) => write!(f, "{n}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::String(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Integer(n)
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}
