//! # Expected-Parameter Schema
//!
//! A [`ParameterSpec`] declares one expected parameter: where to find it in
//! the input bag (`name`), what to call it on the way out (`mapped_name`),
//! whether it must be supplied, the default that stands in when it is not,
//! and the optional validator predicate plus its opaque options.
//!
//! ## Presence-of-Key Semantics for Defaults
//!
//! `default` is an `Option<ParamValue>`: `Some(...)` means "a default is
//! declared", independent of the default's own value. Declaring
//! `Some(ParamValue::Null)` is legal and still exempts a required
//! parameter from the missing-required error; defaults of `""`, `0`, and
//! `false` are honored as values, never misread as "no default".

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use qparam_core::ParamValue;

use crate::predicate::Predicate;

/// Declaration of one expected parameter.
///
/// Specs are immutable during evaluation and cheap to clone (the validator
/// is held behind an `Arc`), so a schema can be built once and shared.
#[derive(Clone)]
pub struct ParameterSpec {
    /// Lookup key in the input bag.
    pub name: String,
    /// Output key in the mapping and the query string.
    pub mapped_name: String,
    /// Whether a missing value (with no declared default) is an error.
    pub required: bool,
    /// Declared default, substituted when no value is supplied.
    pub default: Option<ParamValue>,
    /// Optional acceptance check, run against the string view of the value.
    pub validator: Option<Arc<dyn Predicate>>,
    /// Opaque options handed to the validator and serialized into failure
    /// messages. `Some(json!({}))` counts as declared.
    pub options: Option<Value>,
}

impl ParameterSpec {
    /// Start a spec mapping `name` in the bag to `mapped_name` in the
    /// output. Optional, no default, no validator.
    pub fn new(name: impl Into<String>, mapped_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mapped_name: mapped_name.into(),
            required: false,
            default: None,
            validator: None,
            options: None,
        }
    }

    /// Mark the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declare a default value. Presence of the declaration is what
    /// matters; `ParamValue::Null`, `""`, `0`, and `false` are all valid
    /// declared defaults.
    pub fn default_value(mut self, value: impl Into<ParamValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Attach a validator predicate.
    pub fn validator(mut self, predicate: impl Predicate + 'static) -> Self {
        self.validator = Some(Arc::new(predicate));
        self
    }

    /// Attach an already-shared validator predicate.
    pub fn validator_arc(mut self, predicate: Arc<dyn Predicate>) -> Self {
        self.validator = Some(predicate);
        self
    }

    /// Attach opaque validator options.
    pub fn options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }
}

impl fmt::Debug for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSpec")
            .field("name", &self.name)
            .field("mapped_name", &self.mapped_name)
            .field("required", &self.required)
            .field("default", &self.default)
            .field(
                "validator",
                &self.validator.as_ref().map(|v| v.display_name()),
            )
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::FnPredicate;
    use serde_json::json;

    #[test]
    fn test_builder_defaults() {
        let spec = ParameterSpec::new("id", "lCusno");
        assert_eq!(spec.name, "id");
        assert_eq!(spec.mapped_name, "lCusno");
        assert!(!spec.required);
        assert!(spec.default.is_none());
        assert!(spec.validator.is_none());
        assert!(spec.options.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let spec = ParameterSpec::new("age", "leAge")
            .required()
            .default_value(18i64)
            .validator(FnPredicate::new("isInt", |v, _| v.parse::<i64>().is_ok()))
            .options(json!({"min": 19}));
        assert!(spec.required);
        assert_eq!(spec.default, Some(ParamValue::Integer(18)));
        assert_eq!(spec.validator.as_ref().unwrap().display_name(), "isInt");
        assert_eq!(spec.options, Some(json!({"min": 19})));
    }

    #[test]
    fn test_falsy_defaults_are_declared() {
        // A default of "", 0, or false is a declared default.
        for spec in [
            ParameterSpec::new("a", "a").default_value(""),
            ParameterSpec::new("b", "b").default_value(0i64),
            ParameterSpec::new("c", "c").default_value(false),
            ParameterSpec::new("d", "d").default_value(ParamValue::Null),
        ] {
            assert!(spec.default.is_some());
        }
    }

    #[test]
    fn test_debug_names_validator() {
        let spec = ParameterSpec::new("id", "lCusno")
            .validator(FnPredicate::new("isInt", |_, _| true));
        let rendered = format!("{spec:?}");
        assert!(rendered.contains("isInt"));
    }
}
