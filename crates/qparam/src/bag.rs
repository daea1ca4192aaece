//! # Input Bags
//!
//! An [`InputBag`] is the caller-supplied mapping the evaluator reads
//! from: string keys to scalar [`ParamValue`]s. Insertion order is kept
//! (the evaluator itself walks the schema, not the bag, but callers
//! inspecting a bag deserve to see what they put in, in the order they
//! put it in).
//!
//! A bag that exists but is empty is a perfectly valid input; the
//! evaluator rejects only the distinct "no bag at all" case, which is
//! why its entry points take `Option<&InputBag>`.

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

use qparam_core::ParamValue;

/// Error building a bag from a JSON value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    /// The root of the JSON value was not an object.
    #[error("parameter bag must be a JSON object, got {found}")]
    NotAnObject {
        /// JSON type name of what was found instead.
        found: &'static str,
    },

    /// A member value was an array or object; bags hold scalars only.
    #[error("parameter {name} has a non-scalar value; arrays and objects are not supported")]
    NonScalarValue {
        /// Key of the offending member.
        name: String,
    },
}

/// Ordered mapping of caller-supplied parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputBag(IndexMap<String, ParamValue>);

impl InputBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value under the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a parameter by key. Returns `Some(&ParamValue::Null)` for a
    /// key that was supplied as explicit nil — the evaluation step is
    /// where that collapses into "not supplied".
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the bag holds no entries. Still a valid evaluator input.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// Build a bag from a parsed JSON object of scalars, e.g. a decoded
    /// query string or API payload.
    ///
    /// # Errors
    ///
    /// Returns [`BagError::NotAnObject`] when the root is not a JSON
    /// object, and [`BagError::NonScalarValue`] when any member is an
    /// array or a nested object.
    pub fn from_json(value: &Value) -> Result<Self, BagError> {
        let Value::Object(members) = value else {
            return Err(BagError::NotAnObject {
                found: json_type_name(value),
            });
        };

        let mut bag = Self::new();
        for (name, member) in members {
            let scalar = ParamValue::from_json_scalar(member).ok_or_else(|| {
                BagError::NonScalarValue { name: name.clone() }
            })?;
            bag.0.insert(name.clone(), scalar);
        }
        Ok(bag)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for InputBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_and_get() {
        let mut bag = InputBag::new();
        bag.insert("id", "2018");
        bag.insert("age", 27i64);
        assert_eq!(bag.get("id"), Some(&ParamValue::String("2018".into())));
        assert_eq!(bag.get("age"), Some(&ParamValue::Integer(27)));
        assert_eq!(bag.get("missing"), None);
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn test_explicit_null_is_present() {
        let mut bag = InputBag::new();
        bag.insert("note", ParamValue::Null);
        assert_eq!(bag.get("note"), Some(&ParamValue::Null));
    }

    #[test]
    fn test_from_json_scalars() {
        let bag = InputBag::from_json(&json!({
            "id": "2018",
            "age": 27,
            "active": true,
            "note": null
        }))
        .unwrap();
        assert_eq!(bag.get("id"), Some(&ParamValue::String("2018".into())));
        assert_eq!(bag.get("age"), Some(&ParamValue::Integer(27)));
        assert_eq!(bag.get("active"), Some(&ParamValue::Bool(true)));
        assert_eq!(bag.get("note"), Some(&ParamValue::Null));
    }

    #[test]
    fn test_from_json_rejects_non_object_root() {
        let err = InputBag::from_json(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, BagError::NotAnObject { found: "an array" });
        assert_eq!(
            err.to_string(),
            "parameter bag must be a JSON object, got an array"
        );
    }

    #[test]
    fn test_from_json_rejects_nested_values() {
        let err = InputBag::from_json(&json!({"tags": ["a", "b"]})).unwrap_err();
        assert_eq!(err, BagError::NonScalarValue { name: "tags".into() });
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let bag: InputBag = [("b", "2"), ("a", "1")].into_iter().collect();
        let keys: Vec<&String> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
