//! # Canonical Options Text — Deterministic JSON for Error Messages
//!
//! Validation-failure messages embed the validator options the predicate
//! ran with, e.g. `with options: {"min":19}`. That text is part of the
//! caller-facing contract and is asserted on byte-for-byte in tests, so it
//! must not depend on map iteration order.
//!
//! Serialization uses `serde_jcs` for RFC 8785 (JSON Canonicalization
//! Scheme) compliant output: sorted keys, compact separators, deterministic
//! byte sequence.

use serde_json::Value;

/// Render a JSON value as canonical (RFC 8785) text.
///
/// Object keys are sorted lexicographically and separators are compact,
/// so the same options value always produces the same text.
///
/// `serde_jcs` can reject values JCS cannot represent; since the result
/// is destined for a human-readable message rather than a digest, such
/// values fall back to compact `serde_json` rendering instead of failing
/// the whole evaluation.
pub fn canonical_json(value: &Value) -> String {
    serde_jcs::to_string(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sorted_keys_compact_separators() {
        let options = json!({"min": 19, "allow_leading_zeroes": false});
        assert_eq!(
            canonical_json(&options),
            r#"{"allow_leading_zeroes":false,"min":19}"#
        );
    }

    #[test]
    fn test_single_key_object() {
        assert_eq!(canonical_json(&json!({"min": 19})), r#"{"min":19}"#);
        assert_eq!(canonical_json(&json!({"max": 100})), r#"{"max":100}"#);
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(canonical_json(&json!({})), "{}");
    }

    #[test]
    fn test_nested_objects_sorted() {
        let options = json!({"z": {"b": 2, "a": 1}, "a": [3, 2, 1]});
        assert_eq!(canonical_json(&options), r#"{"a":[3,2,1],"z":{"a":1,"b":2}}"#);
    }

    #[test]
    fn test_non_object_values() {
        assert_eq!(canonical_json(&json!(19)), "19");
        assert_eq!(canonical_json(&json!("strict")), r#""strict""#);
        assert_eq!(canonical_json(&json!(null)), "null");
    }
}
