//! # Validator Predicates — The Pluggable Capability Seam
//!
//! A [`Predicate`] is a named acceptance check over the string view of a
//! parameter value. The evaluator hands every declared predicate the
//! stringified value plus the spec's opaque options and treats the boolean
//! answer as the whole verdict; interpretation of the options is entirely
//! the predicate's business.
//!
//! The `display_name` appears verbatim in validation-failure messages
//! (`Expected validator: isInt`), so it is part of the caller-facing
//! contract and must be stable.

use serde_json::Value;

/// A named acceptance check for parameter values.
///
/// ## Contract
///
/// Implementations must be side-effect-free and reentrant: the evaluator
/// gives no ordering or single-invocation guarantees, and specs holding a
/// predicate may be shared across threads.
pub trait Predicate: Send + Sync {
    /// Stable identifier used verbatim in failure messages.
    fn display_name(&self) -> &str;

    /// Accept or reject the string view of a value. `options` is the
    /// spec's opaque options value, if one was declared.
    fn evaluate(&self, value: &str, options: Option<&Value>) -> bool;
}

/// Adapter turning an arbitrary closure into a named [`Predicate`].
///
/// Useful for ad-hoc checks and for fabricating predicates in tests
/// without defining a type per check.
pub struct FnPredicate {
    name: String,
    check: Box<dyn Fn(&str, Option<&Value>) -> bool + Send + Sync>,
}

impl FnPredicate {
    /// Wrap `check` under the given display name.
    pub fn new(
        name: impl Into<String>,
        check: impl Fn(&str, Option<&Value>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }
}

impl Predicate for FnPredicate {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, value: &str, options: Option<&Value>) -> bool {
        (self.check)(value, options)
    }
}
