//! # qparam — Schema-Driven Parameter Validation and Re-Mapping
//!
//! qparam checks a bag of caller-supplied parameters against a declarative
//! schema of expected parameters. For each [`ParameterSpec`] it resolves
//! whether a value was supplied, applies the declared default, enforces the
//! required policy, runs the optional validator predicate, and on success
//! renames the key. The accepted set comes back twice: as an ordered
//! mapping and as a `key=value&key=value` query-style string.
//!
//! The typical use is bridging a modern request surface (parsed query
//! parameters, form fields, an API payload) onto a legacy backend that
//! expects its own parameter names.
//!
//! ```
//! use qparam::{evaluate_parameters, InputBag, ParameterSpec};
//! use qparam::validators::{IsAlpha, IsInt};
//!
//! let schema = vec![
//!     ParameterSpec::new("id", "lCusno").required().validator(IsInt),
//!     ParameterSpec::new("username", "kayttajatunnus").required().validator(IsAlpha),
//!     ParameterSpec::new("phone", "phoneNo").required().default_value("0441122334"),
//! ];
//!
//! let mut bag = InputBag::new();
//! bag.insert("id", "100");
//! bag.insert("username", "johndoe");
//!
//! let result = evaluate_parameters(Some(&bag), &schema);
//! assert!(result.is_ok());
//! assert_eq!(result.string, "lCusno=100&kayttajatunnus=johndoe&phoneNo=0441122334");
//! ```
//!
//! ## Guarantees
//!
//! - **All-or-nothing.** The first failing parameter aborts evaluation;
//!   the caller receives that single error and empty outputs. There is no
//!   partial result and no multi-error aggregation.
//! - **Schema order.** Outputs list accepted parameters in schema order,
//!   never input-bag order. Bag keys absent from the schema never leak
//!   into the outputs.
//! - **Original types survive.** Values are stringified only to feed
//!   validators and the query string; the output mapping keeps the
//!   caller's scalar type.
//! - **Pure.** No I/O, no shared state, bounded by the schema length.
//!   Caller-supplied predicates are expected to be side-effect-free and
//!   reentrant; that contract is documented, not enforced.
//!
//! Query-string values are not percent-encoded — that is the transport
//! layer's concern.

pub mod bag;
pub mod eval;
pub mod predicate;
pub mod schema;
pub mod validators;

pub use bag::{BagError, InputBag};
pub use eval::{
    evaluate_parameters, evaluate_parameters_with, validate, validate_empty_params,
    validate_params, EvalOptions, EvaluationResult,
};
pub use predicate::{FnPredicate, Predicate};
pub use schema::ParameterSpec;

// Re-export the core primitives callers need to construct specs and
// inspect results.
pub use qparam_core::{EvalError, ParamValue};
