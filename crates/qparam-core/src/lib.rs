//! # qparam-core — Foundational Types for Parameter Evaluation
//!
//! This crate is the bedrock of qparam. It defines the primitives the
//! evaluator crate builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit nil sentinel.** [`ParamValue::Null`] makes "key present but
//!    nil" distinguishable from "key absent" and from "supplied falsy value".
//!    Collapsing those three states is exactly the defect class this type
//!    exists to prevent: a legitimate default of `0`, `false`, or `""` must
//!    never be misread as "nothing supplied".
//!
//! 2. **Two views of every value.** A resolved value keeps its original
//!    scalar type (what the caller gets back in the output mapping) and
//!    exposes a string view via `Display` (what validators and query-string
//!    building consume). Validation never mutates the stored value.
//!
//! 3. **Deterministic error text.** Validator options are serialized into
//!    failure messages through [`canonical::canonical_json`], which sorts
//!    object keys (RFC 8785). Error-message text is part of the contract and
//!    must be byte-stable across runs.
//!
//! ## Crate Policy
//!
//! - No dependencies on other qparam crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use canonical::canonical_json;
pub use error::EvalError;
pub use value::ParamValue;
