//! # switchyard-core
//!
//! Core traits for the Switchyard dispatch table.
//!
//! A dispatch table selects one of several registered callables by key and
//! invokes it, falling back to an optional default. This crate holds the
//! pieces shared by every table and every lookup backend:
//!
//! - [`Signature`]: the parameter list and return type fixed per table,
//!   written as a function-pointer type (`fn(String) -> i32`).
//! - [`IntoCallable`]: conversion of closures into stored callables.
//! - [`Directive`]: the `Case` / `Default` registration steps.
//! - [`CaseLookup`], [`CaseMapBuilder`], [`CaseMap`]: the lookup backend
//!   interface, plus the [`DuplicatePolicy`] applied while building.
//!
//! # Error Types
//!
//! - [`BuildError`] - Construction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod directive;
mod error;
mod lookup;
mod signature;

// Re-exports
pub use directive::Directive;
pub use error::BuildError;
pub use lookup::{CaseLookup, CaseMap, CaseMapBuilder, DuplicatePolicy, LookupResult};
pub use signature::{BoxedCallable, IntoCallable, Signature};
