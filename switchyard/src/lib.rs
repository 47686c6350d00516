//! # switchyard - Build-Once Runtime Dispatch Tables
//!
//! `switchyard` provides a `switch`-like construct over arbitrary key types
//! and arbitrary callable signatures. A [`DispatchTable`] is built once from
//! an ordered list of `Case` and `Default` directives and then resolves keys
//! to callables for as long as it lives.
//!
//! ## Quick Start
//!
//! ```rust
//! use switchyard::{DispatchTable, Directive};
//!
//! let table: DispatchTable<i32, fn(i32) -> i32> = DispatchTable::new([
//!     Directive::case(1, |x: i32| x + 1),
//!     Directive::case(2, |x: i32| x * 2),
//!     Directive::default(|x: i32| x),
//! ]);
//!
//! assert_eq!(table.resolve(&2, (21,)), 42);
//! assert_eq!(table.resolve(&7, (21,)), 21);
//! ```
//!
//! ## Signatures
//!
//! The second type parameter is a function-pointer type naming the shared
//! parameter list and return type (`fn()`, `fn(String)`, `fn(u8, u8) -> u16`).
//! Arguments are passed to [`DispatchTable::resolve`] as a tuple.
//!
//! ## Unmatched keys
//!
//! Without a default, [`DispatchTable::resolve`] returns the return type's
//! `Default` value, which for `()` means nothing happens.
//! [`DispatchTable::try_resolve`] reports the miss as `None`.
//!
//! ## Backends
//!
//! The third type parameter selects the case map: [`OrderedMap`] (default),
//! [`HashedMap`], or [`SortedMap`] with a caller-supplied [`KeyOrder`].
//!
//! [`OrderedMap`]: maps::OrderedMap
//! [`HashedMap`]: maps::HashedMap
//! [`SortedMap`]: maps::SortedMap
//! [`KeyOrder`]: maps::KeyOrder

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod builder;
mod macros;
mod table;

pub use builder::{TableBuilder, TableOptions};
pub use table::DispatchTable;

pub use switchyard_core::{
    // Signatures
    BoxedCallable,
    // Errors
    BuildError,
    // Backend traits
    CaseLookup,
    CaseMap,
    CaseMapBuilder,
    // Directives
    Directive,
    DuplicatePolicy,
    IntoCallable,
    LookupResult,
    Signature,
};

/// Case map backends.
pub mod maps {
    pub use switchyard_std::maps::{
        HashedMap, HashedMapBuilder, KeyOrder, Natural, OrderedMap, OrderedMapBuilder, SortedMap,
        SortedMapBuilder,
    };
}

/// Testing utilities.
pub mod testing {
    pub use switchyard_std::testing::CallLog;
}

/// Prelude module - common imports for Switchyard.
///
/// # Usage
///
/// ```rust
/// use switchyard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BuildError, Directive, DispatchTable, DuplicatePolicy, Signature, TableOptions,
        dispatch_table,
    };
}
