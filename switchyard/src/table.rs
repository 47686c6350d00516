//! # Dispatch Table
//!
//! A [`DispatchTable`] maps keys to callables that share one [`Signature`]
//! and holds at most one default callable. It is built once from an ordered
//! list of [`Directive`]s and is read-only afterwards.
//!
//! # Resolution
//!
//! 1. Look the key up in the case map.
//! 2. On a match, invoke that case with the arguments.
//! 3. Otherwise invoke the default, if one was registered.
//! 4. Otherwise [`resolve`](DispatchTable::resolve) returns
//!    `S::Output::default()`. For signatures without a return value this is
//!    `()`, so nothing happens. [`try_resolve`](DispatchTable::try_resolve)
//!    returns `None` instead.
//!
//! Whatever a callable panics with reaches the caller unchanged.

use crate::builder::{TableBuilder, TableOptions};
use std::{fmt, marker::PhantomData};
use switchyard_core::{BoxedCallable, BuildError, CaseMap, Directive, LookupResult, Signature};
use switchyard_std::maps::OrderedMap;

/// A key to callable dispatch table with an optional default.
///
/// `K` is the key type, `S` the signature written as a function-pointer type,
/// and `M` the case map backend (a `BTreeMap` over the key's `Ord` unless
/// stated otherwise).
///
/// # Example
///
/// ```rust
/// use switchyard::{DispatchTable, Directive};
///
/// let table: DispatchTable<i32, fn(String) -> String> = DispatchTable::new([
///     Directive::case(1, |s: String| format!("Case 1: {s}")),
///     Directive::case(2, |s: String| format!("Case 2: {s}")),
///     Directive::default(|s: String| format!("Unknown case: {s}")),
/// ]);
///
/// assert_eq!(table.resolve(&1, ("Hello Switch!".to_string(),)), "Case 1: Hello Switch!");
/// assert_eq!(table.resolve(&3, ("x".to_string(),)), "Unknown case: x");
/// ```
pub struct DispatchTable<K, S: Signature, M = OrderedMap<K, BoxedCallable<S>>> {
    cases: M,
    default: Option<BoxedCallable<S>>,
    _key: PhantomData<fn(&K)>,
}

impl<K, S, M> DispatchTable<K, S, M>
where
    S: Signature,
    M: CaseMap<K, BoxedCallable<S>>,
{
    pub(crate) fn from_parts(cases: M, default: Option<BoxedCallable<S>>) -> Self {
        Self {
            cases,
            default,
            _key: PhantomData,
        }
    }

    /// Start an empty builder with default options.
    pub fn builder() -> TableBuilder<K, S, M> {
        TableBuilder::default()
    }

    /// Build a table from an ordered list of directives.
    ///
    /// # Panics
    ///
    /// Panics if the list is invalid: more than one default, or a repeated
    /// key. Use [`try_from_directives`](Self::try_from_directives) to get the
    /// [`BuildError`] instead.
    pub fn new<I>(directives: I) -> Self
    where
        I: IntoIterator<Item = Directive<K, S>>,
    {
        match Self::try_from_directives(directives) {
            Ok(table) => table,
            Err(err) => panic!("invalid dispatch table: {err}"),
        }
    }

    /// Build a table from an ordered list of directives with default options.
    pub fn try_from_directives<I>(directives: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = Directive<K, S>>,
    {
        Self::with_options(TableOptions::default(), directives)
    }

    /// Build a table from an ordered list of directives.
    pub fn with_options<I>(options: TableOptions, directives: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = Directive<K, S>>,
    {
        let mut builder = TableBuilder::new(options);
        builder.extend(directives)?;
        Ok(builder.finish())
    }

    /// Returns true if a default callable was registered.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    fn select(&self, key: &K) -> Option<&BoxedCallable<S>> {
        match self.cases.lookup(key) {
            LookupResult::Found(callable) => Some(callable),
            LookupResult::Missing => {
                #[cfg(feature = "tracing")]
                tracing::trace!(has_default = self.default.is_some(), "no case matched");
                self.default.as_ref()
            }
        }
    }

    /// Resolve `key` and invoke the selected callable with `args`.
    ///
    /// Returns `None`, without running anything, when no case matches and no
    /// default is registered.
    pub fn try_resolve(&self, key: &K, args: S::Args) -> Option<S::Output> {
        self.select(key).map(|callable| S::invoke(&**callable, args))
    }

    /// Resolve `key` and invoke the selected callable with `args`.
    ///
    /// When no case matches and no default is registered the result is
    /// `S::Output::default()`: a no-op for `()` signatures, the zero value
    /// otherwise.
    pub fn resolve(&self, key: &K, args: S::Args) -> S::Output
    where
        S::Output: Default,
    {
        self.try_resolve(key, args).unwrap_or_default()
    }
}

impl<K, S, M> DispatchTable<K, S, M>
where
    S: Signature<Args = ()>,
    M: CaseMap<K, BoxedCallable<S>>,
{
    /// [`resolve`](Self::resolve) for signatures without parameters.
    pub fn resolve_nullary(&self, key: &K) -> S::Output
    where
        S::Output: Default,
    {
        self.resolve(key, ())
    }

    /// [`try_resolve`](Self::try_resolve) for signatures without parameters.
    pub fn try_resolve_nullary(&self, key: &K) -> Option<S::Output> {
        self.try_resolve(key, ())
    }
}

impl<K, S: Signature, M> fmt::Debug for DispatchTable<K, S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("has_default", &self.default.is_some())
            .finish_non_exhaustive()
    }
}
