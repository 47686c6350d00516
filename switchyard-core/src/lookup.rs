//! Case lookup abstraction layer.
//!
//! A dispatch table stores its cases in a backend that maps keys to
//! callables. This module defines the traits those backends implement so
//! that an ordered map, a hash map or a map with a caller-supplied ordering
//! can be swapped without changing the table.
//!
//! Backends are built once through a [`CaseMapBuilder`] and are read-only
//! afterwards.

/// Outcome of looking a key up in a case map.
///
/// Borrows the stored value on a hit so the table can invoke the callable in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult<'a, V> {
    /// The key is bound to this value.
    Found(&'a V),
    /// The key is not bound.
    Missing,
}

impl<'a, V> LookupResult<'a, V> {
    /// `true` on [`LookupResult::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    /// The bound value, or `None` for a missing key.
    pub fn found(self) -> Option<&'a V> {
        match self {
            LookupResult::Found(v) => Some(v),
            LookupResult::Missing => None,
        }
    }
}

impl<'a, V> From<Option<&'a V>> for LookupResult<'a, V> {
    fn from(value: Option<&'a V>) -> Self {
        value.map_or(LookupResult::Missing, LookupResult::Found)
    }
}

/// Read-only key to value lookup.
pub trait CaseLookup<K, V> {
    /// Look up the value bound to `key`.
    fn lookup(&self, key: &K) -> LookupResult<'_, V>;

    /// Check if a key is bound.
    fn contains(&self, key: &K) -> bool {
        self.lookup(key).is_found()
    }
}

/// Builder for constructing a lookup backend.
///
/// Duplicate handling is decided by the caller before [`insert`] is reached;
/// `insert` always replaces an existing binding.
///
/// [`insert`]: CaseMapBuilder::insert
pub trait CaseMapBuilder<K, V>: Default {
    /// The backend this builder produces.
    type Map: CaseLookup<K, V>;

    /// Check whether `key` has already been inserted.
    fn contains(&self, key: &K) -> bool;

    /// Bind `key` to `value`, replacing any previous binding.
    fn insert(&mut self, key: K, value: V);

    /// Build the backend, consuming the builder.
    fn build(self) -> Self::Map;
}

/// A lookup backend that names its own builder.
pub trait CaseMap<K, V>: CaseLookup<K, V> + Sized {
    /// The builder producing this backend.
    type Builder: CaseMapBuilder<K, V, Map = Self>;
}

/// How a table treats a `Case` whose key was already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail construction with [`BuildError::DuplicateKey`].
    ///
    /// [`BuildError::DuplicateKey`]: crate::BuildError::DuplicateKey
    #[default]
    Reject,
    /// Keep the first registration and ignore later ones.
    KeepFirst,
    /// Later registrations override earlier ones.
    KeepLast,
}

#[cfg(test)]
mod tests {
    use super::{DuplicatePolicy, LookupResult};

    #[test]
    fn test_found_and_missing() {
        let callable_slot = "case 7";
        let hit = LookupResult::Found(&callable_slot);
        let miss: LookupResult<&str> = LookupResult::Missing;

        assert!(hit.is_found());
        assert_eq!(hit.found(), Some(&"case 7"));
        assert!(!miss.is_found());
        assert!(miss.found().is_none());
    }

    #[test]
    fn test_lookup_result_from_option() {
        let val = "x";
        assert_eq!(LookupResult::from(Some(&val)), LookupResult::Found(&"x"));
        assert_eq!(LookupResult::<&str>::from(None), LookupResult::Missing);
    }

    #[test]
    fn test_duplicate_policy_defaults_to_reject() {
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Reject);
    }
}
