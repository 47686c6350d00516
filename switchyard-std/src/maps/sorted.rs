//! Sorted-vector case map with a caller-supplied key ordering.
//!
//! Use this backend when the key type has no suitable `Ord`, or when two keys
//! that differ as values should select the same case (for example
//! case-insensitive strings). Keys that compare `Equal` under the ordering are
//! the same key.

use std::{cmp::Ordering, marker::PhantomData};
use switchyard_core::{CaseLookup, CaseMap, CaseMapBuilder, LookupResult};

/// A total ordering over keys, chosen at the type level.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use switchyard_std::maps::KeyOrder;
///
/// struct CaseInsensitive;
///
/// impl KeyOrder<String> for CaseInsensitive {
///     fn compare(a: &String, b: &String) -> Ordering {
///         a.to_lowercase().cmp(&b.to_lowercase())
///     }
/// }
/// ```
pub trait KeyOrder<K>: 'static {
    /// Compare two keys.
    fn compare(a: &K, b: &K) -> Ordering;
}

/// The key's own `Ord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<K: Ord> KeyOrder<K> for Natural {
    fn compare(a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// A case map stored as a vector sorted under `O`.
pub struct SortedMap<K, V, O = Natural> {
    /// Sorted by key under `O`.
    entries: Vec<(K, V)>,
    _order: PhantomData<fn() -> O>,
}

impl<K, V, O: KeyOrder<K>> SortedMap<K, V, O> {
    fn position(&self, key: &K) -> Result<usize, usize> {
        self.entries.binary_search_by(|(k, _)| O::compare(k, key))
    }

    /// Get the number of cases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V, O: KeyOrder<K>> CaseLookup<K, V> for SortedMap<K, V, O> {
    fn lookup(&self, key: &K) -> LookupResult<'_, V> {
        self.position(key)
            .ok()
            .map(|idx| &self.entries[idx].1)
            .into()
    }
}

impl<K, V, O: KeyOrder<K>> CaseMap<K, V> for SortedMap<K, V, O> {
    type Builder = SortedMapBuilder<K, V, O>;
}

/// Builder for `SortedMap`.
pub struct SortedMapBuilder<K, V, O = Natural> {
    inner: SortedMap<K, V, O>,
}

impl<K, V, O> Default for SortedMapBuilder<K, V, O> {
    fn default() -> Self {
        Self {
            inner: SortedMap {
                entries: Vec::new(),
                _order: PhantomData,
            },
        }
    }
}

impl<K, V, O: KeyOrder<K>> CaseMapBuilder<K, V> for SortedMapBuilder<K, V, O> {
    type Map = SortedMap<K, V, O>;

    fn contains(&self, key: &K) -> bool {
        self.inner.position(key).is_ok()
    }

    fn insert(&mut self, key: K, value: V) {
        match self.inner.position(&key) {
            Ok(idx) => self.inner.entries[idx] = (key, value),
            Err(idx) => self.inner.entries.insert(idx, (key, value)),
        }
    }

    fn build(self) -> Self::Map {
        self.inner
    }
}
