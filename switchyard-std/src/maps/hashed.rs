//! HashMap-based case map.

use std::{collections::HashMap, hash::Hash};
use switchyard_core::{CaseLookup, CaseMap, CaseMapBuilder, LookupResult};

/// A case map backed by `HashMap`.
///
/// Works with any hashable key type.
pub struct HashedMap<K, V> {
    map: HashMap<K, V>,
}

impl<K, V> HashedMap<K, V> {
    /// Get the number of cases.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Hash + Eq, V> CaseLookup<K, V> for HashedMap<K, V> {
    fn lookup(&self, key: &K) -> LookupResult<'_, V> {
        self.map.get(key).into()
    }
}

impl<K: Hash + Eq, V> CaseMap<K, V> for HashedMap<K, V> {
    type Builder = HashedMapBuilder<K, V>;
}

/// Builder for `HashedMap`.
pub struct HashedMapBuilder<K, V> {
    map: HashMap<K, V>,
}

impl<K, V> Default for HashedMapBuilder<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq, V> CaseMapBuilder<K, V> for HashedMapBuilder<K, V> {
    type Map = HashedMap<K, V>;

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn insert(&mut self, key: K, value: V) {
        self.map.insert(key, value);
    }

    fn build(self) -> Self::Map {
        HashedMap { map: self.map }
    }
}
