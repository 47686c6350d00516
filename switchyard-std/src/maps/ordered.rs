//! BTreeMap-based case map.
//!
//! This is the default backend. Keys are compared with their natural `Ord`.

use std::collections::BTreeMap;
use switchyard_core::{CaseLookup, CaseMap, CaseMapBuilder, LookupResult};

/// A case map backed by `BTreeMap`.
pub struct OrderedMap<K, V> {
    map: BTreeMap<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Get the number of cases.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Ord, V> CaseLookup<K, V> for OrderedMap<K, V> {
    fn lookup(&self, key: &K) -> LookupResult<'_, V> {
        self.map.get(key).into()
    }
}

impl<K: Ord, V> CaseMap<K, V> for OrderedMap<K, V> {
    type Builder = OrderedMapBuilder<K, V>;
}

/// Builder for `OrderedMap`.
pub struct OrderedMapBuilder<K, V> {
    map: BTreeMap<K, V>,
}

impl<K, V> Default for OrderedMapBuilder<K, V> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<K: Ord, V> CaseMapBuilder<K, V> for OrderedMapBuilder<K, V> {
    type Map = OrderedMap<K, V>;

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn insert(&mut self, key: K, value: V) {
        self.map.insert(key, value);
    }

    fn build(self) -> Self::Map {
        OrderedMap { map: self.map }
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedMapBuilder;
    use switchyard_core::{CaseLookup, CaseMapBuilder};

    #[test]
    fn test_basic_lookup() {
        let mut builder: OrderedMapBuilder<i32, &str> = OrderedMapBuilder::default();
        builder.insert(4, "four");
        builder.insert(1, "one");

        let map = builder.build();

        assert_eq!(map.lookup(&1).found(), Some(&"one"));
        assert_eq!(map.lookup(&4).found(), Some(&"four"));
        assert_eq!(map.lookup(&3).found(), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_insert_replaces() {
        let mut builder: OrderedMapBuilder<String, i32> = OrderedMapBuilder::default();
        builder.insert("key".to_string(), 1);
        assert!(builder.contains(&"key".to_string()));
        builder.insert("key".to_string(), 2);

        let map = builder.build();
        assert_eq!(map.lookup(&"key".to_string()).found(), Some(&2));
    }
}
