//! Collection types used by the token tables.

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// An ordered map that preserves insertion order.
///
/// Entries are never removed, so the position of an entry is stable for the
/// lifetime of the map and can be used as a dense index.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: FxHashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a new entry, handing the value back if the key is taken.
    ///
    /// Unlike a plain map insert this never replaces an existing value.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<usize, V> {
        if self.index.contains_key(&key) {
            return Err(value);
        }
        let idx = self.entries.len();
        self.index.insert(key.clone(), idx);
        self.entries.push((key, value));
        Ok(idx)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    /// Position of `key` in insertion order.
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    pub fn get_index(&self, idx: usize) -> Option<(&K, &V)> {
        self.entries.get(idx).map(|(k, v)| (k, v))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-export FxHashMap for convenience.
pub type FxMap<K, V> = FxHashMap<K, V>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_preserves_order() {
        let mut map = OrderedMap::new();
        map.try_insert("c", 3).unwrap();
        map.try_insert("a", 1).unwrap();
        map.try_insert("b", 2).unwrap();

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
        assert_eq!(map.position(&"a"), Some(1));
        assert_eq!(map.get_index(2), Some((&"b", &2)));
    }

    #[test]
    fn test_try_insert_keeps_first_value() {
        let mut map = OrderedMap::new();
        assert_eq!(map.try_insert("a", 1), Ok(0));
        assert_eq!(map.try_insert("a", 2), Err(2));
        assert_eq!(map.get(&"a"), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut map: OrderedMap<String, u32> = OrderedMap::with_capacity(4);
        map.try_insert("comma".to_string(), 7).unwrap();
        assert_eq!(map.get("comma"), Some(&7));
        assert!(map.contains_key("comma"));
        assert!(!map.contains_key("semi"));
        assert_eq!(map.get("semi"), None);
    }
}
