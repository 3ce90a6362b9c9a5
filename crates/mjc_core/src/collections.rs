//! Collection aliases used throughout the front end.

use rustc_hash::FxBuildHasher;

/// An insertion-ordered map with FxHash lookups.
///
/// Symbol tables are enumerated in declaration order, so plain hash maps are
/// not enough; `IndexMap` keeps the order while lookup stays O(1) expected.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// An insertion-ordered set with FxHash lookups.
pub type FxIndexSet<T> = indexmap::IndexSet<T, FxBuildHasher>;

/// A set that uses FxHash for fast hashing, suitable for compiler internals
/// where DoS resistance is not needed.
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_map_preserves_order() {
        let mut map: FxIndexMap<&str, i32> = FxIndexMap::default();
        map.insert("c", 3);
        map.insert("a", 1);
        map.insert("b", 2);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_index_set_positions_are_stable() {
        let mut set: FxIndexSet<&str> = FxIndexSet::default();
        assert_eq!(set.insert_full("x"), (0, true));
        assert_eq!(set.insert_full("y"), (1, true));
        assert_eq!(set.insert_full("x"), (0, false));
        assert_eq!(set.len(), 2);
    }
}
