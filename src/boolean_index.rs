//! Index partitioning values by a boolean flag

use std::hash::Hash;

use crate::set::Set;

/// Keeps one set of values per flag value.
#[derive(Debug, Clone)]
pub struct BooleanIndex<T: Eq + Hash> {
    truthy: Set<T>,
    falsy: Set<T>,
}

impl<T: Eq + Hash + Clone> BooleanIndex<T> {
    pub fn new() -> Self {
        Self {
            truthy: Set::new(),
            falsy: Set::new(),
        }
    }

    pub fn insert(&mut self, flag: bool, value: T) {
        if flag {
            self.truthy.add(value);
        } else {
            self.falsy.add(value);
        }
    }

    /// Copy of the partition for `flag`; later inserts do not show up in it.
    pub fn search(&self, flag: bool) -> Set<T> {
        if flag {
            self.truthy.clone()
        } else {
            self.falsy.clone()
        }
    }
}

impl<T: Eq + Hash + Clone> Default for BooleanIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partitions() {
        let mut index = BooleanIndex::new();
        index.insert(true, "a");
        index.insert(false, "b");
        index.insert(true, "c");
        index.insert(true, "a");

        assert_eq!(index.search(true), ["a", "c"].into_iter().collect::<Set<_>>());
        assert_eq!(index.search(false), ["b"].into_iter().collect::<Set<_>>());
    }

    #[test]
    fn test_search_returns_copy() {
        let mut index = BooleanIndex::new();
        index.insert(true, 1);
        let snapshot = index.search(true);
        index.insert(true, 2);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(index.search(true).len(), 2);
    }
}
