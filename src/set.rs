//! Set of unique elements, with a JSON array codec.
//!
//! `null` decodes to an absent set (use `Option<Set<T>>`), an array decodes
//! to a set with duplicates removed, and anything else is rejected.

use crate::error::{IndexError, Result};
use serde::de::{DeserializeOwned, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

const EXPECTED_ARRAY: &str = "Set: expected JSON array";

/// An unordered collection of unique elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set<T: Eq + Hash> {
    items: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    /// Add `value`. Returns `false` if it was already present.
    pub fn add(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    pub fn has(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Remove `value`. Returns `false` if it was not present.
    pub fn del(&mut self, value: &T) -> bool {
        self.items.remove(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        self.items.union(&other.items).cloned().collect()
    }

    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        self.items.intersection(&other.items).cloned().collect()
    }
}

impl<T: Eq + Hash + Serialize> Set<T> {
    /// Encode as a JSON array (element order unspecified).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| IndexError::SerializationError(e.to_string()))
    }
}

impl<T: Eq + Hash + DeserializeOwned> Set<T> {
    /// Decode from JSON. `null` yields `None`.
    pub fn from_json(json: &str) -> Result<Option<Self>> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| IndexError::SerializationError(e.to_string()))?;
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Array(_) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| IndexError::SerializationError(e.to_string())),
            _ => Err(IndexError::MalformedEncoding(EXPECTED_ARRAY.to_string())),
        }
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Eq + Hash + Serialize> Serialize for Set<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

struct SetVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for SetVisitor<T>
where
    T: Deserialize<'de> + Eq + Hash,
{
    type Value = Set<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(EXPECTED_ARRAY)
    }

    fn visit_seq<A: SeqAccess<'de>>(
        self,
        mut seq: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        let mut set = Set::new();
        while let Some(item) = seq.next_element()? {
            set.add(item);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for Set<T>
where
    T: Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_seq(SetVisitor(PhantomData))
    }
}
