//! Keyed container - the insertion-ordered associative array behind all board storage.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use thiserror::Error;

/// Lookup failure for a key that was never set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key not found: {key:?}")]
pub struct KeyNotFound {
    pub key: String,
}

/// A single key/value pair held by a [`KeyedContainer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

/// String-keyed mapping with unique keys and insertion-order enumeration.
///
/// Entries live in a growable vector in the order they were first set; a hash
/// index maps each key to its slot so lookups stay O(1). Overwriting a key keeps
/// its original position.
#[derive(Debug, Clone)]
pub struct KeyedContainer<V> {
    entries: Vec<Entry<V>>,

    /// Key -> position in `entries`.
    index: HashMap<String, usize>,
}

impl<V> KeyedContainer<V> {
    /// Create a new empty container.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty container with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite the value for `key`.
    ///
    /// Returns the previous value if the key was already present. An overwritten
    /// key keeps its position in the enumeration order.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(&slot) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[slot].value, value));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Entry { key, value });
        None
    }

    /// Get the value for `key`, failing with [`KeyNotFound`] when absent.
    pub fn get(&self, key: &str) -> Result<&V, KeyNotFound> {
        self.lookup(key).ok_or_else(|| KeyNotFound { key: key.to_string() })
    }

    /// Get a mutable reference to the value for `key`.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V, KeyNotFound> {
        self.lookup_mut(key)
            .ok_or_else(|| KeyNotFound { key: key.to_string() })
    }

    /// Get the value for `key` if present.
    pub fn lookup(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].value)
    }

    /// Get a mutable reference to the value for `key` if present.
    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut V> {
        match self.index.get(key) {
            Some(&slot) => Some(&mut self.entries[slot].value),
            None => None,
        }
    }

    /// Check if `key` has been set.
    pub fn has_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Position of `key` in the enumeration order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Snapshot of all keys in insertion order.
    ///
    /// The returned vector is detached from the container; later `set` calls do
    /// not affect it.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }

    /// Iterate keys in insertion order without copying them.
    pub fn iter_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|e| &e.value)
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|e| (e.key.as_str(), &e.value))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for KeyedContainer<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Order is part of equality: two containers with the same pairs in a different
// order display differently.
impl<V: PartialEq> PartialEq for KeyedContainer<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Eq> Eq for KeyedContainer<V> {}

impl<K: Into<String>, V> FromIterator<(K, V)> for KeyedContainer<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for KeyedContainer<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a, V> IntoIterator for &'a KeyedContainer<V> {
    type Item = &'a Entry<V>;
    type IntoIter = std::slice::Iter<'a, Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Serialized as the ordered entry list; the index is rebuilt on load.
impl<V: Serialize> Serialize for KeyedContainer<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for KeyedContainer<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<Entry<V>>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|e| (e.key, e.value)).collect())
    }
}
