//! Insertion-ordered counting table.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Mapping from a grouping key to an occurrence count.
///
/// Iteration follows discovery order: the order in which keys were first
/// added. Count-ordered views ([`ranked`](Histogram::ranked),
/// [`top`](Histogram::top)) break ties by discovery order too, so every
/// "most frequent" query resolves ties in favour of the first-encountered key.
///
/// ```rust
/// use chatstats::core::Histogram;
///
/// let hist: Histogram<&str> = ["b", "a", "b", "a", "c"].into_iter().collect();
/// assert_eq!(hist.get(&"a"), 2);
/// assert_eq!(hist.most_frequent(), Some((&"b", 2)));
/// assert_eq!(hist.keys().copied().collect::<Vec<_>>(), ["b", "a", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Histogram<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K> Default for Histogram<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Histogram<K> {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    /// Counts `n` occurrences of `key`.
    pub fn add_n(&mut self, key: K, n: usize) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += n;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, n));
        }
    }

    /// Returns the count for `key`, zero if never seen.
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Returns `true` if `key` has been counted.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Iterates `(key, count)` in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    /// Iterates keys in discovery order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// The key with the highest count; the first-discovered key wins ties.
    pub fn most_frequent(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (key, count) in self.iter() {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((key, count));
            }
        }
        best
    }

    /// All entries ordered by descending count, ties in discovery order.
    pub fn ranked(&self) -> Vec<(&K, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        // stable sort keeps discovery order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest-count entries, ordered as in [`ranked`](Self::ranked).
    pub fn top(&self, n: usize) -> Vec<(&K, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Histogram<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut hist = Self::new();
        for key in iter {
            hist.add(key);
        }
        hist
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for Histogram<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<K: Serialize> Serialize for Histogram<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
