//! Ordered count tables
//!
//! Every aggregation in the crate ends in the same shape: a list of
//! `(key, count)` sorted by count descending, ties kept in the order the keys
//! were first seen. `CountTable` is that shape. Counting goes through an
//! insertion-ordered map and the final sort is stable, so identical input
//! always yields identical output.

use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountTable<K> {
    entries: Vec<(K, u64)>,
}

impl<K: Hash + Eq> CountTable<K> {
    /// Count occurrences of each key and rank them
    pub fn tally<I: IntoIterator<Item = K>>(items: I) -> Self {
        Self::sum(items.into_iter().map(|k| (k, 1)))
    }

    /// Sum weights per key and rank the totals
    pub fn sum<I: IntoIterator<Item = (K, u64)>>(items: I) -> Self {
        let mut totals: IndexMap<K, u64> = IndexMap::new();
        for (key, weight) in items {
            *totals.entry(key).or_insert(0) += weight;
        }
        Self::from_counts(totals)
    }

    /// Rank counts already accumulated in first-seen order
    pub fn from_counts(counts: IndexMap<K, u64>) -> Self {
        let mut entries: Vec<(K, u64)> = counts.into_iter().collect();
        // stable: equal counts keep first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        CountTable { entries }
    }

    /// Count recorded for `key`, if present
    pub fn get(&self, key: &K) -> Option<u64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
    }
}

impl<K> CountTable<K> {
    pub fn empty() -> Self {
        CountTable {
            entries: Vec::new(),
        }
    }

    /// The first `k` entries; the whole table when it is shorter.
    ///
    /// `k == 0` yields an empty table.
    pub fn top_k(&self, k: usize) -> Self
    where
        K: Clone,
    {
        CountTable {
            entries: self.entries.iter().take(k).cloned().collect(),
        }
    }

    pub fn truncate(&mut self, k: usize) {
        self.entries.truncate(k);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn entries(&self) -> &[(K, u64)] {
        &self.entries
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

impl<K> Default for CountTable<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K> IntoIterator for CountTable<K> {
    type Item = (K, u64);
    type IntoIter = std::vec::IntoIter<(K, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
