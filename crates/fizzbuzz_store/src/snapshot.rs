use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// In-memory image of the persisted counter file.
///
/// The map keeps insertion order, and the JSON layout is a single top-level
/// object with one `counterMap` field, so a file written by one process
/// round-trips byte-stably through another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    #[serde(rename = "counterMap")]
    counter_map: IndexMap<String, u64>,
}

impl CounterSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.counter_map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counter_map.len()
    }

    /// Current count for `key`; zero when the key was never recorded.
    pub fn count(&self, key: &str) -> u64 {
        self.counter_map.get(key).copied().unwrap_or(0)
    }

    /// Increments `key` by one and returns its new count. A fresh key starts
    /// at the end of the map, preserving first-use order.
    pub fn add_entry(&mut self, key: &str) -> u64 {
        let count = self.counter_map.entry(key.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Key with the highest count, or `None` when nothing was recorded yet.
    ///
    /// Ties go to the earliest-inserted key: only a strictly greater count
    /// displaces the current best.
    pub fn most_used(&self) -> Option<&str> {
        let mut best: Option<(&str, u64)> = None;
        for (key, &count) in &self.counter_map {
            match best {
                Some((_, max)) if count <= max => {}
                _ => best = Some((key.as_str(), count)),
            }
        }
        best.map(|(key, _)| key)
    }
}
