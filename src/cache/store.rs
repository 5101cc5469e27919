//! Cache Store Module
//!
//! Unsynchronized storage engine: a HashMap of timestamped entries plus
//! counters. [`Cache`](crate::cache::Cache) wraps it in a mutex and drives
//! sweeps from the reaper task.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage with age-based expiry.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Staleness threshold
    interval: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store whose entries go stale after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Stores `value` under `key`, stamped with `now`.
    ///
    /// An existing entry is overwritten and its age reset.
    pub fn add(&mut self, key: String, value: V, now: Instant) {
        self.entries.insert(key, CacheEntry::new(value, now));
        self.stats.record_insertion();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a copy of the value stored under `key`.
    ///
    /// Reading does not refresh the entry's age. A stale entry that the
    /// reaper has not reached yet is removed here and reported as a miss.
    pub fn get(&mut self, key: &str, now: Instant) -> Option<V> {
        let stale = match self.entries.get(key) {
            Some(entry) if !entry.is_stale(self.interval, now) => {
                self.stats.record_hit();
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if stale {
            self.entries.remove(key);
            self.stats.record_evictions(1);
            self.stats.set_total_entries(self.entries.len());
        }
        self.stats.record_miss();
        None
    }

    // == Sweep ==
    /// Removes every entry older than the interval as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let interval = self.interval;
        self.entries.retain(|_, entry| !entry.is_stale(interval, now));

        let removed = before - self.entries.len();
        self.stats.record_sweep();
        self.stats.record_evictions(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Interval ==
    /// Returns the staleness threshold.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
