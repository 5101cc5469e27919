//! Cache Entry Module
//!
//! Defines a single cached payload stamped with its insertion instant.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with its creation time.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Instant the entry was inserted
    pub created_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with `now`.
    pub fn new(value: V, now: Instant) -> Self {
        Self {
            value,
            created_at: now,
        }
    }

    // == Age ==
    /// Returns how long the entry has lived as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks if the entry has outlived `interval`.
    ///
    /// Boundary condition: an entry whose age is exactly `interval` is still
    /// fresh. Only an age strictly greater than the interval is stale.
    pub fn is_stale(&self, interval: Duration, now: Instant) -> bool {
        self.age(now) > interval
    }
}
