//! Cache Module
//!
//! Provides an in-memory, time-bounded cache whose stale entries are removed
//! by a background reaper task.

mod entry;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use shared::{ByteCache, Cache, CacheState};
pub use stats::CacheStats;
pub use store::CacheStore;
