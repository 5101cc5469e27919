//! Shared Cache Module
//!
//! Thread-safe cache handle: the store behind a single mutex, plus the
//! reaper task that keeps it bounded and the lifecycle to stop that task.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::tasks::{abort_on_panic, spawn_reaper, PanicHandler};

/// A cache of raw response bodies.
pub type ByteCache = Cache<Vec<u8>>;

// == Cache State ==
/// Lifecycle of a cache's reaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// The reaper is sweeping once per interval
    Running,
    /// `close` has completed or the reaper exited; no further sweeps happen
    Stopped,
}

/// Shutdown plumbing for a running reaper.
#[derive(Debug)]
struct Reaper {
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

// == Cache ==
/// Time-bounded key/value cache with a background reaper.
///
/// Entries older than the interval are never returned, and are physically
/// removed by the reaper within one further interval. The cache never loads
/// anything itself; see [`Cache::get_or_load`] for the cache-aside helper.
///
/// Dropping the cache signals the reaper to stop without waiting for it.
/// Call [`Cache::close`] to stop it deterministically.
#[derive(Debug)]
pub struct Cache<V> {
    store: Arc<Mutex<CacheStore<V>>>,
    interval: Duration,
    reaper: Mutex<Option<Reaper>>,
}

impl<V> Cache<V>
where
    V: Clone + Send + 'static,
{
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current tokio
    /// runtime.
    ///
    /// If a sweep ever panics, the panic is logged and the process aborts.
    ///
    /// # Errors
    /// - [`CacheError::InvalidConfig`] if `interval` is zero
    /// - [`CacheError::NoRuntime`] if called outside a tokio runtime
    pub fn new(interval: Duration) -> Result<Self> {
        Self::with_panic_handler(interval, Arc::new(abort_on_panic))
    }

    /// Like [`Cache::new`], with `on_panic` called instead of aborting when a
    /// sweep panics.
    pub(crate) fn with_panic_handler(interval: Duration, on_panic: PanicHandler) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "cache interval must be greater than zero".to_string(),
            ));
        }
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let (shutdown, shutdown_rx) = oneshot::channel();
        let handle = spawn_reaper(&runtime, store.clone(), interval, shutdown_rx, on_panic);

        info!(interval_ms = interval.as_millis() as u64, "Cache created");

        Ok(Self {
            store,
            interval,
            reaper: Mutex::new(Some(Reaper { shutdown, handle })),
        })
    }

    // == Add ==
    /// Inserts or overwrites the value for `key`, stamped with the current
    /// time.
    pub async fn add(&self, key: impl Into<String>, value: V) {
        let mut store = self.store.lock().await;
        store.add(key.into(), value, Instant::now());
    }

    // == Get ==
    /// Returns a copy of the value for `key`, or `None` if it is absent or
    /// older than the interval. Reading does not extend an entry's life.
    pub async fn get(&self, key: &str) -> Option<V> {
        let mut store = self.store.lock().await;
        store.get(key, Instant::now())
    }

    // == Get Or Load ==
    /// Returns the cached value for `key`, or runs `load` and caches its
    /// output on success.
    ///
    /// The lock is not held while `load` runs, so concurrent misses on the
    /// same key may each load; the last one to finish wins. Errors from
    /// `load` are returned unchanged and nothing is cached for them.
    pub async fn get_or_load<F, Fut, E>(&self, key: &str, load: F) -> std::result::Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        if let Some(value) = self.get(key).await {
            debug!(key, "Cache hit");
            return Ok(value);
        }

        debug!(key, "Cache miss, loading");
        let value = load().await?;
        self.add(key, value.clone()).await;
        Ok(value)
    }

    // == Close ==
    /// Stops the reaper and waits for it to exit.
    ///
    /// Calling `close` again is a no-op. The cache still answers `add` and
    /// `get` afterwards; stale entries are then only dropped on lookup.
    /// [`Cache::state`] waits for `close` to finish, so it never reports
    /// `Stopped` while a sweep is still running.
    ///
    /// # Panics
    /// Re-raises a panic that escaped the reaper task.
    pub async fn close(&self) {
        let mut slot = self.reaper.lock().await;
        let Some(Reaper { shutdown, handle }) = slot.take() else {
            return;
        };

        // Fails only if the reaper already exited, which the join reports.
        let _ = shutdown.send(());

        match handle.await {
            Ok(()) => info!("Cache closed"),
            Err(err) if err.is_panic() => {
                error!("Cache reaper panicked");
                std::panic::resume_unwind(err.into_panic());
            }
            Err(err) => warn!(error = %err, "Cache reaper was cancelled"),
        }
    }

    // == State ==
    /// Returns `Running` while the reaper is alive and sweeping.
    ///
    /// A reaper that exited on its own, after a panicking sweep, reports
    /// `Stopped` even though `close` was never called.
    pub async fn state(&self) -> CacheState {
        match self.reaper.lock().await.as_ref() {
            Some(reaper) if !reaper.handle.is_finished() => CacheState::Running,
            _ => CacheState::Stopped,
        }
    }

    // == Interval ==
    /// Returns the staleness threshold, which is also the reaper period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Number of entries currently held, stale ones not yet reaped included.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }
}
