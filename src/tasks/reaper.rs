//! Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::cache::CacheStore;

/// Called with the panic message when a sweep panics.
pub type PanicHandler = Arc<dyn Fn(&str) + Send + Sync>;

// == Abort On Panic ==
/// Default [`PanicHandler`]: logs the panic and aborts the process.
///
/// A panicking sweep leaves the store unbounded, so the process is not
/// allowed to keep running on it.
pub fn abort_on_panic(message: &str) {
    error!(panic = message, "Reaper panicked, aborting");
    std::process::abort();
}

/// Extracts the message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}

/// Spawns a background task that sweeps stale entries out of `store`.
///
/// The first sweep happens one `period` after the call, then every `period`
/// after that. Each sweep holds the store's lock for the length of one scan.
///
/// The task exits when `shutdown` receives a value or its sender is dropped,
/// so dropping the owning cache is enough to end it. Await the returned
/// handle to wait for the exit.
///
/// A panic during a sweep is caught and passed to `on_panic` as soon as it
/// happens. If the handler returns, the task exits and sweeps no more.
pub fn spawn_reaper<V>(
    runtime: &Handle,
    store: Arc<Mutex<CacheStore<V>>>,
    period: Duration,
    mut shutdown: oneshot::Receiver<()>,
    on_panic: PanicHandler,
) -> JoinHandle<()>
where
    V: Clone + Send + 'static,
{
    runtime.spawn(async move {
        debug!(period_ms = period.as_millis() as u64, "Reaper started");

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    let swept = {
                        let mut guard = store.lock().await;
                        panic::catch_unwind(AssertUnwindSafe(|| {
                            let removed = guard.sweep(Instant::now());
                            (removed, guard.len())
                        }))
                    };

                    match swept {
                        Ok((removed, remaining)) if removed > 0 => {
                            info!(removed, remaining, "Reaper removed stale entries");
                        }
                        Ok((_, remaining)) => {
                            debug!(remaining, "Reaper found no stale entries");
                        }
                        Err(payload) => {
                            let message = panic_message(payload.as_ref());
                            error!(panic = message, "Reaper sweep panicked");
                            on_panic(message);
                            break;
                        }
                    }
                }
            }
        }

        debug!("Reaper stopped");
    })
}
