//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: removes stale cache entries once per cache interval

mod reaper;

pub use reaper::{abort_on_panic, spawn_reaper, PanicHandler};
