//! Pokecache - A time-bounded in-memory response cache
//!
//! Memoizes responses of a remote paginated API, with a background reaper
//! that evicts entries once they outlive the cache interval. Also ships the
//! Pokedex REPL that uses it.

pub mod cache;
pub mod config;
pub mod error;
pub mod pokeapi;
pub mod repl;
pub mod tasks;

pub use cache::{ByteCache, Cache, CacheState, CacheStats};
pub use config::Config;
pub use error::{CacheError, Result};
