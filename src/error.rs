//! Error types for the cache
//!
//! Provides unified error handling using thiserror. Lookups never fail: a
//! miss is `None`, not an error. Only construction can go wrong.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Construction parameters are unusable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The reaper needs a tokio runtime to run on
    #[error("No tokio runtime available to run the reaper")]
    NoRuntime,
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
