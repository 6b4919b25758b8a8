//! Error types for the store
//!
//! Only load-time failures are allowed to reach callers as errors. Cache
//! corruption is a cache miss and cache write failures are swallowed (and
//! logged); neither appears here.

/// Failure to obtain the seed dataset
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Seed file unreadable
    #[error("seed read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Seed fetch failed at the transport level
    #[error("seed fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Seed fetch returned a non-success status
    #[error("seed fetch returned status {0}")]
    Status(u16),

    /// Seed document did not parse into the `AppData` shape
    #[error("seed parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Seed source unavailable for another reason
    #[error("seed source unavailable: {0}")]
    Unavailable(String),
}

/// Store-level error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Initial load failed; `data` remains empty
    #[error("load failed: {0}")]
    Load(#[from] SeedError),

    /// Mutation attempted before a successful load
    #[error("store has no loaded dataset")]
    NotLoaded,
}
