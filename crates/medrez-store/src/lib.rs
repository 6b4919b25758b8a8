//! MedRez Store - canonical dataset owner
//!
//! Owns the single in-memory [`medrez_model::AppData`] instance and its
//! persistence lifecycle:
//! - `load()` restores a prior session snapshot from the session cache,
//!   falling back to the configured seed source
//! - `add_case` / `add_event` are the only write paths, both append-only,
//!   both synchronized to the session cache
//! - `reset()` discards the cache and re-runs the seed path
//!
//! Consumers read whole-dataset snapshots; every mutation replaces the
//! snapshot rather than editing it in place, so reads are atomic from the
//! caller's perspective.
//!
//! # Example
//!
//! ```rust,ignore
//! use medrez_store::{DataStore, FileSeedSource, MemorySessionCache};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), medrez_store::StoreError> {
//! let store = DataStore::new(
//!     Arc::new(FileSeedSource::new("data/medrez-data.json")),
//!     Arc::new(MemorySessionCache::new()),
//! );
//! store.load().await?;
//!
//! let snapshot = store.snapshot().expect("loaded");
//! println!("{} cases", snapshot.data.cases.len());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cache;
pub mod error;
pub mod seed;
pub mod store;

pub use cache::{CacheWriteError, MemorySessionCache, SessionCache};
pub use error::{SeedError, StoreError};
pub use seed::{FileSeedSource, HttpSeedSource, SeedSource, StaticSeedSource};
pub use store::{DataStore, Snapshot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
