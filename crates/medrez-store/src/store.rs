//! The `DataStore`
//!
//! An explicit, injectable store object (not an ambient global). One writer
//! per process; every mutation replaces the whole snapshot under the lock,
//! so readers never observe a partially applied change.

use crate::cache::SessionCache;
use crate::error::StoreError;
use crate::seed::SeedSource;
use medrez_model::{AppData, Case, CaseEvent};
use parking_lot::RwLock;
use std::sync::Arc;

/// A read-only view of the dataset at a point in time
///
/// The version increases on every installed load and every mutation, and
/// is the key consumers should memoize derived computations by.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub data: Arc<AppData>,
    pub version: u64,
}

#[derive(Debug, Default)]
struct State {
    data: Option<Arc<AppData>>,
    version: u64,
    /// Bumped by `reset()` so an in-flight load installs nothing
    epoch: u64,
    loading: bool,
    error: Option<String>,
}

/// Canonical owner of the in-memory dataset
pub struct DataStore {
    seed: Arc<dyn SeedSource>,
    cache: Arc<dyn SessionCache>,
    state: RwLock<State>,
}

impl DataStore {
    #[must_use]
    pub fn new(seed: Arc<dyn SeedSource>, cache: Arc<dyn SessionCache>) -> Self {
        Self {
            seed,
            cache,
            state: RwLock::new(State::default()),
        }
    }

    /// Load the dataset: session cache first, seed source on miss
    ///
    /// A malformed cached snapshot is a cache miss, never an error. A
    /// failed seed fetch/parse leaves the dataset empty and exposes the
    /// failure through [`DataStore::error`]. Calling `load` while a load
    /// is already in flight returns immediately without interleaving.
    pub async fn load(&self) -> Result<(), StoreError> {
        let epoch = {
            let mut state = self.state.write();
            if state.loading {
                return Ok(());
            }
            state.loading = true;
            state.error = None;
            state.epoch
        };

        if let Some(blob) = self.cache.restore() {
            match serde_json::from_str::<AppData>(&blob) {
                Ok(data) => {
                    if self.install(epoch, data) {
                        self.sync_cache();
                    }
                    return Ok(());
                }
                Err(err) => {
                    tracing::debug!(%err, "cached snapshot malformed, treating as miss");
                }
            }
        }

        self.fetch_seed(epoch).await
    }

    /// Discard the cached snapshot and re-run the seed path unconditionally
    ///
    /// Supersedes any in-flight load: a load that completes after this
    /// call installs nothing.
    pub async fn reset(&self) -> Result<(), StoreError> {
        let epoch = {
            let mut state = self.state.write();
            state.epoch += 1;
            state.loading = true;
            state.error = None;
            state.epoch
        };
        self.cache.clear();
        self.fetch_seed(epoch).await
    }

    /// Append a case
    ///
    /// Append-only; id uniqueness is the producer's responsibility. A
    /// duplicate id shadows the existing case only for first-match lookups.
    pub fn add_case(&self, case: Case) -> Result<(), StoreError> {
        self.append(|data| data.with_case(case))
    }

    /// Append a workflow event
    ///
    /// No validation that `case_id` exists; a dangling reference degrades
    /// to an empty selector result, never an error.
    pub fn add_event(&self, event: CaseEvent) -> Result<(), StoreError> {
        self.append(|data| data.with_event(event))
    }

    /// Current snapshot, `None` before the first successful load
    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot> {
        let state = self.state.read();
        state.data.as_ref().map(|data| Snapshot {
            data: Arc::clone(data),
            version: state.version,
        })
    }

    /// True while a load or reset is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// Last load failure, if the dataset could not be obtained
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    async fn fetch_seed(&self, epoch: u64) -> Result<(), StoreError> {
        match self.seed.fetch().await {
            Ok(data) => {
                if self.install(epoch, data) {
                    self.sync_cache();
                }
                Ok(())
            }
            Err(err) => {
                let mut state = self.state.write();
                if state.epoch == epoch {
                    state.error = Some(err.to_string());
                    state.loading = false;
                }
                Err(StoreError::Load(err))
            }
        }
    }

    /// Install a loaded dataset unless a reset superseded this load
    fn install(&self, epoch: u64, data: AppData) -> bool {
        let mut state = self.state.write();
        if state.epoch != epoch {
            tracing::debug!("load superseded by reset, discarding result");
            return false;
        }
        state.data = Some(Arc::new(data));
        state.version += 1;
        state.loading = false;
        state.error = None;
        true
    }

    fn append(&self, f: impl FnOnce(&AppData) -> AppData) -> Result<(), StoreError> {
        {
            let mut state = self.state.write();
            let current = state.data.as_ref().ok_or(StoreError::NotLoaded)?;
            let next = Arc::new(f(current));
            state.data = Some(next);
            state.version += 1;
        }
        self.sync_cache();
        Ok(())
    }

    /// Synchronize the current snapshot to the session cache
    ///
    /// Failures are swallowed: the in-memory state stays authoritative and
    /// only cross-session durability is lost. They are logged so the
    /// tradeoff stays observable in production.
    fn sync_cache(&self) {
        let data = match self.snapshot() {
            Some(snapshot) => snapshot.data,
            None => return,
        };
        let blob = match serde_json::to_string(&*data) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(%err, "snapshot serialization failed, skipping cache sync");
                return;
            }
        };
        if let Err(err) = self.cache.persist(&blob) {
            tracing::warn!(%err, "session cache write failed, in-memory state remains authoritative");
        }
    }
}
