//! Session-scoped snapshot cache
//!
//! A key-scoped blob store holding one serialized `AppData` snapshot for
//! the lifetime of a session. Read once at boot (before the seed source),
//! written after every successful mutation, cleared on reset.
//!
//! Write failures must never surface to the store's callers - the live
//! in-memory state stays authoritative and only cross-session durability
//! is lost. The store logs them so the tradeoff remains observable.

use parking_lot::Mutex;

/// Failure to persist a snapshot blob
#[derive(Debug, thiserror::Error)]
#[error("session cache write failed: {0}")]
pub struct CacheWriteError(pub String);

/// Session-lifetime blob store for one serialized snapshot
pub trait SessionCache: Send + Sync {
    /// Read the cached snapshot blob, if any
    fn restore(&self) -> Option<String>;

    /// Replace the cached snapshot blob
    fn persist(&self, blob: &str) -> Result<(), CacheWriteError>;

    /// Discard the cached snapshot
    fn clear(&self);
}

/// In-process session cache
///
/// An optional quota models constrained storage: persisting a blob larger
/// than the quota fails the way a full browser storage bucket would.
#[derive(Debug, Default)]
pub struct MemorySessionCache {
    blob: Mutex<Option<String>>,
    quota_bytes: Option<usize>,
}

impl MemorySessionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache that rejects blobs larger than `quota_bytes`
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            blob: Mutex::new(None),
            quota_bytes: Some(quota_bytes),
        }
    }
}

impl SessionCache for MemorySessionCache {
    fn restore(&self) -> Option<String> {
        self.blob.lock().clone()
    }

    fn persist(&self, blob: &str) -> Result<(), CacheWriteError> {
        if let Some(quota) = self.quota_bytes {
            if blob.len() > quota {
                return Err(CacheWriteError(format!(
                    "quota exceeded ({} > {} bytes)",
                    blob.len(),
                    quota
                )));
            }
        }
        *self.blob.lock() = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.blob.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_returns_persisted_blob() {
        let cache = MemorySessionCache::new();
        assert!(cache.restore().is_none());
        cache.persist("{}").unwrap();
        assert_eq!(cache.restore().as_deref(), Some("{}"));
        cache.clear();
        assert!(cache.restore().is_none());
    }

    #[test]
    fn quota_rejects_oversized_blob() {
        let cache = MemorySessionCache::with_quota(4);
        assert!(cache.persist("tiny blob but too big").is_err());
        assert!(cache.restore().is_none());
        assert!(cache.persist("{}").is_ok());
    }
}
