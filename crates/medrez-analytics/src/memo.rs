//! Version-keyed KPI memoization
//!
//! The selectors are cheap enough to recompute, but views read KPIs on
//! every render. `MemoizedKpis` caches the fold keyed by the store's
//! snapshot version - a repeated read of the same version returns the
//! cached value without touching the dataset.

use crate::kpis::{portfolio_kpis, PortfolioKpis};
use medrez_model::AppData;
use parking_lot::Mutex;

/// KPI fold cache keyed by snapshot version
#[derive(Debug, Default)]
pub struct MemoizedKpis {
    cached: Mutex<Option<(u64, PortfolioKpis)>>,
}

impl MemoizedKpis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// KPIs for the given snapshot, recomputed only when `version` changes
    pub fn portfolio_kpis(&self, version: u64, data: &AppData) -> PortfolioKpis {
        let mut cached = self.cached.lock();
        if let Some((cached_version, kpis)) = *cached {
            if cached_version == version {
                return kpis;
            }
        }
        let kpis = portfolio_kpis(data);
        *cached = Some((version, kpis));
        kpis
    }
}
