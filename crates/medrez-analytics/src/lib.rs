//! MedRez Analytics - selectors and KPI aggregation
//!
//! Pure read-only queries over an `AppData` snapshot. The snapshot is an
//! explicit parameter everywhere; nothing here holds or mutates state
//! except [`MemoizedKpis`], which caches one KPI fold keyed by the store's
//! snapshot version.
//!
//! Dataset sizes are tens to low hundreds of cases, so every aggregate is
//! a straight fold. Division-by-zero degrades to 0, never NaN.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod kpis;
pub mod memo;
pub mod selectors;

pub use kpis::{
    portfolio_kpis, recovery_by_provider, status_distribution, PortfolioKpis, ProviderRecovery,
};
pub use memo::MemoizedKpis;
pub use selectors::{
    at_risk_cases, attorney_by_id, case_by_id, case_events, provider_by_id, recent_activity,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
