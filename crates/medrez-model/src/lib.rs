//! MedRez Model - domain types for lien recovery portfolios
//!
//! Pure data shapes shared across the workspace:
//! - Reference parties (providers, attorneys)
//! - Cases with optional PI contract extensions
//! - Append-only workflow events
//! - The `AppData` aggregate root
//!
//! All types serialize with the camelCase wire names used by the seed
//! document and the session cache. No behavior lives here beyond accessors
//! and builders.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod case;
pub mod data;
pub mod event;
pub mod parties;

pub use case::{Case, CaseStatus, ContractStatus, ContractType, PiExtension, RiskTier};
pub use data::AppData;
pub use event::{CaseEvent, WorkflowEventType};
pub use parties::{Attorney, CaseVolumeTier, Provider};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
