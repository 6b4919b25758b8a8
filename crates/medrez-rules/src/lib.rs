//! MedRez Rules - deterministic advisory engines
//!
//! Two pure, side-effect-free engines evaluated by views against a store
//! snapshot:
//! - [`generate_rule_based_insights`]: qualitative advisories for a single
//!   case, independent of any external AI call
//! - [`generate_actions`]: a bounded, prioritized next-best-action feed
//!   over the whole portfolio
//!
//! Plus the deterministic correspondence drafts the action feed falls back
//! to when the external drafting service is unavailable.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod actions;
pub mod drafts;
pub mod insights;

pub use actions::{generate_actions, ActionItem, ActionPriority};
pub use drafts::{build_deterministic_draft, resolve_action_kind, resolve_event_type, ActionKind};
pub use insights::{generate_rule_based_insights, Insight, InsightKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
