//! MedRez Advisor - external insight/strategy service boundary
//!
//! The drafting/insight service is an optional dependency: any failure at
//! this boundary (timeout, non-2xx status, malformed body, empty payload)
//! is recovered locally by deriving an advisory from the deterministic
//! rule engine. Callers never see an error, only which source produced the
//! advisory - primary functionality must not block on this service.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod client;
pub mod fallback;
pub mod payload;

pub use client::{Advisory, AdvisorClient, AdvisorError, AdvisorySource, ADVISOR_TIMEOUT};
pub use fallback::fallback_payload;
pub use payload::{derive_draft_from_payload, AdvisoryPayload, AdvisoryRequest};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
