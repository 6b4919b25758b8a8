//! Reference parties: treating providers and plaintiff attorneys
//!
//! Both are immutable reference data - created at seed time, never mutated
//! by the core. Cases point at them by id.

use serde::{Deserialize, Serialize};

/// A treating medical provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Unique provider id
    pub id: String,
    /// Provider display name
    pub name: String,
    /// Medical specialty
    pub specialty: String,
    /// Practice name
    pub practice_name: String,
    /// US state code
    pub state: String,
}

/// Case-volume tier for an attorney relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseVolumeTier {
    High,
    Medium,
    Low,
}

/// A plaintiff attorney / law firm of record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attorney {
    /// Unique attorney id
    pub id: String,
    /// Law firm name
    pub firm_name: String,
    /// Attorney display name
    pub attorney_name: String,
    /// Relative case volume handled by this firm
    pub case_volume_tier: CaseVolumeTier,
}
