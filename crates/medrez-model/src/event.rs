//! Append-only workflow events
//!
//! Events record discrete actions taken on a case. They are immutable once
//! created - the core never updates or deletes them - and `case_id` is not
//! enforced against the case collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed vocabulary of workflow event types
///
/// `Negotiation` and `Intake` are legacy values kept for seed compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowEventType {
    IntakeCompleted,
    ContractSigned,
    RecordsRequested,
    TreatmentDocumented,
    InvoiceIssued,
    FollowUpSent,
    SettlementReached,
    PaymentReceived,
    Negotiation,
    Alert,
    DemandSent,
    Intake,
    NoticeGenerated,
    FollowUpScheduled,
}

/// One timestamped workflow log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseEvent {
    /// Case this event belongs to (not enforced)
    pub case_id: String,
    /// Ordering key; retrieval is always most-recent-first
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: WorkflowEventType,
    /// Free-text description
    pub description: String,
}

impl CaseEvent {
    /// Convenience constructor stamping the current time
    #[must_use]
    pub fn now(
        case_id: impl Into<String>,
        event_type: WorkflowEventType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            timestamp: Utc::now(),
            event_type,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_type_key() {
        let event = CaseEvent {
            case_id: "case_001".into(),
            timestamp: "2025-03-01T10:30:00Z".parse().unwrap(),
            event_type: WorkflowEventType::IntakeCompleted,
            description: "New PI case intake created.".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "IntakeCompleted");
        assert_eq!(json["caseId"], "case_001");
    }
}
