//! Advisory request/response contract
//!
//! The request carries a case's descriptive attributes plus recent event
//! types; the response is the structured advisory payload. A payload with
//! no actions and no recommendation text is treated as a failure by the
//! client, not silently rendered as an empty advisory.

use medrez_model::{Case, CaseEvent, CaseStatus, RiskTier, WorkflowEventType};
use medrez_rules::ActionItem;
use serde::{Deserialize, Serialize};

/// Descriptive case attributes sent to the service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    pub case_id: String,
    pub injury_type: String,
    pub risk_tier: RiskTier,
    pub status: CaseStatus,
    pub predicted_recovery_percent: f64,
    pub predicted_time_to_settlement_days: f64,
    pub recent_event_types: Vec<WorkflowEventType>,
}

impl AdvisoryRequest {
    /// Build a request from a case and its recent events
    #[must_use]
    pub fn for_case(case: &Case, recent_events: &[&CaseEvent]) -> Self {
        Self {
            case_id: case.id.clone(),
            injury_type: case.injury_type.clone(),
            risk_tier: case.risk_tier,
            status: case.status,
            predicted_recovery_percent: case.predicted_recovery_percent,
            predicted_time_to_settlement_days: case.predicted_time_to_settlement_days,
            recent_event_types: recent_events.iter().map(|e| e.event_type).collect(),
        }
    }
}

/// Structured advisory returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryPayload {
    #[serde(default)]
    pub next_best_actions: Vec<String>,
    #[serde(default)]
    pub documentation_gaps: Vec<String>,
    pub payment_delay_risk: RiskTier,
    #[serde(default)]
    pub follow_up_recommendation: String,
    #[serde(default)]
    pub confidence: f64,
}

impl AdvisoryPayload {
    /// True when the payload carries nothing actionable
    ///
    /// No actions AND no recommendation text means the service returned a
    /// husk; the client treats that the same as a transport failure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next_best_actions.is_empty() && self.follow_up_recommendation.trim().is_empty()
    }
}

/// Render an advisory payload into the correspondence draft format
///
/// Same framing as the deterministic template so the two paths are
/// interchangeable downstream.
#[must_use]
pub fn derive_draft_from_payload(payload: &AdvisoryPayload, item: &ActionItem) -> String {
    let firm = item.law_firm.as_deref().unwrap_or("the attorney of record");
    let attorney = item.attorney_name.as_deref().unwrap_or("Counsel");

    let mut body = String::new();
    if !payload.follow_up_recommendation.trim().is_empty() {
        body.push_str(payload.follow_up_recommendation.trim());
        body.push_str("\n\n");
    }
    if !payload.next_best_actions.is_empty() {
        body.push_str("Recommended next steps:\n");
        for action in &payload.next_best_actions {
            body.push_str("- ");
            body.push_str(action);
            body.push('\n');
        }
        body.push('\n');
    }

    format!(
        "RE: {action} - Case {case_id}\n\n\
         Dear {attorney} / {firm},\n\n\
         {body}Context: {reason}\n\n\
         The patient is not personally billed. Recovery is pursued through contract-backed \
         rights and documented fee assignments. Please acknowledge receipt and advise on the \
         expected timeline for resolution.",
        action = item.action,
        case_id = item.case_id,
        reason = item.reason,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AdvisoryPayload {
        AdvisoryPayload {
            next_best_actions: vec!["Confirm lien balance.".to_string()],
            documentation_gaps: Vec::new(),
            payment_delay_risk: RiskTier::Medium,
            follow_up_recommendation: "Request settlement timeline.".to_string(),
            confidence: 0.8,
        }
    }

    #[test]
    fn emptiness_requires_no_actions_and_no_recommendation() {
        let mut p = payload();
        assert!(!p.is_empty());

        p.next_best_actions.clear();
        assert!(!p.is_empty()); // recommendation still present

        p.follow_up_recommendation = "   ".to_string();
        assert!(p.is_empty());

        p.next_best_actions.push("Do something.".to_string());
        assert!(!p.is_empty()); // actions alone suffice
    }

    #[test]
    fn payload_parses_with_missing_optional_fields() {
        let parsed: AdvisoryPayload =
            serde_json::from_str(r#"{"paymentDelayRisk":"Low"}"#).unwrap();
        assert!(parsed.next_best_actions.is_empty());
        assert!(parsed.is_empty());
        assert_eq!(parsed.confidence, 0.0);
    }

    #[test]
    fn request_serializes_camel_case() {
        let c = medrez_test_utils::case("case_001");
        let request = AdvisoryRequest::for_case(&c, &[]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["caseId"], "case_001");
        assert!(json["predictedRecoveryPercent"].is_number());
        assert!(json["recentEventTypes"].as_array().unwrap().is_empty());
    }
}
