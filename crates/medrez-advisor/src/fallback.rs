//! Deterministic fallback advisory
//!
//! Derives an advisory payload from the rule engine so the dashboard stays
//! fully operable with the external service down.

use crate::payload::AdvisoryPayload;
use medrez_model::Case;
use medrez_rules::generate_rule_based_insights;

/// Confidence reported for rule-derived advisories
const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Build an advisory from the deterministic insight rules
///
/// Rule messages become the next-best actions; a quiet case gets the
/// standard review guidance instead of an empty list, so the fallback
/// itself can never produce an empty payload.
#[must_use]
pub fn fallback_payload(case: &Case) -> AdvisoryPayload {
    let insights = generate_rule_based_insights(case);

    let next_best_actions = if insights.is_empty() {
        vec![
            "Review documentation and initiate follow-up.".to_string(),
            "Check for outstanding liens.".to_string(),
        ]
    } else {
        insights.into_iter().map(|i| i.message).collect()
    };

    AdvisoryPayload {
        next_best_actions,
        documentation_gaps: Vec::new(),
        payment_delay_risk: case.risk_tier,
        follow_up_recommendation: "Manual review recommended to ensure no timelines are missed."
            .to_string(),
        confidence: FALLBACK_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medrez_model::{CaseStatus, RiskTier};
    use medrez_test_utils::case;

    #[test]
    fn insights_become_next_best_actions() {
        let mut c = case("case_x");
        c.status = CaseStatus::Negotiation;
        c.predicted_time_to_settlement_days = 300.0;

        let payload = fallback_payload(&c);
        assert_eq!(payload.next_best_actions.len(), 2);
        assert!(payload.next_best_actions[0].contains("Long-tail"));
        assert_eq!(payload.confidence, FALLBACK_CONFIDENCE);
    }

    #[test]
    fn quiet_case_still_yields_actionable_guidance() {
        let payload = fallback_payload(&case("case_quiet"));
        assert!(!payload.is_empty());
        assert_eq!(payload.payment_delay_risk, RiskTier::Low);
        assert_eq!(payload.next_best_actions.len(), 2);
    }
}
