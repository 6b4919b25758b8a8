//! Lookup and ordering selectors
//!
//! First-match lookups return `None` for dangling references - callers
//! degrade to "Unknown", never an error. Event retrieval is always
//! most-recent-first.

use medrez_model::{AppData, Attorney, Case, CaseEvent, Provider, RiskTier};

/// How many entries the ranked/recent selectors return at most
const FEED_LIMIT: usize = 5;

/// Predicted recovery below this marks a case at risk regardless of tier
const AT_RISK_RECOVERY_FLOOR: f64 = 50.0;

/// First case with the given id
#[must_use]
pub fn case_by_id<'a>(data: &'a AppData, id: &str) -> Option<&'a Case> {
    data.cases.iter().find(|c| c.id == id)
}

/// First provider with the given id
#[must_use]
pub fn provider_by_id<'a>(data: &'a AppData, id: &str) -> Option<&'a Provider> {
    data.providers.iter().find(|p| p.id == id)
}

/// First attorney with the given id
#[must_use]
pub fn attorney_by_id<'a>(data: &'a AppData, id: &str) -> Option<&'a Attorney> {
    data.attorneys.iter().find(|a| a.id == id)
}

/// All events for a case, most recent first
#[must_use]
pub fn case_events<'a>(data: &'a AppData, case_id: &str) -> Vec<&'a CaseEvent> {
    let mut events: Vec<&CaseEvent> = data
        .events
        .iter()
        .filter(|e| e.case_id == case_id)
        .collect();
    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events
}

/// The five most recent events across the portfolio
#[must_use]
pub fn recent_activity(data: &AppData) -> Vec<&CaseEvent> {
    let mut events: Vec<&CaseEvent> = data.events.iter().collect();
    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events.truncate(FEED_LIMIT);
    events
}

/// Worst five at-risk cases, ascending by predicted recovery
///
/// A case is at risk when its tier is High or its predicted recovery is
/// below the floor. The sort is stable, so equal percentages keep
/// insertion order.
#[must_use]
pub fn at_risk_cases(data: &AppData) -> Vec<&Case> {
    let mut cases: Vec<&Case> = data
        .cases
        .iter()
        .filter(|c| {
            c.risk_tier == RiskTier::High || c.predicted_recovery_percent < AT_RISK_RECOVERY_FLOOR
        })
        .collect();
    cases.sort_by(|a, b| {
        a.predicted_recovery_percent
            .total_cmp(&b.predicted_recovery_percent)
    });
    cases.truncate(FEED_LIMIT);
    cases
}

#[cfg(test)]
mod tests {
    use super::*;
    use medrez_model::WorkflowEventType;
    use medrez_test_utils::{case, event, seed_data};

    #[test]
    fn lookups_return_none_for_dangling_ids() {
        let data = seed_data();
        assert!(case_by_id(&data, "case_missing").is_none());
        assert!(provider_by_id(&data, "prov_missing").is_none());
        assert!(attorney_by_id(&data, "att_missing").is_none());
        assert_eq!(case_by_id(&data, "case_001").unwrap().id, "case_001");
    }

    #[test]
    fn case_events_are_strictly_descending() {
        let data = seed_data();
        let events = case_events(&data, "case_001");
        assert_eq!(events.len(), 2);
        for pair in events.windows(2) {
            assert!(pair[0].timestamp > pair[1].timestamp);
        }
        assert_eq!(events[0].event_type, WorkflowEventType::ContractSigned);
    }

    #[test]
    fn recent_activity_caps_at_five() {
        let mut data = seed_data();
        for i in 0..10 {
            data.events.push(event(
                "case_001",
                &format!("2025-04-{:02}T12:00:00Z", i + 1),
                WorkflowEventType::FollowUpSent,
            ));
        }
        let recent = recent_activity(&data);
        assert_eq!(recent.len(), 5);
        for pair in recent.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn at_risk_ranks_worst_first_and_caps_at_five() {
        let mut data = seed_data();
        data.cases.clear();
        for (i, pct) in [72.0, 31.0, 49.0, 12.0, 55.0, 44.0, 48.0].iter().enumerate() {
            let mut c = case(&format!("case_{i:03}"));
            c.predicted_recovery_percent = *pct;
            if *pct >= 50.0 {
                c.risk_tier = medrez_model::RiskTier::High;
            }
            data.cases.push(c);
        }

        let at_risk = at_risk_cases(&data);
        assert_eq!(at_risk.len(), 5);
        for pair in at_risk.windows(2) {
            assert!(pair[0].predicted_recovery_percent <= pair[1].predicted_recovery_percent);
        }
        assert_eq!(at_risk[0].predicted_recovery_percent, 12.0);
    }

    #[test]
    fn at_risk_ties_keep_insertion_order() {
        let mut data = seed_data();
        data.cases.clear();
        for id in ["case_a", "case_b", "case_c"] {
            let mut c = case(id);
            c.predicted_recovery_percent = 40.0;
            data.cases.push(c);
        }
        let at_risk = at_risk_cases(&data);
        let ids: Vec<&str> = at_risk.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["case_a", "case_b", "case_c"]);
    }
}
