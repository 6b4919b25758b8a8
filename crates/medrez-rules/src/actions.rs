//! Action-recommendation engine
//!
//! Iterates the case collection in order; the first matching rule wins per
//! case, and the loop stops outright once five actions are accumulated.
//! Case order in the source collection therefore decides which cases are
//! represented when more than five qualify - kept exactly as the product
//! behaves today.
//!
//! Each item carries denormalized case context so downstream consumers
//! (draft builders, the advisor payload) need no further joins.

use medrez_model::{Case, CaseStatus, ContractType, RiskTier};
use serde::Serialize;

/// Hard cap on the action feed
const ACTION_LIMIT: usize = 5;

/// Case age beyond which an executed contract warrants a notice
const STALE_CASE_DAYS: u32 = 365;

/// Operational priority of a recommended action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    High,
    Medium,
    Low,
}

/// One recommended next-best action with its case context
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub case_id: String,
    pub patient_alias: String,
    pub action: String,
    pub priority: ActionPriority,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub law_firm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attorney_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_risk: Option<RiskTier>,
    pub status: CaseStatus,
    pub injury_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_bucket_days: Option<u32>,
    pub lien_amount: f64,
    pub billed_amount: f64,
    pub risk_tier: RiskTier,
    pub predicted_recovery_percent: f64,
    pub predicted_time_to_settlement_days: f64,
}

/// Denormalize the shared case context into an item
fn item(case: &Case, action: &str, priority: ActionPriority, reason: String) -> ActionItem {
    ActionItem {
        case_id: case.id.clone(),
        patient_alias: case.patient_alias.clone(),
        action: action.to_string(),
        priority,
        reason,
        law_firm: case.law_firm().map(str::to_string),
        attorney_name: case.attorney_name().map(str::to_string),
        contract_type: case.contract_type(),
        recovery_risk: case.recovery_risk(),
        status: case.status,
        injury_type: case.injury_type.clone(),
        age_bucket_days: case.age_bucket_days(),
        lien_amount: case.lien_amount,
        billed_amount: case.billed_amount,
        risk_tier: case.risk_tier,
        predicted_recovery_percent: case.predicted_recovery_percent,
        predicted_time_to_settlement_days: case.predicted_time_to_settlement_days,
    }
}

/// Propose up to five next-best actions over the portfolio
#[must_use]
pub fn generate_actions(cases: &[Case]) -> Vec<ActionItem> {
    let mut actions: Vec<ActionItem> = Vec::new();

    for case in cases {
        if actions.len() >= ACTION_LIMIT {
            break;
        }

        // Rule 1: stale case on an executed MedPayRez contract.
        if case.age_bucket_days().unwrap_or(0) > STALE_CASE_DAYS
            && case.contract_type() == Some(ContractType::MedPayRez)
        {
            let reason = format!(
                "Case age {}d - documented fee assignment notice recommended.",
                case.age_bucket_days().unwrap_or(0)
            );
            actions.push(item(case, "Generate attorney notice", ActionPriority::High, reason));
            continue;
        }

        // Rule 2: settled with an outstanding lien.
        if case.status == CaseStatus::Settled && case.lien_amount > 0.0 {
            let reason = format!(
                "Case settled but ${} outstanding. Send demand to {}.",
                format_amount(case.lien_amount),
                case.law_firm().unwrap_or("attorney")
            );
            actions.push(item(
                case,
                "Send payment demand packet",
                ActionPriority::High,
                reason,
            ));
            continue;
        }

        // Rule 3: acknowledgment explicitly pending. `None` means the flag
        // is not tracked for this case and never fires.
        if case.attorney_acknowledged() == Some(false) {
            let reason = format!(
                "{} has not acknowledged the documented fee assignment.",
                case.law_firm().unwrap_or("Attorney")
            );
            actions.push(item(
                case,
                "Request attorney acknowledgment",
                ActionPriority::Medium,
                reason,
            ));
            continue;
        }

        // Rule 4: no contract on file and not yet paid.
        if case.contract_type() == Some(ContractType::NoContract) && case.status != CaseStatus::Paid
        {
            let reason = "No contract on file - recovery risk is elevated. Operational \
                          guidance: execute fee agreement."
                .to_string();
            actions.push(item(
                case,
                "Upgrade to MedPayRez contract",
                ActionPriority::Medium,
                reason,
            ));
            continue;
        }

        // Rule 5: high recovery risk on an open case.
        if case.recovery_risk() == Some(RiskTier::High)
            && matches!(case.status, CaseStatus::Open | CaseStatus::Active)
        {
            let reason = format!(
                "Recovery risk is High. Proactive follow-up with {} recommended.",
                case.law_firm().unwrap_or("attorney")
            );
            actions.push(item(
                case,
                "Schedule follow-up with attorney",
                ActionPriority::Low,
                reason,
            ));
        }
    }

    actions
}

/// Dollar amount with thousands separators, cents dropped
fn format_amount(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medrez_model::PiExtension;
    use medrez_test_utils::{case, medpayrez_extension};

    fn stale_medpayrez_case(id: &str) -> medrez_model::Case {
        let mut ext = medpayrez_extension();
        ext.age_bucket_days = Some(400);
        case(id).with_extension(ext)
    }

    #[test]
    fn first_match_wins_per_case() {
        // Matches rule 1 (stale MedPayRez) and rule 3 (acknowledgment
        // pending); only rule 1's action may be emitted.
        let mut ext = medpayrez_extension();
        ext.age_bucket_days = Some(400);
        ext.attorney_acknowledged = Some(false);
        let c = case("case_both").with_extension(ext);

        let actions = generate_actions(std::slice::from_ref(&c));
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action, "Generate attorney notice");
        assert_eq!(actions[0].priority, ActionPriority::High);
    }

    #[test]
    fn untracked_acknowledgment_never_fires() {
        let mut ext = medpayrez_extension();
        ext.attorney_acknowledged = None;
        let untracked = case("case_untracked").with_extension(ext);

        let mut ext = medpayrez_extension();
        ext.attorney_acknowledged = Some(false);
        let pending = case("case_pending").with_extension(ext);

        let actions = generate_actions(&[untracked, pending]);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].case_id, "case_pending");
        assert_eq!(actions[0].action, "Request attorney acknowledgment");
    }

    #[test]
    fn loop_short_circuits_at_five() {
        // Seven qualifying cases; only the first five in collection order
        // are represented.
        let cases: Vec<_> = (0..7).map(|i| stale_medpayrez_case(&format!("case_{i}"))).collect();

        let actions = generate_actions(&cases);
        assert_eq!(actions.len(), 5);
        let ids: Vec<&str> = actions.iter().map(|a| a.case_id.as_str()).collect();
        assert_eq!(ids, ["case_0", "case_1", "case_2", "case_3", "case_4"]);
    }

    #[test]
    fn settled_with_outstanding_lien_demands_payment() {
        let mut c = case("case_settled").with_extension(medpayrez_extension());
        c.status = CaseStatus::Settled;
        c.lien_amount = 15_000.0;

        let actions = generate_actions(std::slice::from_ref(&c));
        assert_eq!(actions[0].action, "Send payment demand packet");
        assert!(actions[0].reason.contains("$15,000"));
        assert!(actions[0].reason.contains("Smith & Reyes Injury Law"));
    }

    #[test]
    fn no_contract_rule_skips_paid_cases() {
        let ext = PiExtension {
            contract_type: Some(ContractType::NoContract),
            ..PiExtension::default()
        };
        let mut paid = case("case_paid").with_extension(ext.clone());
        paid.status = CaseStatus::Paid;
        let open = case("case_open").with_extension(ext);

        let actions = generate_actions(&[paid, open]);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].case_id, "case_open");
        assert_eq!(actions[0].action, "Upgrade to MedPayRez contract");
        assert_eq!(actions[0].priority, ActionPriority::Medium);
    }

    #[test]
    fn high_recovery_risk_schedules_follow_up_on_open_cases_only() {
        let ext = PiExtension {
            recovery_risk: Some(RiskTier::High),
            ..PiExtension::default()
        };
        let open = case("case_open").with_extension(ext.clone());
        let mut settled = case("case_settled_risky").with_extension(ext);
        settled.status = CaseStatus::Settled;
        settled.lien_amount = 0.0; // rule 2 must not fire either

        let actions = generate_actions(&[settled, open]);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].case_id, "case_open");
        assert_eq!(actions[0].action, "Schedule follow-up with attorney");
        assert_eq!(actions[0].priority, ActionPriority::Low);
    }

    #[test]
    fn legacy_case_without_extension_produces_nothing() {
        let actions = generate_actions(&[case("case_legacy")]);
        assert!(actions.is_empty());
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ActionPriority::High).unwrap(),
            "\"high\""
        );
    }
}
