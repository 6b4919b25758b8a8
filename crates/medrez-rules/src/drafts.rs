//! Deterministic correspondence drafts
//!
//! Always-available templates the action feed renders when the external
//! drafting service is disabled or unavailable. Also maps a free-text
//! action label to the workflow event type logged to the case timeline.

use crate::actions::ActionItem;
use medrez_model::WorkflowEventType;

/// Correspondence category an action resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    AttorneyNotice,
    DemandPacket,
    FollowUp,
}

/// Map an action label to its correspondence category
#[must_use]
pub fn resolve_action_kind(action: &str) -> ActionKind {
    let action = action.to_lowercase();
    if action.contains("notice") || action.contains("acknowledgment") {
        ActionKind::AttorneyNotice
    } else if action.contains("demand") || action.contains("payment") {
        ActionKind::DemandPacket
    } else {
        ActionKind::FollowUp
    }
}

/// Map an action label to the timeline event type it logs
#[must_use]
pub fn resolve_event_type(action: &str) -> WorkflowEventType {
    let action = action.to_lowercase();
    if action.contains("notice") || action.contains("acknowledgment") {
        WorkflowEventType::NoticeGenerated
    } else if action.contains("demand") || action.contains("payment") {
        WorkflowEventType::DemandSent
    } else if action.contains("follow-up") || action.contains("follow up") || action.contains("schedule") {
        WorkflowEventType::FollowUpScheduled
    } else if action.contains("records") {
        WorkflowEventType::RecordsRequested
    } else if action.contains("invoice") {
        WorkflowEventType::InvoiceIssued
    } else {
        // Safe default
        WorkflowEventType::FollowUpScheduled
    }
}

/// Render the deterministic template for an action
///
/// Never fails; missing firm or attorney names fall back to neutral
/// placeholders.
#[must_use]
pub fn build_deterministic_draft(item: &ActionItem) -> String {
    let firm = item.law_firm.as_deref().unwrap_or("the attorney of record");
    let attorney = item.attorney_name.as_deref().unwrap_or("Counsel");

    match resolve_action_kind(&item.action) {
        ActionKind::AttorneyNotice => format!(
            "RE: Documented Fee Assignment Notice - Case {case_id}\n\n\
             Dear {attorney} / {firm},\n\n\
             This notice confirms that {alias} has executed a MedPayRez fee recovery \
             agreement with the treating provider. Pursuant to that agreement, the provider \
             holds a documented fee assignment against any settlement, judgment, or verdict \
             obtained on behalf of the patient.\n\n\
             Please acknowledge receipt of this notice and confirm the expected timeline for \
             resolution. The patient is not personally billed - recovery is pursued \
             exclusively through contract-backed rights.\n\n\
             Action Required: {action}\n\
             Context: {reason}\n\n\
             Please respond within 10 business days with acknowledgment and next expected \
             milestone.",
            case_id = item.case_id,
            alias = item.patient_alias,
            action = item.action,
            reason = item.reason,
        ),
        ActionKind::DemandPacket => format!(
            "RE: Payment Demand - Case {case_id}\n\n\
             Dear {attorney} / {firm},\n\n\
             Our records indicate that Case {case_id} ({alias}) has reached a settlement \
             stage with an outstanding lien of ${lien:.0}. We are formally requesting \
             disbursement of the documented fee assignment amount from settlement \
             proceeds.\n\n\
             The patient is not personally billed. This demand is made pursuant to the \
             executed fee recovery agreement on file.\n\n\
             Please confirm receipt and advise on the expected disbursement timeline.",
            case_id = item.case_id,
            alias = item.patient_alias,
            lien = item.lien_amount,
        ),
        ActionKind::FollowUp => format!(
            "RE: Status Follow-up - Case {case_id}\n\n\
             Dear {attorney} / {firm},\n\n\
             We are following up on the status of Case {case_id} ({alias}). Our records \
             indicate this case requires attention: {reason}\n\n\
             The patient is not personally billed. We are seeking an operational update on \
             the current status and the next expected milestone.\n\n\
             Please respond within 5 business days.",
            case_id = item.case_id,
            alias = item.patient_alias,
            reason = item.reason,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_actions;
    use medrez_model::CaseStatus;
    use medrez_test_utils::{case, medpayrez_extension};

    #[test]
    fn action_labels_resolve_to_expected_kinds() {
        assert_eq!(
            resolve_action_kind("Generate attorney notice"),
            ActionKind::AttorneyNotice
        );
        assert_eq!(
            resolve_action_kind("Request attorney acknowledgment"),
            ActionKind::AttorneyNotice
        );
        assert_eq!(
            resolve_action_kind("Send payment demand packet"),
            ActionKind::DemandPacket
        );
        assert_eq!(
            resolve_action_kind("Schedule follow-up with attorney"),
            ActionKind::FollowUp
        );
        assert_eq!(
            resolve_action_kind("Upgrade to MedPayRez contract"),
            ActionKind::FollowUp
        );
    }

    #[test]
    fn event_types_match_action_labels() {
        assert_eq!(
            resolve_event_type("Generate attorney notice"),
            WorkflowEventType::NoticeGenerated
        );
        assert_eq!(
            resolve_event_type("Send payment demand packet"),
            WorkflowEventType::DemandSent
        );
        assert_eq!(
            resolve_event_type("Schedule follow-up with attorney"),
            WorkflowEventType::FollowUpScheduled
        );
        assert_eq!(
            resolve_event_type("something unrecognized"),
            WorkflowEventType::FollowUpScheduled
        );
    }

    #[test]
    fn demand_draft_names_the_firm_and_lien() {
        let mut c = case("case_settled").with_extension(medpayrez_extension());
        c.status = CaseStatus::Settled;
        c.lien_amount = 15_000.0;
        let actions = generate_actions(std::slice::from_ref(&c));

        let draft = build_deterministic_draft(&actions[0]);
        assert!(draft.starts_with("RE: Payment Demand - Case case_settled"));
        assert!(draft.contains("Smith & Reyes Injury Law"));
        assert!(draft.contains("$15000"));
    }

    #[test]
    fn drafts_degrade_without_firm_on_file() {
        let mut c = case("case_nofirm");
        c.status = CaseStatus::Settled;
        c.lien_amount = 100.0;
        let actions = generate_actions(std::slice::from_ref(&c));

        let draft = build_deterministic_draft(&actions[0]);
        assert!(draft.contains("the attorney of record"));
        assert!(draft.contains("Counsel"));
    }
}
