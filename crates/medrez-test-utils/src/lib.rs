//! Testing utilities for the MedRez workspace
//!
//! Shared fixtures and builders. The base case fixture is deliberately
//! "healthy": it fires no insight rule and no action rule, so tests adjust
//! only the fields they exercise.

#![allow(missing_docs)]

use chrono::{DateTime, Utc};
use medrez_model::{
    AppData, Attorney, Case, CaseEvent, CaseStatus, CaseVolumeTier, ContractStatus, ContractType,
    PiExtension, Provider, RiskTier, WorkflowEventType,
};

pub fn provider(id: &str, name: &str) -> Provider {
    Provider {
        id: id.to_string(),
        name: name.to_string(),
        specialty: "Orthopedics".to_string(),
        practice_name: format!("{name} Clinic"),
        state: "TX".to_string(),
    }
}

pub fn attorney(id: &str, firm_name: &str) -> Attorney {
    Attorney {
        id: id.to_string(),
        firm_name: firm_name.to_string(),
        attorney_name: "J. Reyes".to_string(),
        case_volume_tier: CaseVolumeTier::Medium,
    }
}

/// Healthy base case: no insight rule and no action rule fires
pub fn case(id: &str) -> Case {
    Case {
        id: id.to_string(),
        patient_alias: format!("Patient {id}"),
        age_bucket: "30-40".to_string(),
        injury_type: "Whiplash".to_string(),
        state: "TX".to_string(),
        provider_id: "prov_001".to_string(),
        attorney_id: "att_001".to_string(),
        lien_amount: 8_200.0,
        billed_amount: 12_400.0,
        predicted_recovery_percent: 80.0,
        predicted_recovery_baseline_percent: 82.0,
        predicted_time_to_settlement_days: 100.0,
        status: CaseStatus::Open,
        risk_tier: RiskTier::Low,
        intake_date: "2025-01-15".parse().unwrap(),
        last_updated_date: "2025-03-02".parse().unwrap(),
        extension: None,
    }
}

/// Fully populated PI extension on an executed MedPayRez contract
pub fn medpayrez_extension() -> PiExtension {
    PiExtension {
        contract_type: Some(ContractType::MedPayRez),
        contract_status: Some(ContractStatus::Executed),
        law_firm: Some("Smith & Reyes Injury Law".to_string()),
        attorney_name: Some("J. Reyes".to_string()),
        attorney_acknowledged: Some(true),
        recovery_risk: Some(RiskTier::Low),
        age_bucket_days: Some(120),
    }
}

pub fn event(case_id: &str, timestamp: &str, event_type: WorkflowEventType) -> CaseEvent {
    CaseEvent {
        case_id: case_id.to_string(),
        timestamp: timestamp.parse::<DateTime<Utc>>().unwrap(),
        event_type,
        description: format!("{event_type:?} recorded"),
    }
}

/// Small representative seed dataset
pub fn seed_data() -> AppData {
    let mut negotiation = case("case_002");
    negotiation.status = CaseStatus::Negotiation;
    negotiation.predicted_recovery_percent = 48.0;
    negotiation.predicted_recovery_baseline_percent = 60.0;
    negotiation.risk_tier = RiskTier::High;

    let mut settled = case("case_003").with_extension(medpayrez_extension());
    settled.status = CaseStatus::Settled;
    settled.lien_amount = 15_000.0;

    let mut paid = case("case_004");
    paid.status = CaseStatus::Paid;
    paid.lien_amount = 5_000.0;

    AppData {
        providers: vec![
            provider("prov_001", "Dr. Amara Okafor"),
            provider("prov_002", "Dr. Lee Nakamura"),
        ],
        attorneys: vec![
            attorney("att_001", "Smith & Reyes Injury Law"),
            attorney("att_002", "Hamlin & McGill Injury"),
        ],
        cases: vec![case("case_001"), negotiation, settled, paid],
        events: vec![
            event(
                "case_001",
                "2025-01-15T09:00:00Z",
                WorkflowEventType::IntakeCompleted,
            ),
            event(
                "case_001",
                "2025-01-15T09:05:00Z",
                WorkflowEventType::ContractSigned,
            ),
            event(
                "case_002",
                "2025-02-01T14:30:00Z",
                WorkflowEventType::RecordsRequested,
            ),
            event(
                "case_003",
                "2025-02-20T11:00:00Z",
                WorkflowEventType::SettlementReached,
            ),
            event(
                "case_004",
                "2025-03-01T16:45:00Z",
                WorkflowEventType::PaymentReceived,
            ),
        ],
    }
}
