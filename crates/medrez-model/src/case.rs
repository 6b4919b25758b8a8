//! Case entity and its status / risk / contract vocabularies
//!
//! A `Case` is the central entity of the portfolio: one patient's lien
//! recovery matter tracked from intake to payment. Legacy cases carry only
//! the base fields; contract-backed PI cases additionally carry a
//! [`PiExtension`] record. The extension is flattened on the wire so both
//! shapes parse from the same seed schema, and `Case` accessors expose the
//! extension fields as `Option`s so callers handle both shapes uniformly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workflow status of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    Open,
    Negotiation,
    Settled,
    Paid,
    Active,
}

impl CaseStatus {
    /// Statuses counted as "active" for portfolio KPIs
    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Open | Self::Negotiation | Self::Active)
    }
}

/// Qualitative collection-risk classification
///
/// Used both for the intake risk tier and the (possibly divergent)
/// recovery-risk field on the PI extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Legal instrument governing fee recovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    /// Enforceable MedPayRez fee recovery agreement
    MedPayRez,
    /// Legacy letter of protection
    #[serde(rename = "Legacy LOP")]
    LegacyLop,
    /// No instrument on file
    #[serde(rename = "No Contract")]
    NoContract,
}

/// Execution state of the governing contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    Executed,
    #[serde(rename = "Pending Signature")]
    PendingSignature,
    None,
}

/// PI contract extension record
///
/// Default-absent on legacy cases. `attorney_acknowledged` distinguishes
/// "not tracked" (`None`) from "explicitly pending" (`Some(false)`); only
/// the latter triggers the acknowledgment-request action rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiExtension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_status: Option<ContractStatus>,
    /// Denormalized display copy of the firm name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub law_firm: Option<String>,
    /// Denormalized display copy of the attorney name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attorney_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attorney_acknowledged: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_risk: Option<RiskTier>,
    /// Numeric case age in days (distinct from the coarse `age_bucket` string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_bucket_days: Option<u32>,
}

impl PiExtension {
    /// True when no extension field is populated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A single medical-lien recovery matter
///
/// `provider_id` and `attorney_id` must reference existing entities at
/// creation time; a dangling reference afterwards degrades to a `None`
/// lookup, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CaseWire")]
pub struct Case {
    /// Unique case id (caller-supplied, not re-validated by the store)
    pub id: String,
    /// De-identified patient alias
    pub patient_alias: String,
    /// Coarse age bucket, e.g. "30-40"
    pub age_bucket: String,
    /// Injury type cohort
    pub injury_type: String,
    /// US state code
    pub state: String,
    /// Treating provider (by id)
    pub provider_id: String,
    /// Attorney of record (by id)
    pub attorney_id: String,
    /// Amount owed to the provider
    pub lien_amount: f64,
    /// Gross charge
    pub billed_amount: f64,
    /// Predicted recovery, conventionally in [0, 100]
    pub predicted_recovery_percent: f64,
    /// Cohort baseline recovery for the same injury type
    pub predicted_recovery_baseline_percent: f64,
    /// Predicted days until settlement
    pub predicted_time_to_settlement_days: f64,
    pub status: CaseStatus,
    pub risk_tier: RiskTier,
    /// ISO intake date
    pub intake_date: NaiveDate,
    /// ISO date of last update
    pub last_updated_date: NaiveDate,
    /// Optional PI contract extension, flattened on the wire
    ///
    /// `None` contributes no keys when serialized, so legacy cases keep
    /// their legacy wire shape.
    #[serde(flatten)]
    pub extension: Option<PiExtension>,
}

/// Wire shape for `Case`
///
/// A flattened `Option` would deserialize to `Some(empty)` whenever the
/// extension keys are absent; deserializing through this struct keeps
/// "legacy case" canonical as `extension: None`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaseWire {
    id: String,
    patient_alias: String,
    age_bucket: String,
    injury_type: String,
    state: String,
    provider_id: String,
    attorney_id: String,
    lien_amount: f64,
    billed_amount: f64,
    predicted_recovery_percent: f64,
    predicted_recovery_baseline_percent: f64,
    predicted_time_to_settlement_days: f64,
    status: CaseStatus,
    risk_tier: RiskTier,
    intake_date: NaiveDate,
    last_updated_date: NaiveDate,
    #[serde(flatten)]
    extension: PiExtension,
}

impl From<CaseWire> for Case {
    fn from(wire: CaseWire) -> Self {
        Self {
            id: wire.id,
            patient_alias: wire.patient_alias,
            age_bucket: wire.age_bucket,
            injury_type: wire.injury_type,
            state: wire.state,
            provider_id: wire.provider_id,
            attorney_id: wire.attorney_id,
            lien_amount: wire.lien_amount,
            billed_amount: wire.billed_amount,
            predicted_recovery_percent: wire.predicted_recovery_percent,
            predicted_recovery_baseline_percent: wire.predicted_recovery_baseline_percent,
            predicted_time_to_settlement_days: wire.predicted_time_to_settlement_days,
            status: wire.status,
            risk_tier: wire.risk_tier,
            intake_date: wire.intake_date,
            last_updated_date: wire.last_updated_date,
            extension: if wire.extension.is_empty() {
                None
            } else {
                Some(wire.extension)
            },
        }
    }
}

impl Case {
    /// Attach a PI extension
    #[must_use]
    pub fn with_extension(mut self, extension: PiExtension) -> Self {
        self.extension = Some(extension);
        self
    }

    #[inline]
    #[must_use]
    pub fn contract_type(&self) -> Option<ContractType> {
        self.extension.as_ref().and_then(|e| e.contract_type)
    }

    #[inline]
    #[must_use]
    pub fn contract_status(&self) -> Option<ContractStatus> {
        self.extension.as_ref().and_then(|e| e.contract_status)
    }

    #[inline]
    #[must_use]
    pub fn law_firm(&self) -> Option<&str> {
        self.extension.as_ref().and_then(|e| e.law_firm.as_deref())
    }

    #[inline]
    #[must_use]
    pub fn attorney_name(&self) -> Option<&str> {
        self.extension
            .as_ref()
            .and_then(|e| e.attorney_name.as_deref())
    }

    /// `Some(false)` means explicitly pending; `None` means not tracked
    #[inline]
    #[must_use]
    pub fn attorney_acknowledged(&self) -> Option<bool> {
        self.extension.as_ref().and_then(|e| e.attorney_acknowledged)
    }

    #[inline]
    #[must_use]
    pub fn recovery_risk(&self) -> Option<RiskTier> {
        self.extension.as_ref().and_then(|e| e.recovery_risk)
    }

    #[inline]
    #[must_use]
    pub fn age_bucket_days(&self) -> Option<u32> {
        self.extension.as_ref().and_then(|e| e.age_bucket_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ContractType::MedPayRez).unwrap(),
            "\"MedPayRez\""
        );
        assert_eq!(
            serde_json::to_string(&ContractType::LegacyLop).unwrap(),
            "\"Legacy LOP\""
        );
        assert_eq!(
            serde_json::to_string(&ContractType::NoContract).unwrap(),
            "\"No Contract\""
        );
    }

    #[test]
    fn legacy_case_parses_without_extension_fields() {
        let json = r#"{
            "id": "case_001",
            "patientAlias": "Patient A",
            "ageBucket": "30-40",
            "injuryType": "Whiplash",
            "state": "TX",
            "providerId": "prov_001",
            "attorneyId": "att_001",
            "lienAmount": 8200.0,
            "billedAmount": 12400.0,
            "predictedRecoveryPercent": 62.0,
            "predictedRecoveryBaselinePercent": 65.0,
            "predictedTimeToSettlementDays": 180.0,
            "status": "Open",
            "riskTier": "Low",
            "intakeDate": "2025-01-15",
            "lastUpdatedDate": "2025-03-02"
        }"#;
        let case: Case = serde_json::from_str(json).unwrap();
        assert_eq!(case.status, CaseStatus::Open);
        assert!(case.extension.is_none());
        assert_eq!(case.contract_type(), None);
        assert_eq!(case.attorney_acknowledged(), None);

        // Legacy shape survives a serialize/deserialize cycle unchanged.
        let reserialized = serde_json::to_string(&case).unwrap();
        let reparsed: Case = serde_json::from_str(&reserialized).unwrap();
        assert_eq!(reparsed, case);
    }

    #[test]
    fn extended_case_round_trips_extension_fields() {
        let json = r#"{
            "id": "case_002",
            "patientAlias": "Patient B",
            "ageBucket": "40-50",
            "injuryType": "Back Injury",
            "state": "CA",
            "providerId": "prov_001",
            "attorneyId": "att_002",
            "lienAmount": 15000.0,
            "billedAmount": 22000.0,
            "predictedRecoveryPercent": 48.0,
            "predictedRecoveryBaselinePercent": 60.0,
            "predictedTimeToSettlementDays": 320.0,
            "status": "Negotiation",
            "riskTier": "High",
            "intakeDate": "2024-06-01",
            "lastUpdatedDate": "2025-02-10",
            "contractType": "MedPayRez",
            "contractStatus": "Executed",
            "lawFirm": "Smith & Reyes Injury Law",
            "attorneyName": "J. Reyes",
            "attorneyAcknowledged": false,
            "recoveryRisk": "High",
            "ageBucketDays": 410
        }"#;
        let case: Case = serde_json::from_str(json).unwrap();
        assert_eq!(case.contract_type(), Some(ContractType::MedPayRez));
        assert_eq!(case.attorney_acknowledged(), Some(false));
        assert_eq!(case.age_bucket_days(), Some(410));

        let reserialized = serde_json::to_string(&case).unwrap();
        let reparsed: Case = serde_json::from_str(&reserialized).unwrap();
        assert_eq!(reparsed, case);
    }

    #[test]
    fn active_statuses() {
        assert!(CaseStatus::Open.is_active());
        assert!(CaseStatus::Negotiation.is_active());
        assert!(CaseStatus::Active.is_active());
        assert!(!CaseStatus::Settled.is_active());
        assert!(!CaseStatus::Paid.is_active());
    }
}
