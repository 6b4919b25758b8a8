//! Portfolio-level KPI aggregation
//!
//! Folds over the full case collection. Means use a guarded denominator so
//! an empty portfolio yields 0 instead of NaN.

use medrez_model::{AppData, CaseStatus};
use serde::Serialize;

/// Headline portfolio figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioKpis {
    /// Sum of lien amounts over cases not yet paid
    pub total_outstanding: f64,
    /// Count of cases in Open, Negotiation, or Active
    pub active_cases: usize,
    /// Mean predicted recovery percent
    pub avg_recovery: f64,
    /// Mean predicted time to settlement in days
    pub avg_time: f64,
}

/// Per-provider recovery performance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecovery {
    pub provider_id: String,
    pub provider_name: String,
    pub case_count: usize,
    pub avg_recovery: f64,
    pub avg_baseline: f64,
}

/// Compute the headline KPIs at call time
#[must_use]
pub fn portfolio_kpis(data: &AppData) -> PortfolioKpis {
    let total_outstanding = data
        .cases
        .iter()
        .filter(|c| c.status != CaseStatus::Paid)
        .map(|c| c.lien_amount)
        .sum();

    let active_cases = data.cases.iter().filter(|c| c.status.is_active()).count();

    // Guarded denominator: an empty portfolio divides by 1 and yields 0.
    let denominator = data.cases.len().max(1) as f64;
    let avg_recovery = data
        .cases
        .iter()
        .map(|c| c.predicted_recovery_percent)
        .sum::<f64>()
        / denominator;
    let avg_time = data
        .cases
        .iter()
        .map(|c| c.predicted_time_to_settlement_days)
        .sum::<f64>()
        / denominator;

    PortfolioKpis {
        total_outstanding,
        active_cases,
        avg_recovery,
        avg_time,
    }
}

/// Mean predicted recovery and baseline per provider
#[must_use]
pub fn recovery_by_provider(data: &AppData) -> Vec<ProviderRecovery> {
    data.providers
        .iter()
        .map(|p| {
            let cases: Vec<_> = data
                .cases
                .iter()
                .filter(|c| c.provider_id == p.id)
                .collect();
            let denominator = cases.len().max(1) as f64;
            ProviderRecovery {
                provider_id: p.id.clone(),
                provider_name: p.name.clone(),
                case_count: cases.len(),
                avg_recovery: cases
                    .iter()
                    .map(|c| c.predicted_recovery_percent)
                    .sum::<f64>()
                    / denominator,
                avg_baseline: cases
                    .iter()
                    .map(|c| c.predicted_recovery_baseline_percent)
                    .sum::<f64>()
                    / denominator,
            }
        })
        .collect()
}

/// Case counts per status, in order of first appearance
#[must_use]
pub fn status_distribution(data: &AppData) -> Vec<(CaseStatus, usize)> {
    let mut distribution: Vec<(CaseStatus, usize)> = Vec::new();
    for case in &data.cases {
        match distribution.iter_mut().find(|(s, _)| *s == case.status) {
            Some((_, count)) => *count += 1,
            None => distribution.push((case.status, 1)),
        }
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use medrez_test_utils::{case, seed_data};

    #[test]
    fn empty_portfolio_yields_zeros_not_nan() {
        let kpis = portfolio_kpis(&AppData::default());
        assert_eq!(kpis.total_outstanding, 0.0);
        assert_eq!(kpis.active_cases, 0);
        assert_eq!(kpis.avg_recovery, 0.0);
        assert_eq!(kpis.avg_time, 0.0);
    }

    #[test]
    fn paid_cases_are_excluded_from_outstanding() {
        let data = seed_data();
        let kpis = portfolio_kpis(&data);

        let expected: f64 = data
            .cases
            .iter()
            .filter(|c| c.status != CaseStatus::Paid)
            .map(|c| c.lien_amount)
            .sum();
        assert_eq!(kpis.total_outstanding, expected);
        // case_001 Open, case_002 Negotiation; Settled and Paid excluded.
        assert_eq!(kpis.active_cases, 2);
    }

    #[test]
    fn averages_cover_the_whole_portfolio() {
        let data = seed_data();
        let kpis = portfolio_kpis(&data);
        let n = data.cases.len() as f64;

        let recovery: f64 = data
            .cases
            .iter()
            .map(|c| c.predicted_recovery_percent)
            .sum::<f64>()
            / n;
        assert!((kpis.avg_recovery - recovery).abs() < f64::EPSILON);
    }

    #[test]
    fn provider_recovery_zero_guards_caseless_providers() {
        let data = seed_data();
        let rows = recovery_by_provider(&data);
        // prov_002 has no cases.
        let empty = rows.iter().find(|r| r.provider_id == "prov_002").unwrap();
        assert_eq!(empty.case_count, 0);
        assert_eq!(empty.avg_recovery, 0.0);
        assert_eq!(empty.avg_baseline, 0.0);
    }

    #[test]
    fn status_distribution_counts_in_first_appearance_order() {
        let mut data = seed_data();
        data.cases.push(case("case_extra")); // second Open case
        let distribution = status_distribution(&data);
        assert_eq!(distribution[0], (CaseStatus::Open, 2));
        assert_eq!(distribution.len(), 4);
    }
}
