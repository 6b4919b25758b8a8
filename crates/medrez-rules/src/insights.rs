//! Rule-based insight engine
//!
//! Four independent, non-exclusive rules over one case. Evaluation order
//! equals return order; a case can trigger all four at once. The function
//! is total: any case yields a (possibly empty) list, never an error.

use medrez_model::{Case, CaseStatus, RiskTier};
use serde::Serialize;

/// Predicted recovery below this is considered low
const LOW_RECOVERY_PERCENT: f64 = 50.0;

/// Settlement horizon that marks a long-tail case
const LONG_TAIL_DAYS: f64 = 240.0;

/// Baseline shortfall (percentage points) worth flagging
const BASELINE_GAP_POINTS: f64 = 15.0;

/// Advisory category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsightKind {
    Risk,
    Opportunity,
    Alert,
}

/// One qualitative advisory about a case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
}

/// Evaluate the advisory rules against a single case
#[must_use]
pub fn generate_rule_based_insights(case: &Case) -> Vec<Insight> {
    let mut insights = Vec::new();

    // Rule 1: high risk with low predicted recovery.
    if case.risk_tier == RiskTier::High && case.predicted_recovery_percent < LOW_RECOVERY_PERCENT {
        insights.push(Insight {
            kind: InsightKind::Risk,
            message: "High variance risk detected. Predicted recovery is significantly below \
                      baseline. Consider earlier outreach."
                .to_string(),
        });
    }

    // Rule 2: long-tail settlement horizon.
    if case.predicted_time_to_settlement_days > LONG_TAIL_DAYS {
        insights.push(Insight {
            kind: InsightKind::Alert,
            message: "Long-tail case projected (>240 days). Monitor documentation and attorney \
                      responsiveness closely."
                .to_string(),
        });
    }

    // Rule 3: negotiation in progress.
    if case.status == CaseStatus::Negotiation {
        insights.push(Insight {
            kind: InsightKind::Opportunity,
            message: "Case in negotiation. Focus on lien validation and negotiate reductions \
                      only if strict requirements are met."
                .to_string(),
        });
    }

    // Rule 4: tracking below the injury-type cohort baseline.
    let gap = case.predicted_recovery_baseline_percent - case.predicted_recovery_percent;
    if gap > BASELINE_GAP_POINTS {
        insights.push(Insight {
            kind: InsightKind::Risk,
            message: format!(
                "Performance Gap: Case is tracking {}% below baseline for this injury type.",
                format_points(gap)
            ),
        });
    }

    insights
}

/// Render a percentage-point gap without a trailing `.0` on whole numbers
fn format_points(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
