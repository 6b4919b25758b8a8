//! `medrez` - operator console over a seed dataset
//!
//! Loads a portfolio through the store and prints KPIs, at-risk cases,
//! recommended actions, recent activity, or per-case advisories.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use medrez_advisor::{fallback_payload, AdvisorClient, AdvisoryPayload, AdvisorySource};
use medrez_analytics::{at_risk_cases, case_by_id, case_events, portfolio_kpis, recent_activity};
use medrez_rules::{build_deterministic_draft, generate_actions, generate_rule_based_insights};
use medrez_store::{DataStore, FileSeedSource, MemorySessionCache};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "medrez", version, about = "MedRez recovery portfolio console")]
struct Cli {
    /// Path to the seed dataset (JSON)
    #[arg(long, default_value = "data/medrez-data.json")]
    seed: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print portfolio KPIs
    Kpis,
    /// Print the worst at-risk cases
    AtRisk,
    /// Print recommended next-best actions
    Actions,
    /// Print recent workflow activity
    Activity,
    /// Print rule-based insights for one case
    Insights {
        /// Case id to inspect
        case_id: String,
    },
    /// Render the correspondence draft for a case's next-best action
    Draft {
        /// Case id to draft for
        case_id: String,
    },
    /// Request an advisory for one case, falling back to the rule engine
    Advise {
        /// Case id to advise on
        case_id: String,
        /// Insight service endpoint; omit to use the deterministic path
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let store = DataStore::new(
        Arc::new(FileSeedSource::new(&cli.seed)),
        Arc::new(MemorySessionCache::new()),
    );
    store.load().await.context("loading seed dataset")?;
    let snapshot = store.snapshot().context("no dataset loaded")?;
    let data = &snapshot.data;

    match cli.command {
        Command::Kpis => {
            let kpis = portfolio_kpis(data);
            println!("Total outstanding   ${:>12.2}", kpis.total_outstanding);
            println!("Active cases        {:>13}", kpis.active_cases);
            println!("Avg recovery        {:>12.1}%", kpis.avg_recovery);
            println!("Avg time to settle  {:>11.0}d", kpis.avg_time);
        }
        Command::AtRisk => {
            for case in at_risk_cases(data) {
                println!(
                    "{:<12} {:>5.1}%  {:<6}  {} / {}",
                    case.id,
                    case.predicted_recovery_percent,
                    format!("{:?}", case.risk_tier),
                    case.injury_type,
                    case.state,
                );
            }
        }
        Command::Actions => {
            for action in generate_actions(&data.cases) {
                println!(
                    "[{:<6}] {:<34} {}  {}",
                    format!("{:?}", action.priority).to_lowercase(),
                    action.action,
                    action.case_id,
                    action.reason,
                );
            }
        }
        Command::Activity => {
            for event in recent_activity(data) {
                println!(
                    "{}  {:<20} {:<12} {}",
                    event.timestamp.format("%Y-%m-%d %H:%M"),
                    format!("{:?}", event.event_type),
                    event.case_id,
                    event.description,
                );
            }
        }
        Command::Insights { case_id } => {
            let Some(case) = case_by_id(data, &case_id) else {
                bail!("unknown case id: {case_id}");
            };
            let insights = generate_rule_based_insights(case);
            if insights.is_empty() {
                println!("No advisories for {case_id}.");
            }
            for insight in insights {
                println!("[{:<11}] {}", format!("{:?}", insight.kind), insight.message);
            }
        }
        Command::Draft { case_id } => {
            let Some(case) = case_by_id(data, &case_id) else {
                bail!("unknown case id: {case_id}");
            };
            let actions = generate_actions(std::slice::from_ref(case));
            let Some(action) = actions.first() else {
                bail!("no recommended action for case {case_id}");
            };
            println!("{}", build_deterministic_draft(action));
        }
        Command::Advise { case_id, endpoint } => {
            let Some(case) = case_by_id(data, &case_id) else {
                bail!("unknown case id: {case_id}");
            };
            let (payload, source) = match endpoint {
                Some(endpoint) => {
                    let client =
                        AdvisorClient::new(endpoint).context("building advisor client")?;
                    let recent = case_events(data, &case_id);
                    let advisory = client.advise_or_fallback(case, &recent).await;
                    (advisory.payload, advisory.source)
                }
                None => (fallback_payload(case), AdvisorySource::RuleEngine),
            };
            print_advisory(&payload, source);
        }
    }

    Ok(())
}

fn print_advisory(payload: &AdvisoryPayload, source: AdvisorySource) {
    let label = match source {
        AdvisorySource::Service => "insight service",
        AdvisorySource::RuleEngine => "rule engine",
    };
    println!("Advisory ({label})");
    println!("Payment delay risk: {:?}", payload.payment_delay_risk);
    println!("Confidence: {:.2}", payload.confidence);
    if !payload.next_best_actions.is_empty() {
        println!("Next best actions:");
        for action in &payload.next_best_actions {
            println!("  - {action}");
        }
    }
    if !payload.documentation_gaps.is_empty() {
        println!("Documentation gaps:");
        for gap in &payload.documentation_gaps {
            println!("  - {gap}");
        }
    }
    if !payload.follow_up_recommendation.trim().is_empty() {
        println!("Follow-up: {}", payload.follow_up_recommendation);
    }
}
