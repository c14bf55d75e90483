//! Performance summaries grouped by strategy configuration.
//!
//! Runs are bucketed by the name of their influencing technique, negotiation
//! tactic, or counterpart personality. Runs without the grouping reference
//! are skipped entirely; they belong to no bucket, not to a synthetic
//! "none" bucket.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use dealtrace_types::{RunStatus, SimulationRun, StrategyRef};

use super::{mean, percentage, round1};

/// Aggregate performance of one technique, tactic, or personality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySummary {
    pub name: String,
    pub runs: u64,
    pub completed: u64,
    /// completed / runs, as a percentage with one decimal.
    pub completion_rate: f64,
    /// Mean deal value over runs in the bucket that have one; 0 when none do.
    pub avg_deal_value: f64,
    /// Mean outcome success weight (0..=1) over all runs in the bucket.
    pub avg_success_score: f64,
    /// Mean influencing-effectiveness score (1..=10), when evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_influencing_score: Option<f64>,
    /// Mean tactic-effectiveness score (1..=10), when evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_tactic_score: Option<f64>,
}

/// Summaries grouped by influencing technique.
pub fn summarize_techniques(runs: &[SimulationRun]) -> Vec<StrategySummary> {
    summarize_by(runs, |run| run.technique.as_ref())
}

/// Summaries grouped by negotiation tactic.
pub fn summarize_tactics(runs: &[SimulationRun]) -> Vec<StrategySummary> {
    summarize_by(runs, |run| run.tactic.as_ref())
}

/// Summaries grouped by counterpart personality.
pub fn summarize_personalities(runs: &[SimulationRun]) -> Vec<StrategySummary> {
    summarize_by(runs, |run| run.personality.as_ref())
}

#[derive(Default)]
struct StrategyAcc {
    runs: u64,
    completed: u64,
    deal_values: Vec<f64>,
    success_scores: Vec<f64>,
    influencing_scores: Vec<f64>,
    tactic_scores: Vec<f64>,
}

fn summarize_by<F>(runs: &[SimulationRun], reference: F) -> Vec<StrategySummary>
where
    F: Fn(&SimulationRun) -> Option<&StrategyRef>,
{
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, StrategyAcc> = HashMap::new();

    for run in runs {
        let Some(strategy) = reference(run) else {
            continue;
        };
        if !groups.contains_key(&strategy.name) {
            order.push(strategy.name.clone());
        }
        let acc = groups.entry(strategy.name.clone()).or_default();
        acc.runs += 1;
        if run.status == RunStatus::Completed {
            acc.completed += 1;
        }
        if let Some(value) = run.deal_value {
            acc.deal_values.push(value);
        }
        acc.success_scores.push(run.success_score());
        if let Some(evaluation) = &run.evaluation {
            if let Some(score) = evaluation.influencing_score {
                acc.influencing_scores.push(score);
            }
            if let Some(score) = evaluation.tactic_score {
                acc.tactic_scores.push(score);
            }
        }
    }

    order
        .into_iter()
        .map(|name| {
            let acc = &groups[&name];
            StrategySummary {
                runs: acc.runs,
                completed: acc.completed,
                completion_rate: percentage(acc.completed, acc.runs),
                avg_deal_value: mean(&acc.deal_values),
                avg_success_score: mean(&acc.success_scores),
                avg_influencing_score: optional_mean(&acc.influencing_scores),
                avg_tactic_score: optional_mean(&acc.tactic_scores),
                name,
            }
        })
        .collect()
}

fn optional_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(round1(mean(values)))
    }
}
