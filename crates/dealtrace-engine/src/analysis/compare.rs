//! Cross-run comparison: radar series and aggregate summaries.
//!
//! Radar points come in two flavors. The normalized variant scales every
//! metric against the best run in the compared set (0..=100, integers), so
//! axes with wildly different units share one chart. The actual-values
//! variant keeps literal numbers for comparison tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dealtrace_types::{RunId, SimulationRun};

use super::{mean, percentage};

/// One radar axis: a metric name plus one numeric field per compared run.
///
/// The run map flattens into the serialized object, reproducing the chart
/// feed shape `{"metric": "Deal Value", "run-1": 100.0, "run-2": 50.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarMetricPoint {
    pub metric: String,
    #[serde(flatten)]
    pub values: BTreeMap<RunId, f64>,
}

impl RadarMetricPoint {
    pub fn value(&self, run: &RunId) -> Option<f64> {
        self.values.get(run).copied()
    }
}

/// Pooled aggregate statistics over a compared run set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    /// Mean deal value over runs that have one.
    pub avg_deal_value: f64,
    /// Mean round count over all runs.
    pub avg_rounds: f64,
    /// Share of achieved dimension results pooled across all runs, 0..=100.
    pub success_share: f64,
}

/// Normalized radar series for a selected run set.
///
/// Fixed axes come first (deal value, round efficiency, achieved-dimension
/// ratio, within-ZOPA ratio), followed by one axis per dimension and product
/// name observed across the set, in first-seen order. Per axis, the best run
/// scores exactly 100 and missing values score 0; a metric nobody scored on
/// is all zeros.
pub fn build_radar_metrics(runs: &[SimulationRun]) -> Vec<RadarMetricPoint> {
    if runs.is_empty() {
        return Vec::new();
    }

    let mut points = Vec::new();
    points.push(normalized_point("Deal Value", runs, |run| run.deal_value));
    // Fewer rounds is better; invert before normalizing so the shortest
    // run takes the 100.
    points.push(normalized_point("Efficiency (Rounds)", runs, |run| {
        (run.total_rounds > 0).then(|| 1.0 / run.total_rounds as f64)
    }));
    points.push(normalized_point("Dimensions Achieved", runs, achieved_ratio));
    points.push(normalized_point("Products in ZOPA", runs, zopa_ratio));

    for name in dimension_names(runs) {
        points.push(normalized_point(&name, runs, |run| {
            dimension_final(run, &name)
        }));
    }
    for name in product_names(runs) {
        points.push(normalized_point(&name, runs, |run| product_price(run, &name)));
    }

    points
}

/// Literal radar series: each run's own values, units preserved.
///
/// Emits a "Deal Value (€)" row, then one row per observed dimension name
/// (final values) and product name (agreed prices). Runs without a value
/// for a row are omitted from that row instead of scoring 0.
pub fn build_actual_values_radar(runs: &[SimulationRun]) -> Vec<RadarMetricPoint> {
    if runs.is_empty() {
        return Vec::new();
    }

    let mut points = Vec::new();
    points.push(literal_point("Deal Value (€)", runs, |run| run.deal_value));

    for name in dimension_names(runs) {
        points.push(literal_point(&name, runs, |run| dimension_final(run, &name)));
    }
    for name in product_names(runs) {
        points.push(literal_point(&name, runs, |run| product_price(run, &name)));
    }

    points
}

/// Pooled averages and success share for a run set.
///
/// Missing deal values drop out of that mean's denominator. The success
/// share pools every dimension result across every run (the same achieved
/// definition as the dimension summarizer, applied to the pooled set).
/// An empty set yields an all-zero summary.
pub fn build_comparison_summary(runs: &[SimulationRun]) -> ComparisonSummary {
    if runs.is_empty() {
        return ComparisonSummary::default();
    }

    let deal_values: Vec<f64> = runs.iter().filter_map(|run| run.deal_value).collect();
    let rounds: Vec<f64> = runs.iter().map(|run| run.total_rounds as f64).collect();

    let mut total_results = 0u64;
    let mut achieved = 0u64;
    for run in runs {
        for result in &run.dimension_results {
            total_results += 1;
            if result.achieved_target == Some(true) {
                achieved += 1;
            }
        }
    }

    ComparisonSummary {
        avg_deal_value: mean(&deal_values),
        avg_rounds: mean(&rounds),
        success_share: percentage(achieved, total_results),
    }
}

fn normalized_point<F>(metric: &str, runs: &[SimulationRun], raw: F) -> RadarMetricPoint
where
    F: Fn(&SimulationRun) -> Option<f64>,
{
    let raws: Vec<Option<f64>> = runs.iter().map(&raw).collect();
    let max = raws
        .iter()
        .flatten()
        .fold(0.0_f64, |acc, v| if *v > acc { *v } else { acc });

    let mut values = BTreeMap::new();
    for (run, raw_value) in runs.iter().zip(&raws) {
        let score = match raw_value {
            Some(v) if max > 0.0 => (v / max * 100.0).round().clamp(0.0, 100.0),
            _ => 0.0,
        };
        values.insert(run.id.clone(), score);
    }

    RadarMetricPoint {
        metric: metric.to_string(),
        values,
    }
}

fn literal_point<F>(metric: &str, runs: &[SimulationRun], raw: F) -> RadarMetricPoint
where
    F: Fn(&SimulationRun) -> Option<f64>,
{
    let mut values = BTreeMap::new();
    for run in runs {
        if let Some(v) = raw(run) {
            values.insert(run.id.clone(), v);
        }
    }
    RadarMetricPoint {
        metric: metric.to_string(),
        values,
    }
}

fn achieved_ratio(run: &SimulationRun) -> Option<f64> {
    if run.dimension_results.is_empty() {
        return None;
    }
    let achieved = run
        .dimension_results
        .iter()
        .filter(|d| d.achieved_target == Some(true))
        .count();
    Some(achieved as f64 / run.dimension_results.len() as f64)
}

fn zopa_ratio(run: &SimulationRun) -> Option<f64> {
    if run.product_results.is_empty() {
        return None;
    }
    let in_zopa = run
        .product_results
        .iter()
        .filter(|p| p.in_zopa == Some(true))
        .count();
    Some(in_zopa as f64 / run.product_results.len() as f64)
}

fn dimension_final(run: &SimulationRun, name: &str) -> Option<f64> {
    run.dimension_results
        .iter()
        .find(|d| d.name == name)
        .and_then(|d| d.final_value)
}

fn product_price(run: &SimulationRun, name: &str) -> Option<f64> {
    run.product_results
        .iter()
        .find(|p| p.name == name)
        .and_then(|p| p.agreed_price)
}

fn dimension_names(runs: &[SimulationRun]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for run in runs {
        for result in &run.dimension_results {
            if !names.iter().any(|n| n == &result.name) {
                names.push(result.name.clone());
            }
        }
    }
    names
}

fn product_names(runs: &[SimulationRun]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for run in runs {
        for result in &run.product_results {
            if !names.iter().any(|n| n == &result.name) {
                names.push(result.name.clone());
            }
        }
    }
    names
}
