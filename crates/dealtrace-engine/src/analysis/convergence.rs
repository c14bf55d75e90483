//! Offer convergence detection.
//!
//! Compares adjacent offers in a run's conversation log to judge whether the
//! parties are closing the gap. Used to explain run length: a run that hit
//! the round limit while converging reads very differently from one that
//! stalled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dealtrace_types::{MetricValue, SimulationRun};

/// Relative movement below which a dimension counts as converging.
pub const CONVERGENCE_THRESHOLD: f64 = 0.1;
/// Share of comparable dimensions that must converge for the pair to count.
pub const MIN_CONVERGENCE_RATIO: f64 = 0.5;

/// Convergence over a whole conversation log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvergenceAssessment {
    /// Adjacent offer pairs that shared at least one numeric dimension.
    pub compared_pairs: u64,
    /// Pairs that met the convergence criterion.
    pub converging_pairs: u64,
    /// Whether the final pair was converging.
    pub closing_gap: bool,
}

/// Whether the current offer moved close to the previous one.
///
/// A dimension is comparable when both offers carry a numeric value for it.
/// It converges when the move stays below [`CONVERGENCE_THRESHOLD`] of the
/// previous value; the pair converges when at least
/// [`MIN_CONVERGENCE_RATIO`] of comparable dimensions do. No comparable
/// dimensions means no convergence.
pub fn offers_converging(
    current: &BTreeMap<String, MetricValue>,
    previous: &BTreeMap<String, MetricValue>,
) -> bool {
    if current.is_empty() || previous.is_empty() {
        return false;
    }

    let mut comparable = 0u32;
    let mut converging = 0u32;

    for (dimension, current_value) in current {
        let Some(previous_value) = previous.get(dimension) else {
            continue;
        };
        let (Some(current_num), Some(previous_num)) =
            (current_value.as_number(), previous_value.as_number())
        else {
            continue;
        };

        comparable += 1;
        if (current_num - previous_num).abs() < (previous_num * CONVERGENCE_THRESHOLD).abs() {
            converging += 1;
        }
    }

    if comparable == 0 {
        return false;
    }
    f64::from(converging) / f64::from(comparable) >= MIN_CONVERGENCE_RATIO
}

/// Assess convergence across all adjacent offer pairs of a run.
pub fn run_convergence(run: &SimulationRun) -> ConvergenceAssessment {
    let offers: Vec<&BTreeMap<String, MetricValue>> = run
        .conversation
        .iter()
        .filter_map(|turn| turn.offer.as_ref().map(|offer| &offer.values))
        .collect();

    let mut assessment = ConvergenceAssessment::default();
    for pair in offers.windows(2) {
        assessment.compared_pairs += 1;
        let converging = offers_converging(pair[1], pair[0]);
        if converging {
            assessment.converging_pairs += 1;
        }
        assessment.closing_gap = converging;
    }
    assessment
}
