use serde::{Deserialize, Serialize};

/// Snapshot of evaluation coverage across completed runs.
///
/// Returned by the evaluation service on every poll. Only the latest
/// snapshot matters; the coordinator never aggregates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationStatus {
    /// Completed runs in scope for evaluation.
    pub total: u64,
    /// Runs that already have an AI-generated evaluation.
    pub evaluated: u64,
    /// Runs still waiting for one.
    pub needing_evaluation: u64,
    /// Share of evaluated runs, 0.0..=100.0.
    pub evaluation_rate: f64,
}

impl EvaluationStatus {
    /// Build a snapshot from the two counters everything else derives from.
    pub fn new(total: u64, evaluated: u64) -> Self {
        let evaluated = evaluated.min(total);
        let evaluation_rate = if total == 0 {
            0.0
        } else {
            evaluated as f64 / total as f64 * 100.0
        };
        Self {
            total,
            evaluated,
            needing_evaluation: total - evaluated,
            evaluation_rate,
        }
    }

    /// True when nothing is left to backfill.
    pub fn is_complete(&self) -> bool {
        self.needing_evaluation == 0
    }
}
