use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{NegotiationId, RunId};
use super::negotiation::{PartyRole, StrategyRef};
use crate::metric::MetricValue;

/// Execution state of a single simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Timeout,
}

impl RunStatus {
    /// Parse an upstream status label (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "running" => Some(Self::Running),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            "timeout" => Some(Self::Timeout),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Timeout => "timeout",
        }
    }
}

/// How a run ended, as recorded by the simulation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    DealAccepted,
    Terminated,
    WalkAway,
    Paused,
    MaxRoundsReached,
    Error,
}

/// Success weight assigned to runs whose outcome was never recorded.
pub const INDETERMINATE_SUCCESS_SCORE: f64 = 0.2;

impl RunOutcome {
    /// Parse an upstream outcome label ("DEAL_ACCEPTED", "walk_away", ...).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "deal_accepted" => Some(Self::DealAccepted),
            "terminated" => Some(Self::Terminated),
            "walk_away" => Some(Self::WalkAway),
            "paused" => Some(Self::Paused),
            "max_rounds_reached" => Some(Self::MaxRoundsReached),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Success weight of this outcome on a 0.0..=1.0 scale.
    ///
    /// An accepted deal is full success; a mutually terminated negotiation
    /// still carries partial value, a walk-away less, an errored run none.
    pub fn success_score(self) -> f64 {
        match self {
            Self::DealAccepted => 1.0,
            Self::Terminated => 0.6,
            Self::Paused => 0.5,
            Self::WalkAway => 0.4,
            Self::MaxRoundsReached => 0.3,
            Self::Error => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DealAccepted => "deal_accepted",
            Self::Terminated => "terminated",
            Self::WalkAway => "walk_away",
            Self::Paused => "paused",
            Self::MaxRoundsReached => "max_rounds_reached",
            Self::Error => "error",
        }
    }
}

/// Final state of one negotiation dimension after a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionResult {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieved_target: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_over_batna: Option<f64>,
}

/// Final state of one product line after a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductResult {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreed_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zopa_utilization: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_zopa: Option<bool>,
}

/// Offer attached to a conversation turn.
///
/// Values keep their raw scalar form: numeric dimensions arrive as numbers
/// or numeric strings, qualitative ones ("Payment terms": "Net 30") as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferSnapshot {
    #[serde(default)]
    pub values: BTreeMap<String, MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// One round update from the conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub round: u32,
    /// Name or role of the speaking agent.
    pub speaker: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<OfferSnapshot>,
}

/// AI-generated post-run evaluation.
///
/// Written back to the run by the evaluation service; a run without one is
/// what the backfill exists to fix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunEvaluation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactical_summary: Option<String>,
    /// Influencing-technique effectiveness, 1..=10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influencing_score: Option<f64>,
    /// Negotiation-tactic effectiveness, 1..=10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactic_score: Option<f64>,
}

/// A single simulated negotiation run.
///
/// Runs belong to a negotiation and pit one configured strategy combination
/// (technique + tactic + counterpart personality) against the scenario.
/// Everything beyond id/status is optional: failed and still-running runs
/// legitimately carry partial data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub id: RunId,
    pub negotiation_id: NegotiationId,
    pub status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<StrategyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactic: Option<StrategyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<StrategyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<PartyRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_value: Option<f64>,
    #[serde(default)]
    pub total_rounds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zopa_achieved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<RunOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimension_results: Vec<DimensionResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_results: Vec<ProductResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conversation: Vec<ConversationTurn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<RunEvaluation>,
}

impl SimulationRun {
    /// Success weight of this run's outcome (indeterminate when unset).
    pub fn success_score(&self) -> f64 {
        self.outcome
            .map(RunOutcome::success_score)
            .unwrap_or(INDETERMINATE_SUCCESS_SCORE)
    }

    /// Whether the evaluation service has produced an assessment for this run.
    pub fn is_evaluated(&self) -> bool {
        self.evaluation.is_some()
    }
}
