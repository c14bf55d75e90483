//! Raw deserialization targets for negotiation archive files.
//!
//! Archives are produced by several exporter generations, so every field is
//! optional and scalar fields that drifted between number, string and null
//! are typed as [`MetricValue`]. Key spellings that changed over time are
//! covered with serde aliases. Interpretation happens in `mapper`, not here.

use std::collections::BTreeMap;

use dealtrace_types::MetricValue;
use serde::{Deserialize, Serialize};

/// One archive file: a negotiation and the runs recorded for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawArchive {
    #[serde(default)]
    pub negotiation: RawNegotiation,
    #[serde(default)]
    pub runs: Vec<RawRun>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNegotiation {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub scenario: RawScenario,
    #[serde(default)]
    pub stats: RawStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawScenario {
    #[serde(default)]
    pub company: Option<RawProfile>,
    #[serde(default)]
    pub counterpart: Option<RawProfile>,
    #[serde(default)]
    pub market: Option<RawProfile>,
    #[serde(default)]
    pub technique: Option<RawStrategy>,
    #[serde(default)]
    pub tactic: Option<RawStrategy>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, alias = "dimensionTargets")]
    pub dimensions: Vec<RawDimensionTarget>,
}

/// Company, counterpart and market profiles share one loose shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub attitude: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

/// Strategy references appear both as bare names and as objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawStrategy {
    Label(String),
    Detailed(RawStrategyRef),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStrategyRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDimensionTarget {
    #[serde(default, alias = "dimensionName")]
    pub name: Option<String>,
    #[serde(default, alias = "target")]
    pub target_value: MetricValue,
    #[serde(default, alias = "min")]
    pub min_value: MetricValue,
    #[serde(default, alias = "max")]
    pub max_value: MetricValue,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub priority: MetricValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStats {
    #[serde(default)]
    pub total_runs: MetricValue,
    #[serde(default)]
    pub completed_runs: MetricValue,
    #[serde(default)]
    pub running_runs: MetricValue,
    #[serde(default)]
    pub failed_runs: MetricValue,
    #[serde(default)]
    pub pending_runs: MetricValue,
    #[serde(default)]
    pub success_rate: MetricValue,
    #[serde(default)]
    pub is_planned: MetricValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRun {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub negotiation_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub outcome_reason: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub technique: Option<RawStrategy>,
    #[serde(default)]
    pub tactic: Option<RawStrategy>,
    #[serde(default)]
    pub personality: Option<RawStrategy>,
    #[serde(default)]
    pub deal_value: MetricValue,
    #[serde(default)]
    pub total_rounds: MetricValue,
    #[serde(default)]
    pub run_number: MetricValue,
    #[serde(default, alias = "withinZopa")]
    pub zopa_achieved: MetricValue,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub dimension_results: Vec<RawDimensionResult>,
    #[serde(default)]
    pub product_results: Vec<RawProductResult>,
    #[serde(default, alias = "conversation")]
    pub conversation_log: Vec<RawConversationTurn>,
    #[serde(default)]
    pub tactical_summary: Option<String>,
    #[serde(default, alias = "influencingEffectivenessScore")]
    pub technique_effectiveness_score: MetricValue,
    #[serde(default)]
    pub tactic_effectiveness_score: MetricValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDimensionResult {
    #[serde(default, alias = "dimensionName")]
    pub name: Option<String>,
    #[serde(default, alias = "target")]
    pub target_value: MetricValue,
    #[serde(default, alias = "min")]
    pub min_value: MetricValue,
    #[serde(default, alias = "max")]
    pub max_value: MetricValue,
    #[serde(default)]
    pub final_value: MetricValue,
    #[serde(default)]
    pub achieved_target: MetricValue,
    #[serde(default, alias = "priorityScore")]
    pub priority: MetricValue,
    #[serde(default)]
    pub improvement_over_batna: MetricValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProductResult {
    #[serde(default, alias = "productName")]
    pub name: Option<String>,
    #[serde(default)]
    pub agreed_price: MetricValue,
    #[serde(default)]
    pub target_price: MetricValue,
    #[serde(default)]
    pub min_max_price: MetricValue,
    #[serde(default)]
    pub estimated_volume: MetricValue,
    #[serde(default)]
    pub subtotal: MetricValue,
    #[serde(default)]
    pub performance_score: MetricValue,
    #[serde(default, alias = "inZopa")]
    pub within_zopa: MetricValue,
    #[serde(default)]
    pub zopa_utilization: MetricValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawConversationTurn {
    #[serde(default)]
    pub round: MetricValue,
    #[serde(default, alias = "speaker")]
    pub agent: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub offer: Option<RawOffer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawOffer {
    #[serde(default, alias = "dimension_values", alias = "values")]
    pub dimension_values: BTreeMap<String, MetricValue>,
    #[serde(default)]
    pub confidence: MetricValue,
    #[serde(default)]
    pub reasoning: Option<String>,
}
