use serde::{Deserialize, Serialize};

use super::ids::NegotiationId;

/// Lifecycle state of a negotiation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationStatus {
    /// Configured but no runs executed yet
    Planned,
    Running,
    Completed,
    Aborted,
}

impl NegotiationStatus {
    /// Parse an upstream status label (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "planned" => Some(Self::Planned),
            "running" => Some(Self::Running),
            "completed" => Some(Self::Completed),
            "aborted" => Some(Self::Aborted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Aborted => "aborted",
        }
    }
}

/// Side of the table the simulated agent negotiates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    Buyer,
    Seller,
}

impl PartyRole {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buyer => Self::Seller,
            Self::Seller => Self::Buyer,
        }
    }

    /// Parse an upstream role label (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "buyer" => Some(Self::Buyer),
            "seller" => Some(Self::Seller),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
        }
    }
}

/// Reference to a configured influencing technique, negotiation tactic,
/// or counterpart personality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StrategyRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Own company profile attached to a scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

/// Counterpart profile attached to a scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterpartProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Configured negotiation attitude (e.g. "aggressive", "collaborative").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attitude: Option<String>,
}

/// Market context attached to a scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Per-dimension goal posts configured for a scenario.
///
/// Dimensions are negotiation variables beyond price (delivery time,
/// payment terms, warranty). Numeric bounds are optional because free-text
/// dimensions carry none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionTarget {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// 1 = critical, 2 = important, 3 = flexible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

/// Scenario configuration of a negotiation.
///
/// Negotiations are created incrementally in the upstream tool, so every
/// profile may still be unset. Consumers must not assume any field is
/// present; display fallbacks are resolved centrally when report entries
/// are built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterpart: Option<CounterpartProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<StrategyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactic: Option<StrategyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<PartyRole>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimension_targets: Vec<DimensionTarget>,
}

/// Aggregate run counters attached to a negotiation.
///
/// Counters are computed upstream and may be mutually inconsistent
/// (e.g. completed + failed > total during a write race). They are
/// surfaced as-is and never reconciled here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub total_runs: u64,
    pub completed_runs: u64,
    pub running_runs: u64,
    pub failed_runs: u64,
    pub pending_runs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    /// True when the negotiation is configured but not yet simulated.
    pub is_planned: bool,
}

/// A negotiation as exported from the upstream store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationRecord {
    pub id: NegotiationId,
    pub title: String,
    pub status: NegotiationStatus,
    /// Raw creation timestamp. Kept as the upstream string because archives
    /// in the wild carry non-ISO values; parsing happens at filter time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub scenario: Scenario,
    #[serde(default)]
    pub stats: SimulationStats,
}
