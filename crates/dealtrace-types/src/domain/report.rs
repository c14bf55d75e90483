use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::NegotiationId;
use super::negotiation::{NegotiationStatus, PartyRole};

/// Flattened negotiation row for list views and exports.
///
/// Serialized in the dashboard dialect (camelCase). Profile labels are
/// already resolved: a missing company reads "company unresolved" instead
/// of forcing every consumer to null-check the scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub id: NegotiationId,
    pub title: String,
    pub status: NegotiationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<PartyRole>,
    pub company: String,
    pub counterpart: String,
    pub market: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Raw upstream timestamp; may be absent or unparsable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub total_runs: u64,
    pub completed_runs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    pub is_planned: bool,
}

/// Composable report filter; every clause is optional and clauses AND together.
///
/// Empty status/role sets and a blank search string mean "no restriction".
/// Date bounds apply to the parsed `created_at` calendar date; entries whose
/// timestamp cannot be parsed are never excluded by the date clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<NegotiationStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<PartyRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound (through the end of that day).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ReportFilter {
    /// True when no clause restricts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.statuses.is_empty()
            && self.roles.is_empty()
            && self.from.is_none()
            && self.to.is_none()
            && self.search.as_deref().is_none_or(|s| s.trim().is_empty())
    }
}
