//! Report projection and filtering.
//!
//! Negotiation records flatten 1:1 into [`ReportEntry`] rows for list views
//! and exports. Filtering is a pure predicate pass: clauses AND together and
//! the incoming order is preserved, never re-sorted.

use chrono::{DateTime, NaiveDate};
use dealtrace_types::{NegotiationRecord, ReportEntry, ReportFilter};

use crate::labels;

/// Flatten negotiation records into report rows, one per record.
pub fn build_report_entries(records: &[NegotiationRecord]) -> Vec<ReportEntry> {
    records.iter().map(project_entry).collect()
}

/// Apply a filter to already-built report rows.
///
/// Returns owned matches in their original order. An unrestricted filter
/// reproduces the input exactly.
pub fn filter_report_entries(entries: &[ReportEntry], filter: &ReportFilter) -> Vec<ReportEntry> {
    entries
        .iter()
        .filter(|entry| matches(entry, filter))
        .cloned()
        .collect()
}

fn project_entry(record: &NegotiationRecord) -> ReportEntry {
    let scenario = &record.scenario;
    ReportEntry {
        id: record.id.clone(),
        title: record.title.clone(),
        status: record.status,
        role: scenario.role,
        company: labels::company_label(scenario),
        counterpart: labels::counterpart_label(scenario),
        market: labels::market_label(scenario),
        technique: scenario.technique.as_ref().map(|t| t.name.clone()),
        tactic: scenario.tactic.as_ref().map(|t| t.name.clone()),
        summary: record.summary.clone(),
        created_at: record.created_at.clone(),
        total_runs: record.stats.total_runs,
        completed_runs: record.stats.completed_runs,
        success_rate: record.stats.success_rate,
        is_planned: record.stats.is_planned,
    }
}

fn matches(entry: &ReportEntry, filter: &ReportFilter) -> bool {
    if !filter.statuses.is_empty() && !filter.statuses.contains(&entry.status) {
        return false;
    }

    // The role clause requires an entry to have a role at all; scenarios
    // without one never match a role-restricted filter.
    if !filter.roles.is_empty() {
        match entry.role {
            Some(role) if filter.roles.contains(&role) => {}
            _ => return false,
        }
    }

    if filter.from.is_some() || filter.to.is_some() {
        // Entries with absent or unparsable timestamps stay visible rather
        // than silently vanishing from a date-restricted view.
        if let Some(date) = entry.created_at.as_deref().and_then(parse_created_date) {
            if let Some(from) = filter.from {
                if date < from {
                    return false;
                }
            }
            if let Some(to) = filter.to {
                if date > to {
                    return false;
                }
            }
        }
    }

    if let Some(needle) = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let needle = needle.to_lowercase();
        let matched = [
            entry.title.as_str(),
            entry.company.as_str(),
            entry.counterpart.as_str(),
            entry.market.as_str(),
            entry.summary.as_deref().unwrap_or(""),
        ]
        .iter()
        .any(|hay| hay.to_lowercase().contains(&needle));
        if !matched {
            return false;
        }
    }

    true
}

/// Calendar date of an upstream timestamp, as written.
///
/// Accepts RFC 3339 as exported by the store, plus bare dates and
/// space-separated datetime strings seen in older archives.
fn parse_created_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
