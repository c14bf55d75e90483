//! Display fallbacks for partially configured scenarios.
//!
//! Negotiations are created incrementally upstream, so report rows routinely
//! render before a company, counterpart, or market is attached. All three
//! fallback labels live here so list views, exports, and search all agree on
//! the same wording.

use dealtrace_types::Scenario;

pub const COMPANY_UNRESOLVED: &str = "company unresolved";
pub const COUNTERPART_OPEN: &str = "counterpart open";
pub const MARKET_OPEN: &str = "market open";

/// Company display label, falling back when no usable name is configured.
pub fn company_label(scenario: &Scenario) -> String {
    scenario
        .company
        .as_ref()
        .and_then(|c| non_blank(c.name.as_deref()))
        .unwrap_or_else(|| COMPANY_UNRESOLVED.to_string())
}

/// Counterpart display label.
pub fn counterpart_label(scenario: &Scenario) -> String {
    scenario
        .counterpart
        .as_ref()
        .and_then(|c| non_blank(c.name.as_deref()))
        .unwrap_or_else(|| COUNTERPART_OPEN.to_string())
}

/// Market display label.
pub fn market_label(scenario: &Scenario) -> String {
    scenario
        .market
        .as_ref()
        .and_then(|m| non_blank(m.name.as_deref()))
        .unwrap_or_else(|| MARKET_OPEN.to_string())
}

// Whitespace-only names count as unset.
fn non_blank(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}
