use std::io::Write;

use serde::Serialize;

use dealtrace_types::ReportEntry;

/// Flat CSV row with a stable column set.
///
/// [`ReportEntry`] omits absent optionals when serialized as JSON, which
/// would make CSV rows ragged; this row always writes every column and
/// leaves absent values as empty cells.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportCsvRow<'a> {
    id: &'a str,
    title: &'a str,
    status: &'static str,
    role: Option<&'static str>,
    company: &'a str,
    counterpart: &'a str,
    market: &'a str,
    technique: Option<&'a str>,
    tactic: Option<&'a str>,
    summary: Option<&'a str>,
    created_at: Option<&'a str>,
    total_runs: u64,
    completed_runs: u64,
    success_rate: Option<f64>,
    is_planned: bool,
}

impl<'a> From<&'a ReportEntry> for ReportCsvRow<'a> {
    fn from(entry: &'a ReportEntry) -> Self {
        Self {
            id: entry.id.as_str(),
            title: &entry.title,
            status: entry.status.as_str(),
            role: entry.role.map(|r| r.as_str()),
            company: &entry.company,
            counterpart: &entry.counterpart,
            market: &entry.market,
            technique: entry.technique.as_deref(),
            tactic: entry.tactic.as_deref(),
            summary: entry.summary.as_deref(),
            created_at: entry.created_at.as_deref(),
            total_runs: entry.total_runs,
            completed_runs: entry.completed_runs,
            success_rate: entry.success_rate,
            is_planned: entry.is_planned,
        }
    }
}

/// Write report rows as CSV, header included.
pub fn write_report_csv<W: Write>(entries: &[ReportEntry], writer: W) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for entry in entries {
        out.serialize(ReportCsvRow::from(entry))?;
    }
    out.flush()?;
    Ok(())
}

/// Convenience wrapper rendering the CSV into a string.
pub fn report_csv_string(entries: &[ReportEntry]) -> csv::Result<String> {
    let mut buf = Vec::new();
    write_report_csv(entries, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
