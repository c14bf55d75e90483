//! Report export example: Filter negotiations and export CSV
//!
//! This example demonstrates:
//! - Building a composable report filter (status + free-text search)
//! - Listing the matching entries
//! - Exporting the full report as CSV to a file
//!
//! Run with: cargo run -p dealtrace-sdk --example export_report [output.csv]

use std::fs::File;

use dealtrace_sdk::types::{NegotiationStatus, ReportFilter};
use dealtrace_sdk::Client;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::open_default()?;

    // Clauses AND together; leave a clause empty to not restrict on it
    let filter = ReportFilter {
        statuses: vec![NegotiationStatus::Completed],
        search: Some("frame".into()),
        ..Default::default()
    };

    let matching = client.reports().filtered(&filter)?;
    println!("{} completed negotiation(s) matching \"frame\":", matching.len());
    for entry in &matching {
        let success = entry
            .success_rate
            .map(|rate| format!("{rate:.1}% success"))
            .unwrap_or_else(|| "no completed runs".to_string());
        println!("  {} ({} runs, {})", entry.title, entry.total_runs, success);
    }

    // The CSV export always covers the unfiltered report
    let output = std::env::args().nth(1).unwrap_or_else(|| "report.csv".to_string());
    client.reports().export_csv(File::create(&output)?)?;
    println!("\nFull report written to {output}");

    Ok(())
}
