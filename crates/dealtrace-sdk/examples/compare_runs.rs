//! Run comparison example: Radar metrics across a run selection
//!
//! This example demonstrates:
//! - Selecting the runs of one negotiation
//! - Building normalized radar rows (every axis scaled 0..=100)
//! - Building literal actual-value rows and the pooled summary
//!
//! Run with: cargo run -p dealtrace-sdk --example compare_runs

use dealtrace_sdk::types::RunId;
use dealtrace_sdk::Client;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Open the workspace
    let client = Client::open_default()?;

    // 2. Pick the first negotiation with at least two runs to compare
    let entries = client.reports().all()?;
    let Some(entry) = entries.iter().find(|e| e.total_runs >= 2) else {
        println!("No negotiation with two or more runs found.");
        return Ok(());
    };
    println!("Comparing runs of: {}\n", entry.title);

    let runs = client.analytics(&entry.id).runs()?;
    let selection: Vec<RunId> = runs.iter().map(|run| run.id.clone()).collect();
    let comparison = client.comparison(&selection);

    // 3. Normalized radar: the best run per axis scores exactly 100
    println!("Normalized radar (0..=100):");
    for point in comparison.radar()? {
        print!("  {:<24}", point.metric);
        for (run, score) in &point.values {
            print!("  {run}={score:>5.1}");
        }
        println!();
    }

    // 4. Actual values keep units; runs without a value are omitted per row
    println!("\nActual values:");
    for point in comparison.actual_values()? {
        print!("  {:<24}", point.metric);
        for (run, value) in &point.values {
            print!("  {run}={value:.2}");
        }
        println!();
    }

    // 5. Pooled headline numbers over the whole selection
    let summary = comparison.summary()?;
    println!("\nSummary:");
    println!("  Avg deal value: {:.2}", summary.avg_deal_value);
    println!("  Avg rounds: {:.1}", summary.avg_rounds);
    println!("  Dimension success share: {:.1}%", summary.success_share);

    Ok(())
}
