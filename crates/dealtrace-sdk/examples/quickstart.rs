//! Quickstart example: Open a workspace and browse negotiations
//!
//! This minimal example demonstrates:
//! - Opening a dealtrace archive workspace
//! - Listing negotiations as report entries
//! - Drilling into one negotiation's dimension and product summaries
//!
//! For side-by-side run comparison, see: examples/compare_runs.rs
//! For CSV exports, see: examples/export_report.rs
//!
//! Run with: cargo run -p dealtrace-sdk --example quickstart

use dealtrace_sdk::Client;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Open the workspace from DEALTRACE_PATH or the platform data directory
    let client = Client::open_default()?;
    println!("Workspace open\n");

    // List negotiations
    let entries = client.reports().all()?;
    println!("{} negotiation(s) on record", entries.len());

    if let Some(entry) = entries.first() {
        println!("\nNegotiation: {}", entry.title);
        println!("Status: {:?}", entry.status);
        println!("Company: {}", entry.company);
        println!("Counterpart: {}", entry.counterpart);
        println!(
            "Runs: {} total, {} completed",
            entry.total_runs, entry.completed_runs
        );

        // Pooled analytics across the negotiation's runs
        let analytics = client.analytics(&entry.id);

        let dimensions = analytics.dimension_summaries()?;
        if !dimensions.is_empty() {
            println!("\nDimension targets:");
            for dim in &dimensions {
                println!(
                    "  {}: {}/{} achieved ({:.1}%)",
                    dim.name, dim.achieved, dim.total, dim.rate
                );
            }
        }

        let products = analytics.product_summaries()?;
        if !products.is_empty() {
            println!("\nProduct lines:");
            for product in &products {
                println!(
                    "  {}: {}/{} in ZOPA, avg price {:.2}",
                    product.name, product.in_zopa, product.total, product.avg_price
                );
            }
        }
    } else {
        println!("No negotiations found. Export simulation archives first.");
    }

    Ok(())
}
