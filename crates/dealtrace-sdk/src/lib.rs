//! dealtrace-sdk: SDK for negotiation simulation analytics.
//!
//! **Note**: README.md is auto-generated from this rustdoc using `cargo-rdme`.
//! To update: `cargo rdme --workspace-project dealtrace-sdk`
//!
//! # Overview
//!
//! `dealtrace-sdk` provides a high-level, stable API for building tools on top
//! of dealtrace. It powers dashboard backends (reporting, per-negotiation
//! analytics, run comparison) and can be embedded in your own applications.
//! It abstracts away the internal complexity of archive ingestion, metric
//! normalization, and runtime orchestration, exposing only the essential
//! primitives for analyzing AI negotiation simulations.
//!
//! # Quickstart
//!
//! ```no_run
//! use dealtrace_sdk::{Client, ReportFilter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Open an exported archive directory
//! let client = Client::open("/srv/dealtrace/archives")?;
//!
//! // List negotiations matching a free-text search
//! let filter = ReportFilter {
//!     search: Some("Nordic".into()),
//!     ..Default::default()
//! };
//! for entry in client.reports().filtered(&filter)? {
//!     println!("{} [{:?}] {} runs", entry.title, entry.status, entry.total_runs);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! For complete examples, see the [`examples/`](https://github.com/lanegrid/dealtrace/tree/main/crates/dealtrace-sdk/examples) directory.
//!
//! # Architecture
//!
//! This SDK acts as a facade over:
//! - `dealtrace-types`: Core domain models (NegotiationRecord, SimulationRun, etc.)
//! - `dealtrace-store`: Tolerant JSON archive ingestion
//! - `dealtrace-engine`: Summaries, radar comparison, reports and CSV export
//! - `dealtrace-runtime`: Configuration and the evaluation backfill coordinator
//!
//! # Usage Patterns
//!
//! ## Run Comparison
//!
//! ```no_run
//! use dealtrace_sdk::{Client, RunId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::open("/srv/dealtrace/archives")?;
//! let selection = [RunId::new("run-a"), RunId::new("run-b")];
//!
//! let comparison = client.comparison(&selection);
//! for point in comparison.radar()? {
//!     println!("{}: {:?}", point.metric, point.values);
//! }
//!
//! let summary = comparison.summary()?;
//! println!(
//!     "avg value {:.2}, avg rounds {:.1}, success {:.1}%",
//!     summary.avg_deal_value, summary.avg_rounds, summary.success_share
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Evaluation Backfill
//!
//! ```no_run
//! use dealtrace_sdk::{BackfillEvent, Client};
//! # use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let service = Arc::new(dealtrace_testing::ScriptedEvaluationService::new());
//! let client = Client::open("/srv/dealtrace/archives")?;
//!
//! // `service` is any EvaluationService implementation
//! let mut handle = client.backfill(service);
//! handle.trigger()?;
//!
//! while let Some(event) = handle.next_event().await {
//!     match event {
//!         BackfillEvent::StatusUpdated { status } => {
//!             println!("{} of {} runs evaluated", status.evaluated, status.total);
//!         }
//!         BackfillEvent::BackfillCompleted { .. } => break,
//!         BackfillEvent::TriggerFailed { reason } => {
//!             eprintln!("backfill rejected: {reason}");
//!             break;
//!         }
//!         _ => {}
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;
pub mod watch;

// Re-export the ingestion and runtime seams for embedders
pub use dealtrace_runtime::{
    BackfillCoordinator, CoordinatorHandle, EvaluationService, RuntimeConfig,
};
pub use dealtrace_store::{RunStore, SnapshotStore};

// Public facade
pub use client::{AnalyticsClient, Client, ComparisonClient, ReportClient};
pub use error::{Error, Result};
pub use watch::BackfillStream;
pub use types::{
    BackfillEvent, BackfillPhase, ComparisonSummary, ConvergenceAssessment, CoordinatorState,
    DimensionSummary, EvaluationStatus, MetricValue, NegotiationId, PollConfig, ProductSummary,
    RadarMetricPoint, ReportEntry, ReportFilter, RunId, StrategySummary,
};

/// Stateless building blocks for custom analytics tools.
///
/// These are pure functions over runs and records already in hand. Use them
/// when you manage your own ingestion or need one computation without a
/// [`Client`].
///
/// # Example
///
/// ```no_run
/// use dealtrace_sdk::utils;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let archive = utils::read_archive("/srv/dealtrace/archives/supplier-frame.json".as_ref())?;
/// for summary in utils::summarize_dimensions(&archive.runs) {
///     println!("{}: {:.1}% achieved", summary.name, summary.rate);
/// }
/// # Ok(())
/// # }
/// ```
pub mod utils {
    // Analytics over runs already in hand
    pub use dealtrace_engine::{
        build_actual_values_radar, build_comparison_summary, build_radar_metrics,
        build_report_entries, filter_report_entries, offers_converging, report_csv_string,
        run_convergence, summarize_dimensions, summarize_personalities, summarize_products,
        summarize_tactics, summarize_techniques, write_report_csv,
    };

    // Raw archive access for custom ingestion pipelines
    pub use dealtrace_store::{NegotiationArchive, discover_archives, read_archive};

    // Workspace path resolution shared with the runtime config
    pub use dealtrace_runtime::resolve_workspace_path;
}
