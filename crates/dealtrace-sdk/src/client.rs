use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use dealtrace_engine::{
    ComparisonSummary, ConvergenceAssessment, DimensionSummary, ProductSummary, RadarMetricPoint,
    StrategySummary, build_actual_values_radar, build_comparison_summary, build_radar_metrics,
    build_report_entries, filter_report_entries, report_csv_string, run_convergence,
    summarize_dimensions, summarize_personalities, summarize_products, summarize_tactics,
    summarize_techniques, write_report_csv,
};
use dealtrace_runtime::{
    BackfillCoordinator, CoordinatorHandle, EvaluationService, PollConfig, RuntimeConfig,
};
use dealtrace_store::{RunStore, SnapshotStore};
use dealtrace_types::{
    NegotiationId, ReportEntry, ReportFilter, RunId, SimulationRun,
};

use crate::error::{Error, Result};
use crate::watch::BackfillStream;

/// Entry point to a loaded negotiation workspace.
pub struct Client {
    store: Arc<dyn RunStore>,
}

impl Client {
    /// Open the archive directory at `snapshot_root`.
    pub fn open(snapshot_root: impl AsRef<Path>) -> Result<Self> {
        let store = SnapshotStore::open(snapshot_root.as_ref())?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Open the archive directory named by the runtime configuration
    /// (`DEALTRACE_PATH`, then the user's data directory).
    pub fn open_default() -> Result<Self> {
        let config = RuntimeConfig::load()?;
        Self::open(config.resolve_snapshot_root()?)
    }

    /// Wrap an already-loaded store.
    pub fn with_store(store: Arc<dyn RunStore>) -> Self {
        Self { store }
    }

    /// Report listing, filtering and export.
    pub fn reports(&self) -> ReportClient {
        ReportClient {
            store: self.store.clone(),
        }
    }

    /// Per-negotiation analytics over its recorded runs.
    pub fn analytics(&self, negotiation: &NegotiationId) -> AnalyticsClient {
        AnalyticsClient {
            store: self.store.clone(),
            negotiation: negotiation.clone(),
        }
    }

    /// Side-by-side comparison of an explicit run selection.
    pub fn comparison(&self, runs: &[RunId]) -> ComparisonClient {
        ComparisonClient {
            store: self.store.clone(),
            selection: runs.to_vec(),
        }
    }

    /// Spawn a backfill coordinator against `service` with default polling.
    ///
    /// Must be called from within a tokio runtime. Dropping the returned
    /// handle stops the coordinator.
    pub fn backfill(&self, service: Arc<dyn EvaluationService>) -> CoordinatorHandle {
        self.backfill_with(service, PollConfig::default())
    }

    /// Spawn a backfill coordinator with an explicit polling cadence.
    pub fn backfill_with(
        &self,
        service: Arc<dyn EvaluationService>,
        poll: PollConfig,
    ) -> CoordinatorHandle {
        BackfillCoordinator::spawn(service, poll)
    }

    /// Spawn a backfill coordinator and wrap it as a [`BackfillStream`].
    pub fn backfill_stream(&self, service: Arc<dyn EvaluationService>) -> BackfillStream {
        BackfillStream::new(self.backfill(service))
    }
}

/// Flattened report entries, dashboard-ready.
pub struct ReportClient {
    store: Arc<dyn RunStore>,
}

impl ReportClient {
    /// Every negotiation as a report entry, in store order.
    pub fn all(&self) -> Result<Vec<ReportEntry>> {
        Ok(build_report_entries(&self.store.negotiations()?))
    }

    /// Entries matching `filter`, order preserved.
    pub fn filtered(&self, filter: &ReportFilter) -> Result<Vec<ReportEntry>> {
        Ok(filter_report_entries(&self.all()?, filter))
    }

    /// Write every entry as CSV.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<()> {
        write_report_csv(&self.all()?, writer).map_err(|err| Error::Internal(anyhow::Error::new(err)))
    }

    /// The CSV export as a string.
    pub fn csv_string(&self) -> Result<String> {
        report_csv_string(&self.all()?).map_err(|err| Error::Internal(anyhow::Error::new(err)))
    }
}

/// Analytics scoped to one negotiation.
pub struct AnalyticsClient {
    store: Arc<dyn RunStore>,
    negotiation: NegotiationId,
}

impl AnalyticsClient {
    /// The negotiation's runs, ordered by run number.
    pub fn runs(&self) -> Result<Vec<SimulationRun>> {
        self.load_runs()
    }

    /// Per-dimension achievement pooled across the negotiation's runs.
    pub fn dimension_summaries(&self) -> Result<Vec<DimensionSummary>> {
        Ok(summarize_dimensions(&self.load_runs()?))
    }

    /// Per-product ZOPA and price aggregates pooled across runs.
    pub fn product_summaries(&self) -> Result<Vec<ProductSummary>> {
        Ok(summarize_products(&self.load_runs()?))
    }

    /// Effectiveness aggregates per influencing technique.
    pub fn technique_summaries(&self) -> Result<Vec<StrategySummary>> {
        Ok(summarize_techniques(&self.load_runs()?))
    }

    /// Effectiveness aggregates per negotiation tactic.
    pub fn tactic_summaries(&self) -> Result<Vec<StrategySummary>> {
        Ok(summarize_tactics(&self.load_runs()?))
    }

    /// Effectiveness aggregates per counterpart personality.
    pub fn personality_summaries(&self) -> Result<Vec<StrategySummary>> {
        Ok(summarize_personalities(&self.load_runs()?))
    }

    /// Offer convergence over one run's conversation.
    pub fn run_convergence(&self, run: &RunId) -> Result<ConvergenceAssessment> {
        let runs = self.store.runs_by_ids(std::slice::from_ref(run))?;
        match runs.first() {
            Some(found) => Ok(run_convergence(found)),
            None => Err(Error::NotFound(format!("run {run}"))),
        }
    }

    fn load_runs(&self) -> Result<Vec<SimulationRun>> {
        if self.store.negotiation(&self.negotiation)?.is_none() {
            return Err(Error::NotFound(format!(
                "negotiation {}",
                self.negotiation
            )));
        }
        Ok(self.store.runs(&self.negotiation)?)
    }
}

/// Comparison over an explicit run selection.
///
/// The selection may span negotiations; the engine treats it as one pool.
pub struct ComparisonClient {
    store: Arc<dyn RunStore>,
    selection: Vec<RunId>,
}

impl ComparisonClient {
    /// Normalized 0..=100 radar rows for the selection.
    pub fn radar(&self) -> Result<Vec<RadarMetricPoint>> {
        Ok(build_radar_metrics(&self.load_selection()?))
    }

    /// Literal-value radar rows for the selection.
    pub fn actual_values(&self) -> Result<Vec<RadarMetricPoint>> {
        Ok(build_actual_values_radar(&self.load_selection()?))
    }

    /// Headline averages over the selection.
    pub fn summary(&self) -> Result<ComparisonSummary> {
        Ok(build_comparison_summary(&self.load_selection()?))
    }

    fn load_selection(&self) -> Result<Vec<SimulationRun>> {
        let runs = self.store.runs_by_ids(&self.selection)?;
        if runs.len() != self.selection.len() {
            let found: HashSet<&RunId> = runs.iter().map(|run| &run.id).collect();
            let missing: Vec<String> = self
                .selection
                .iter()
                .filter(|id| !found.contains(id))
                .map(|id| id.to_string())
                .collect();
            return Err(Error::NotFound(format!(
                "runs not in store: {}",
                missing.join(", ")
            )));
        }
        Ok(runs)
    }
}
