//! Type re-exports for the SDK.
//!
//! This module re-exports all types that SDK consumers (like a dashboard
//! backend) need to work with. By centralizing these re-exports, we maintain
//! a stable API boundary while allowing internal crate refactoring without
//! breaking SDK clients.

// ============================================================================
// Domain Types (from dealtrace-types)
// ============================================================================

// Note: dealtrace-types re-exports everything at the top level from its
// domain and metric modules
pub use dealtrace_types::{
    // Identifiers
    NegotiationId,
    RunId,
    // Negotiation records
    CompanyProfile,
    CounterpartProfile,
    DimensionTarget,
    MarketProfile,
    NegotiationRecord,
    NegotiationStatus,
    PartyRole,
    Scenario,
    SimulationStats,
    StrategyRef,
    // Simulation runs
    ConversationTurn,
    DimensionResult,
    OfferSnapshot,
    ProductResult,
    RunEvaluation,
    RunOutcome,
    RunStatus,
    SimulationRun,
    // Report surface
    ReportEntry,
    ReportFilter,
    // Evaluation backfill
    EvaluationStatus,
    // Tolerant scalar decoding
    MetricValue,
};

// ============================================================================
// Analytics Types (from dealtrace-engine)
// ============================================================================

pub use dealtrace_engine::{
    ComparisonSummary, ConvergenceAssessment, DimensionSummary, ProductSummary, RadarMetricPoint,
    StrategySummary,
};

// ============================================================================
// Runtime Types (from dealtrace-runtime)
// ============================================================================

pub use dealtrace_runtime::{BackfillEvent, BackfillPhase, CoordinatorState, PollConfig};
