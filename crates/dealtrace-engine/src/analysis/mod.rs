// Analysis module - group summaries, run comparison, and convergence
// Pure business logic over already-fetched run collections

pub mod compare;
pub mod convergence;
pub mod strategy;
pub mod summary;

pub use compare::{
    build_actual_values_radar, build_comparison_summary, build_radar_metrics, ComparisonSummary,
    RadarMetricPoint,
};
pub use convergence::{offers_converging, run_convergence, ConvergenceAssessment};
pub use strategy::{
    summarize_personalities, summarize_tactics, summarize_techniques, StrategySummary,
};
pub use summary::{summarize_dimensions, summarize_products, DimensionSummary, ProductSummary};

/// Round to one decimal place (rates and shares).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Guarded percentage: zero denominator yields 0 instead of NaN.
pub(crate) fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round1(part as f64 / whole as f64 * 100.0)
    }
}

/// Guarded arithmetic mean over already-collected values.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
