// Engine module - Core analytics logic (projection, summaries, comparison)
// This layer sits between ingested domain records (types) and dashboard consumers

pub mod analysis;
pub mod export;
pub mod labels;
pub mod report;

pub use analysis::{
    build_actual_values_radar, build_comparison_summary, build_radar_metrics, offers_converging,
    run_convergence, summarize_dimensions, summarize_personalities, summarize_products,
    summarize_tactics, summarize_techniques, ComparisonSummary, ConvergenceAssessment,
    DimensionSummary, ProductSummary, RadarMetricPoint, StrategySummary,
};
pub use export::{report_csv_string, write_report_csv};
pub use report::{build_report_entries, filter_report_entries};
