//! TransBench metrics aggregation.
//!
//! Pure, synchronous transformations from borrowed benchmark and
//! static-metric collections into chart-ready rows. Nothing here mutates its
//! inputs or performs I/O; calling any function twice with the same inputs
//! yields equal outputs.

pub mod filter;
pub mod pivot;
pub mod rates;
pub mod variation;

pub use filter::{filter_results, filter_static_metrics, metric_matches, result_matches};
pub use pivot::{
    heatmap, performance_by, performance_by_complexity, performance_by_language,
    performance_by_llm, performance_by_prompt, HeatmapCell, PerformanceRow,
};
pub use rates::{calculate_metrics, RateSummary};
pub use variation::{
    variation_by, variation_by_complexity, variation_by_language, variation_by_llm,
    variation_by_prompt, VariationData,
};
