//! Dashboard section data structures.

pub mod heatmap;
pub mod overview;
pub mod performance;
pub mod variation;

pub use heatmap::HeatmapSection;
pub use overview::{MetricCard, OverviewSection};
pub use performance::{PerformanceChart, PerformanceSection};
pub use variation::{VariationChart, VariationSection};
