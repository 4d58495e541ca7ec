//! Per-dimension performance charts.

use serde::{Deserialize, Serialize};
use tb_common::{BenchmarkResult, Dimension};
use tb_metrics::{performance_by, PerformanceRow};

/// One bar chart: outcome rates per value of a dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceChart {
    pub dimension: Dimension,
    pub title: String,
    pub rows: Vec<PerformanceRow>,
}

impl PerformanceChart {
    /// DOM id of the chart container.
    pub fn element_id(&self) -> String {
        format!("perf-{}", self.dimension)
    }

    /// Row with the highest test-pass rate.
    pub fn best(&self) -> Option<&PerformanceRow> {
        // Complexity rows are in canonical order, not ranked.
        self.rows
            .iter()
            .filter(|r| r.count > 0)
            .max_by(|a, b| a.test_pass_rate.total_cmp(&b.test_pass_rate))
    }
}

/// Performance charts for every dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceSection {
    pub charts: Vec<PerformanceChart>,
}

impl PerformanceSection {
    /// Pivot the filtered records along every dimension.
    pub fn build(filtered: &[&BenchmarkResult]) -> Self {
        let charts = Dimension::all()
            .iter()
            .map(|&dimension| PerformanceChart {
                dimension,
                title: format!("Performance by {}", dimension.label()),
                rows: performance_by(dimension, filtered.iter().copied()),
            })
            .collect();
        Self { charts }
    }

    /// Chart for `dimension`, if present.
    pub fn chart(&self, dimension: Dimension) -> Option<&PerformanceChart> {
        self.charts.iter().find(|c| c.dimension == dimension)
    }
}
