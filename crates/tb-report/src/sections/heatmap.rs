//! Model × language heatmap section.

use crate::colors::success_bg_class;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tb_common::{BenchmarkResult, DisplayName};
use tb_metrics::{heatmap, HeatmapCell};

/// Test-pass rate grid, one row per model and one column per language.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatmapSection {
    /// Model display names, row order. One entry per raw key, so two keys
    /// may share a label.
    pub llms: Vec<String>,
    /// Language display names, column order. One entry per raw key.
    pub languages: Vec<String>,
    /// Cells, model-major.
    pub cells: Vec<HeatmapCell>,
}

impl HeatmapSection {
    pub fn build(filtered: &[&BenchmarkResult]) -> Self {
        let cells = heatmap(filtered.iter().copied());
        // Axes follow the raw-key order the cells were emitted in.
        let llms = filtered
            .iter()
            .map(|r| &r.llm)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|llm| llm.display_name())
            .collect();
        let languages = filtered
            .iter()
            .map(|r| &r.target_language)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|language| language.display_name())
            .collect();
        Self {
            llms,
            languages,
            cells,
        }
    }

    /// Cell at (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Option<&HeatmapCell> {
        if row >= self.llms.len() || col >= self.languages.len() {
            return None;
        }
        self.cells.get(row * self.languages.len() + col)
    }

    /// Background class for a cell; empty cells are left neutral.
    pub fn cell_class(cell: &HeatmapCell) -> &'static str {
        if cell.count == 0 {
            "bg-gray-100"
        } else {
            success_bg_class(cell.value)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
