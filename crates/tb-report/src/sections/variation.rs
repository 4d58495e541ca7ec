//! Static code-variation charts.

use serde::{Deserialize, Serialize};
use tb_common::{Dimension, Filters, StaticMetric};
use tb_metrics::{variation_by, VariationData};

/// Composed chart: ΔCC (log) bars with a ΔSLoC line, per value of a dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationChart {
    pub dimension: Dimension,
    pub title: String,
    pub description: String,
    /// Set when the breakdown dimension is unfiltered and every value is shown.
    pub note: Option<String>,
    pub rows: Vec<VariationData>,
}

impl VariationChart {
    /// DOM id of the chart container.
    pub fn element_id(&self) -> String {
        format!("variation-{}", self.dimension)
    }

    fn build(dimension: Dimension, metrics: &[StaticMetric], filters: &Filters) -> Self {
        let unfiltered = match dimension {
            Dimension::Llm => filters.llm.is_all(),
            Dimension::Language => filters.language.is_all(),
            Dimension::Prompt => filters.prompt.is_all(),
            Dimension::Complexity => filters.complexity.is_all(),
        };
        let (subject, note) = match dimension {
            Dimension::Llm => ("models", "Showing all models."),
            Dimension::Language => ("target languages", "Sorted by ΔSLoC, largest first."),
            Dimension::Prompt => ("prompting strategies", "Showing all prompt strategies."),
            Dimension::Complexity => ("problem complexity levels", "Showing all complexity levels."),
        };
        Self {
            dimension,
            title: format!("Code Variation by {}", dimension.label()),
            description: format!(
                "How cyclomatic complexity and code length change across {}.",
                subject
            ),
            note: unfiltered.then(|| note.to_string()),
            rows: variation_by(dimension, metrics, filters),
        }
    }
}

/// Variation charts for every dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VariationSection {
    pub charts: Vec<VariationChart>,
}

impl VariationSection {
    pub fn build(metrics: &[StaticMetric], filters: &Filters) -> Self {
        let charts = [
            Dimension::Complexity,
            Dimension::Language,
            Dimension::Prompt,
            Dimension::Llm,
        ]
        .into_iter()
        .map(|dimension| VariationChart::build(dimension, metrics, filters))
        .collect();
        Self { charts }
    }

    /// Chart for `dimension`, if present.
    pub fn chart(&self, dimension: Dimension) -> Option<&VariationChart> {
        self.charts.iter().find(|c| c.dimension == dimension)
    }

    /// Total number of rows across charts.
    pub fn row_count(&self) -> usize {
        self.charts.iter().map(|c| c.rows.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_common::{Complexity, Selection};

    fn moderate_rollup() -> StaticMetric {
        StaticMetric {
            language: Selection::All,
            llm: Selection::All,
            prompt: Selection::All,
            complexity: Selection::Specific(Complexity::Moderate),
            delta_cc_log: 0.3,
            min_delta_cc: -2.0,
            max_delta_cc: 5.0,
            delta_loc: 12.5,
            min_delta_loc: -8.0,
            max_delta_loc: 30.0,
        }
    }

    #[test]
    fn test_build_all_dimensions() {
        let section = VariationSection::build(&[moderate_rollup()], &Filters::all());
        assert_eq!(section.charts.len(), 4);
        assert_eq!(section.row_count(), 1);

        let chart = section.chart(Dimension::Complexity).unwrap();
        assert_eq!(chart.title, "Code Variation by Complexity");
        assert_eq!(chart.element_id(), "variation-complexity");
        assert_eq!(chart.note.as_deref(), Some("Showing all complexity levels."));
        assert_eq!(chart.rows[0].name, "Moderate");
    }

    #[test]
    fn test_note_hidden_when_dimension_pinned() {
        let filters = Filters::all().with_complexity(Complexity::Moderate);
        let section = VariationSection::build(&[moderate_rollup()], &filters);
        let chart = section.chart(Dimension::Complexity).unwrap();
        assert!(chart.note.is_none());
        assert_eq!(chart.rows.len(), 1);
    }
}
