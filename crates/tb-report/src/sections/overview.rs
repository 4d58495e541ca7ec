//! Overview section data.

use crate::colors::{success_bg_class, success_text_class};
use serde::{Deserialize, Serialize};
use tb_common::{BenchmarkResult, Filters};
use tb_metrics::{calculate_metrics, RateSummary};

/// Overview section containing the headline numbers for the current filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewSection {
    /// Filters the numbers were computed under.
    pub filters: Filters,
    /// Rates over the filtered results.
    pub summary: RateSummary,
    /// Records in the unfiltered dataset.
    pub dataset_size: usize,
}

/// One headline card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    /// Tailwind text class; empty for plain counts.
    pub text_class: String,
    /// Tailwind background class; empty for plain counts.
    pub bg_class: String,
}

impl OverviewSection {
    /// Summarize the filtered records.
    pub fn build<'a, I>(filtered: I, filters: &Filters, dataset_size: usize) -> Self
    where
        I: IntoIterator<Item = &'a BenchmarkResult>,
    {
        Self {
            filters: filters.clone(),
            summary: calculate_metrics(filtered),
            dataset_size,
        }
    }

    /// Share of the dataset that survives the filters, as a percentage.
    pub fn coverage_pct(&self) -> f64 {
        if self.dataset_size > 0 {
            100.0 * self.summary.total_translations as f64 / self.dataset_size as f64
        } else {
            0.0
        }
    }

    /// `(dimension, value)` pairs for every pinned filter.
    pub fn active_filters(&self) -> Vec<(&'static str, String)> {
        let f = &self.filters;
        let mut active = Vec::new();
        if let Some(language) = f.language.specific() {
            active.push(("Language", language.to_string()));
        }
        if let Some(llm) = f.llm.specific() {
            active.push(("Model", llm.to_string()));
        }
        if let Some(prompt) = f.prompt.specific() {
            active.push(("Prompt", prompt.to_string()));
        }
        if let Some(complexity) = f.complexity.specific() {
            active.push(("Complexity", complexity.to_string()));
        }
        active
    }

    /// Headline cards in display order.
    ///
    /// Failure rates are colored by their complement so a low failure rate
    /// reads as green.
    pub fn cards(&self) -> Vec<MetricCard> {
        let s = &self.summary;
        vec![
            plain_card("Total Translations", s.total_translations.to_string()),
            plain_card("Unique Problems", s.unique_problems.to_string()),
            rate_card("Compile Failures", s.compile_fail_rate, 100.0 - s.compile_fail_rate),
            rate_card("Runtime Failures", s.runtime_fail_rate, 100.0 - s.runtime_fail_rate),
            rate_card("Test Failures", s.test_fail_rate, 100.0 - s.test_fail_rate),
            rate_card("Tests Passed", s.test_pass_rate, s.test_pass_rate),
        ]
    }
}

fn plain_card(label: &str, value: String) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value,
        text_class: String::new(),
        bg_class: String::new(),
    }
}

fn rate_card(label: &str, rate: f64, success: f64) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value: format!("{:.2}%", rate),
        text_class: success_text_class(success).to_string(),
        bg_class: success_bg_class(success).to_string(),
    }
}
