//! Grouping of benchmark results along one or two dimensions.
//!
//! Partitions are keyed by the raw categorical value in a `BTreeMap`, so key
//! iteration is deterministic. Data-derived pivots are then ranked by
//! test-pass rate with a stable sort; complexity always uses the canonical
//! level order.

use crate::rates::{calculate_metrics, RateSummary};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tb_common::{BenchmarkResult, Complexity, Dimension, DisplayName};
use tracing::trace;

/// Rates for one partition of the results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    /// Display name of the partition key.
    pub name: String,
    pub compile_fail_rate: f64,
    pub runtime_fail_rate: f64,
    pub test_fail_rate: f64,
    pub test_pass_rate: f64,
    /// Number of records in the partition.
    pub count: usize,
}

impl PerformanceRow {
    fn new(name: String, summary: RateSummary) -> Self {
        Self {
            name,
            compile_fail_rate: summary.compile_fail_rate,
            runtime_fail_rate: summary.runtime_fail_rate,
            test_fail_rate: summary.test_fail_rate,
            test_pass_rate: summary.test_pass_rate,
            count: summary.total_translations,
        }
    }
}

/// Test-pass rate for one (model, language) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    /// Model display name.
    pub llm: String,
    /// Language display name.
    pub language: String,
    /// Test-pass rate, 0 for an empty pair.
    pub value: f64,
    pub count: usize,
}

fn group_by<'a, K, I, F>(records: I, key: F) -> BTreeMap<K, Vec<&'a BenchmarkResult>>
where
    K: Ord,
    I: IntoIterator<Item = &'a BenchmarkResult>,
    F: Fn(&'a BenchmarkResult) -> K,
{
    let mut groups: BTreeMap<K, Vec<&'a BenchmarkResult>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record);
    }
    groups
}

fn ranked<K: DisplayName>(groups: BTreeMap<K, Vec<&BenchmarkResult>>) -> Vec<PerformanceRow> {
    let mut rows: Vec<PerformanceRow> = groups
        .into_iter()
        .map(|(key, items)| PerformanceRow::new(key.display_name(), calculate_metrics(items)))
        .collect();
    rows.sort_by(|a, b| b.test_pass_rate.total_cmp(&a.test_pass_rate));
    rows
}

/// Rates per model, best test-pass rate first.
pub fn performance_by_llm<'a, I>(records: I) -> Vec<PerformanceRow>
where
    I: IntoIterator<Item = &'a BenchmarkResult>,
{
    ranked(group_by(records, |r| &r.llm))
}

/// Rates per target language, best test-pass rate first.
pub fn performance_by_language<'a, I>(records: I) -> Vec<PerformanceRow>
where
    I: IntoIterator<Item = &'a BenchmarkResult>,
{
    ranked(group_by(records, |r| &r.target_language))
}

/// Rates per prompt strategy, best test-pass rate first.
pub fn performance_by_prompt<'a, I>(records: I) -> Vec<PerformanceRow>
where
    I: IntoIterator<Item = &'a BenchmarkResult>,
{
    ranked(group_by(records, |r| &r.prompt))
}

/// Rates per complexity level: always three rows, simple → complex.
pub fn performance_by_complexity<'a, I>(records: I) -> Vec<PerformanceRow>
where
    I: IntoIterator<Item = &'a BenchmarkResult>,
{
    let mut groups = group_by(records, |r| r.complexity);
    Complexity::all()
        .iter()
        .map(|level| {
            let items = groups.remove(level).unwrap_or_default();
            PerformanceRow::new(level.display_name(), calculate_metrics(items))
        })
        .collect()
}

/// Dispatch to the pivot for `dimension`.
pub fn performance_by<'a, I>(dimension: Dimension, records: I) -> Vec<PerformanceRow>
where
    I: IntoIterator<Item = &'a BenchmarkResult>,
{
    match dimension {
        Dimension::Llm => performance_by_llm(records),
        Dimension::Language => performance_by_language(records),
        Dimension::Prompt => performance_by_prompt(records),
        Dimension::Complexity => performance_by_complexity(records),
    }
}

/// One cell per (model, language) pair observed in the data.
///
/// Models and languages are each taken in ascending raw-key order and
/// emitted model-major. Pairs with no records still get a cell.
pub fn heatmap<'a, I>(records: I) -> Vec<HeatmapCell>
where
    I: IntoIterator<Item = &'a BenchmarkResult>,
{
    let records: Vec<&BenchmarkResult> = records.into_iter().collect();
    let llms: BTreeSet<_> = records.iter().map(|r| &r.llm).collect();
    let languages: BTreeSet<_> = records.iter().map(|r| &r.target_language).collect();
    let mut pairs = group_by(records.iter().copied(), |r| (&r.llm, &r.target_language));

    let mut cells = Vec::with_capacity(llms.len() * languages.len());
    for llm in &llms {
        for language in &languages {
            let items = pairs.remove(&(*llm, *language)).unwrap_or_default();
            let summary = calculate_metrics(items);
            if summary.total_translations == 0 {
                trace!(llm = %llm, language = %language, "empty heatmap cell");
            }
            cells.push(HeatmapCell {
                llm: llm.display_name(),
                language: language.display_name(),
                value: summary.test_pass_rate,
                count: summary.total_translations,
            });
        }
    }
    cells
}
