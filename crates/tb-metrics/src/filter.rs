//! Record predicates against a [`Filters`] selection.

use tb_common::{BenchmarkResult, Filters, Prompt, Selection, StaticMetric};

/// Whether a benchmark result satisfies every pinned filter dimension.
pub fn result_matches(record: &BenchmarkResult, filters: &Filters) -> bool {
    filters.language.admits(&record.target_language)
        && filters.llm.admits(&record.llm)
        && filters.prompt.admits(&record.prompt)
        && filters.complexity.admits(&record.complexity)
}

/// Whether a static-metric row is consistent with the filters.
///
/// Unlike [`result_matches`], a row whose own dimension is `All` is a roll-up
/// across that dimension and is consistent with any pinned value.
pub fn metric_matches(metric: &StaticMetric, filters: &Filters) -> bool {
    rollup_admits(&filters.language, &metric.language, |a, b| a == b)
        && rollup_admits(&filters.llm, &metric.llm, |a, b| a == b)
        && rollup_admits(&filters.prompt, &metric.prompt, Prompt::eq_ignore_case)
        && rollup_admits(&filters.complexity, &metric.complexity, |a, b| a == b)
}

fn rollup_admits<T>(filter: &Selection<T>, value: &Selection<T>, eq: impl Fn(&T, &T) -> bool) -> bool {
    match (filter, value) {
        (Selection::All, _) | (_, Selection::All) => true,
        (Selection::Specific(pinned), Selection::Specific(own)) => eq(own, pinned),
    }
}

/// Benchmark results matching `filters`, in input order.
pub fn filter_results<'a>(records: &'a [BenchmarkResult], filters: &Filters) -> Vec<&'a BenchmarkResult> {
    records
        .iter()
        .filter(|r| result_matches(r, filters))
        .collect()
}

/// Static-metric rows consistent with `filters`, in input order.
pub fn filter_static_metrics<'a>(metrics: &'a [StaticMetric], filters: &Filters) -> Vec<&'a StaticMetric> {
    metrics
        .iter()
        .filter(|m| metric_matches(m, filters))
        .collect()
}
