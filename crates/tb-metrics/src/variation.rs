//! Code-variation lookups against the precomputed static-metric table.
//!
//! Each lookup breaks the table down along one dimension. The other three
//! dimensions select which pre-aggregated rows apply: a row is in scope when
//! each of them equals the current filter selection exactly, with `All`
//! matching only the roll-up rows. The breakdown dimension itself must be
//! concrete. Candidates are the pinned filter value or the canonical list;
//! a candidate without a row is dropped.

use serde::{Deserialize, Serialize};
use tb_common::{
    Complexity, Dimension, DisplayName, Filters, Language, Llm, Prompt, Selection, StaticMetric,
};
use tracing::trace;

/// One chart row of code-metric deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationData {
    pub name: String,
    #[serde(rename = "deltaCClog")]
    pub delta_cc_log: f64,
    #[serde(rename = "minDeltaCC")]
    pub min_delta_cc: f64,
    #[serde(rename = "maxDeltaCC")]
    pub max_delta_cc: f64,
    #[serde(rename = "deltaLOC")]
    pub delta_loc: f64,
    #[serde(rename = "minDeltaLOC")]
    pub min_delta_loc: f64,
    #[serde(rename = "maxDeltaLOC")]
    pub max_delta_loc: f64,
}

impl VariationData {
    fn from_metric(name: String, metric: &StaticMetric) -> Self {
        Self {
            name,
            delta_cc_log: metric.delta_cc_log,
            min_delta_cc: metric.min_delta_cc,
            max_delta_cc: metric.max_delta_cc,
            delta_loc: metric.delta_loc,
            min_delta_loc: metric.min_delta_loc,
            max_delta_loc: metric.max_delta_loc,
        }
    }
}

fn in_scope(metric: &StaticMetric, filters: &Filters, breakdown: Dimension) -> bool {
    (breakdown == Dimension::Language || metric.language == filters.language)
        && (breakdown == Dimension::Llm || metric.llm == filters.llm)
        && (breakdown == Dimension::Prompt || metric.prompt == filters.prompt)
        && (breakdown == Dimension::Complexity || metric.complexity == filters.complexity)
}

fn candidates<T: Clone>(selection: &Selection<T>, canonical: impl FnOnce() -> Vec<T>) -> Vec<T> {
    match selection {
        Selection::All => canonical(),
        Selection::Specific(value) => vec![value.clone()],
    }
}

fn lookup<'a, T, B, E>(
    metrics: &'a [StaticMetric],
    filters: &Filters,
    breakdown: Dimension,
    candidates: &[T],
    value_of: B,
    same: E,
) -> Vec<VariationData>
where
    T: DisplayName + std::fmt::Display + 'a,
    B: Fn(&'a StaticMetric) -> &'a Selection<T>,
    E: Fn(&T, &T) -> bool,
{
    let scoped: Vec<(&StaticMetric, &T)> = metrics
        .iter()
        .filter(|m| in_scope(m, filters, breakdown))
        .filter_map(|m| value_of(m).specific().map(|value| (m, value)))
        .collect();

    candidates
        .iter()
        .filter_map(|candidate| {
            let found = scoped
                .iter()
                .find(|(_, value)| same(*value, candidate))
                .map(|(metric, _)| VariationData::from_metric(candidate.display_name(), metric));
            if found.is_none() {
                trace!(dimension = %breakdown, candidate = %candidate, "no static-metric row");
            }
            found
        })
        .collect()
}

/// Variation per complexity level, in canonical order.
pub fn variation_by_complexity(metrics: &[StaticMetric], filters: &Filters) -> Vec<VariationData> {
    let levels = candidates(&filters.complexity, || Complexity::all().to_vec());
    lookup(
        metrics,
        filters,
        Dimension::Complexity,
        &levels,
        |m| &m.complexity,
        |a, b| a == b,
    )
}

/// Variation per target language, largest `deltaLOC` first.
pub fn variation_by_language(metrics: &[StaticMetric], filters: &Filters) -> Vec<VariationData> {
    let languages = candidates(&filters.language, Language::canonical);
    let mut rows = lookup(
        metrics,
        filters,
        Dimension::Language,
        &languages,
        |m| &m.language,
        |a, b| a == b,
    );
    rows.sort_by(|a, b| b.delta_loc.total_cmp(&a.delta_loc));
    rows
}

/// Variation per prompt strategy, in canonical order.
pub fn variation_by_prompt(metrics: &[StaticMetric], filters: &Filters) -> Vec<VariationData> {
    let prompts = candidates(&filters.prompt, Prompt::canonical);
    lookup(
        metrics,
        filters,
        Dimension::Prompt,
        &prompts,
        |m| &m.prompt,
        Prompt::eq_ignore_case,
    )
}

/// Variation per model, in canonical order.
pub fn variation_by_llm(metrics: &[StaticMetric], filters: &Filters) -> Vec<VariationData> {
    let llms = candidates(&filters.llm, Llm::canonical);
    lookup(
        metrics,
        filters,
        Dimension::Llm,
        &llms,
        |m| &m.llm,
        |a, b| a == b,
    )
}

/// Dispatch to the lookup for `dimension`.
pub fn variation_by(dimension: Dimension, metrics: &[StaticMetric], filters: &Filters) -> Vec<VariationData> {
    match dimension {
        Dimension::Llm => variation_by_llm(metrics, filters),
        Dimension::Language => variation_by_language(metrics, filters),
        Dimension::Prompt => variation_by_prompt(metrics, filters),
        Dimension::Complexity => variation_by_complexity(metrics, filters),
    }
}
