//! Property-based tests for the aggregation functions.
//!
//! Uses proptest to verify invariants hold across many random datasets.

use proptest::prelude::*;
use std::collections::BTreeSet;
use tb_common::{BenchmarkResult, Complexity, Filters, Language, Llm, Prompt, Selection, StaticMetric};
use tb_metrics::{
    calculate_metrics, filter_results, heatmap, performance_by_complexity,
    performance_by_language, performance_by_llm, performance_by_prompt, variation_by_complexity,
    variation_by_language, variation_by_llm, variation_by_prompt,
};

const LANGUAGES: &[&str] = &["python", "java", "rust", "go"];
const LLMS: &[&str] = &["llama3.1", "llama3.1_70b", "qwen2.5-coder", "deepseek-coder-v2"];
const PROMPTS: &[&str] = &["standard zero-shot", "curated zero-shot", "chain-of-thought"];

fn arb_complexity() -> impl Strategy<Value = Complexity> {
    prop_oneof![
        Just(Complexity::Simple),
        Just(Complexity::Moderate),
        Just(Complexity::Complex),
    ]
}

fn arb_result() -> impl Strategy<Value = BenchmarkResult> {
    (
        prop::sample::select(LANGUAGES),
        prop::sample::select(LLMS),
        prop::sample::select(PROMPTS),
        arb_complexity(),
        0u32..20,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(lang, llm, prompt, complexity, problem, compiles, runtime_error, passes_tests)| {
                BenchmarkResult {
                    target_language: Language::from(lang),
                    llm: Llm::from(llm),
                    prompt: Prompt::from(prompt),
                    complexity,
                    problem: format!("problem-{problem}"),
                    compiles,
                    runtime_error,
                    passes_tests,
                }
            },
        )
}

fn arb_selection<T: Clone + std::fmt::Debug + 'static>(values: Vec<T>) -> impl Strategy<Value = Selection<T>> {
    prop_oneof![
        Just(Selection::All),
        prop::sample::select(values).prop_map(Selection::Specific),
    ]
}

fn arb_filters() -> impl Strategy<Value = Filters> {
    (
        arb_selection(LANGUAGES.iter().map(|s| Language::from(*s)).collect()),
        arb_selection(LLMS.iter().map(|s| Llm::from(*s)).collect()),
        arb_selection(PROMPTS.iter().map(|s| Prompt::from(*s)).collect()),
        arb_selection(Complexity::all().to_vec()),
    )
        .prop_map(|(language, llm, prompt, complexity)| Filters {
            language,
            llm,
            prompt,
            complexity,
        })
}

fn arb_metric() -> impl Strategy<Value = StaticMetric> {
    (arb_filters(), -5.0..5.0f64, -50.0..50.0f64).prop_map(|(dims, cc, loc)| StaticMetric {
        language: dims.language,
        llm: dims.llm,
        prompt: dims.prompt,
        complexity: dims.complexity,
        delta_cc_log: cc,
        min_delta_cc: cc - 1.0,
        max_delta_cc: cc + 1.0,
        delta_loc: loc,
        min_delta_loc: loc - 10.0,
        max_delta_loc: loc + 10.0,
    })
}

fn in_range(rate: f64) -> bool {
    (0.0..=100.0).contains(&rate)
}

// ============================================================================
// Rate calculator
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every rate is a percentage.
    #[test]
    fn rates_are_percentages(records in prop::collection::vec(arb_result(), 1..200)) {
        let s = calculate_metrics(&records);
        prop_assert!(in_range(s.compile_fail_rate));
        prop_assert!(in_range(s.runtime_fail_rate));
        prop_assert!(in_range(s.test_fail_rate));
        prop_assert!(in_range(s.test_pass_rate));
        prop_assert_eq!(s.total_translations, records.len());
        prop_assert!(s.unique_problems <= records.len());
        prop_assert!(s.unique_problems >= 1);
    }

    /// Input order does not change the summary.
    #[test]
    fn rates_ignore_order(mut records in prop::collection::vec(arb_result(), 0..100)) {
        let forward = calculate_metrics(&records);
        records.reverse();
        prop_assert_eq!(forward, calculate_metrics(&records));
    }
}

// ============================================================================
// Pivots
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Complexity pivot always has the three levels in order.
    #[test]
    fn complexity_pivot_is_fixed(records in prop::collection::vec(arb_result(), 0..150)) {
        let rows = performance_by_complexity(&records);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        prop_assert_eq!(names, vec!["Simple", "Moderate", "Complex"]);
        prop_assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), records.len());
    }

    /// Data-derived pivots are ranked by test-pass rate and partition the input.
    #[test]
    fn ranked_pivots_are_sorted(records in prop::collection::vec(arb_result(), 0..150)) {
        for rows in [
            performance_by_llm(&records),
            performance_by_language(&records),
            performance_by_prompt(&records),
        ] {
            for pair in rows.windows(2) {
                prop_assert!(pair[0].test_pass_rate >= pair[1].test_pass_rate);
            }
            prop_assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), records.len());
            prop_assert!(rows.iter().all(|r| r.count > 0));
        }
    }

    /// Heatmap is the full cross product of observed models and languages.
    #[test]
    fn heatmap_is_cross_product(records in prop::collection::vec(arb_result(), 0..150)) {
        let llms: BTreeSet<_> = records.iter().map(|r| r.llm.clone()).collect();
        let languages: BTreeSet<_> = records.iter().map(|r| r.target_language.clone()).collect();
        let cells = heatmap(&records);
        prop_assert_eq!(cells.len(), llms.len() * languages.len());
        prop_assert_eq!(cells.iter().map(|c| c.count).sum::<usize>(), records.len());
        prop_assert!(cells.iter().all(|c| in_range(c.value)));
    }

    /// Filtering never mutates the input and only keeps matching records.
    #[test]
    fn filtering_is_non_destructive(
        records in prop::collection::vec(arb_result(), 0..100),
        filters in arb_filters(),
    ) {
        let snapshot = records.clone();
        let kept = filter_results(&records, &filters);
        prop_assert_eq!(&records, &snapshot);
        prop_assert!(kept.len() <= records.len());
        if let Selection::Specific(ref lang) = filters.language {
            prop_assert!(kept.iter().all(|r| &r.target_language == lang));
        }
        prop_assert_eq!(filter_results(&records, &filters), kept);
    }
}

// ============================================================================
// Variation lookups
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Pinned breakdown yields at most one row; unpinned at most the canonical size.
    #[test]
    fn variation_row_bounds(
        metrics in prop::collection::vec(arb_metric(), 0..80),
        filters in arb_filters(),
    ) {
        let complexity_cap = if filters.complexity.is_all() { 3 } else { 1 };
        prop_assert!(variation_by_complexity(&metrics, &filters).len() <= complexity_cap);

        let language_cap = if filters.language.is_all() { Language::canonical().len() } else { 1 };
        prop_assert!(variation_by_language(&metrics, &filters).len() <= language_cap);

        let prompt_cap = if filters.prompt.is_all() { Prompt::canonical().len() } else { 1 };
        prop_assert!(variation_by_prompt(&metrics, &filters).len() <= prompt_cap);

        let llm_cap = if filters.llm.is_all() { Llm::canonical().len() } else { 1 };
        prop_assert!(variation_by_llm(&metrics, &filters).len() <= llm_cap);
    }

    /// Language rows come out largest delta first.
    #[test]
    fn language_variation_sorted(
        metrics in prop::collection::vec(arb_metric(), 0..80),
        filters in arb_filters(),
    ) {
        let rows = variation_by_language(&metrics, &filters);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].delta_loc >= pair[1].delta_loc);
        }
    }

    /// Lookups are idempotent.
    #[test]
    fn variation_is_idempotent(
        metrics in prop::collection::vec(arb_metric(), 0..80),
        filters in arb_filters(),
    ) {
        prop_assert_eq!(
            variation_by_llm(&metrics, &filters),
            variation_by_llm(&metrics, &filters)
        );
    }
}
