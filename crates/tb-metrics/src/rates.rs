//! Pass/fail rate calculation over a collection of benchmark results.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tb_common::BenchmarkResult;

/// Counts and outcome rates for a set of translation attempts.
///
/// The four rates are computed independently and are not forced to sum to
/// 100: a record that fails to compile but also reports a runtime error is
/// counted in both.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSummary {
    pub total_translations: usize,
    pub unique_problems: usize,
    /// Percentage with `compiles == false`.
    pub compile_fail_rate: f64,
    /// Percentage with `runtime_error == true`.
    pub runtime_fail_rate: f64,
    /// Percentage that compiled and ran cleanly but failed tests.
    pub test_fail_rate: f64,
    /// Percentage with `passes_tests == true`.
    pub test_pass_rate: f64,
}

/// Reduce `records` to a [`RateSummary`].
///
/// Rates are percentages of the record count rounded to two decimals. An
/// empty input yields an all-zero summary.
pub fn calculate_metrics<'a, I>(records: I) -> RateSummary
where
    I: IntoIterator<Item = &'a BenchmarkResult>,
{
    let mut total = 0usize;
    let mut compile_fail = 0usize;
    let mut runtime_fail = 0usize;
    let mut test_fail = 0usize;
    let mut test_pass = 0usize;
    let mut problems: HashSet<&str> = HashSet::new();

    for r in records {
        total += 1;
        if !r.compiles {
            compile_fail += 1;
        }
        if r.runtime_error {
            runtime_fail += 1;
        }
        if r.compiles && !r.runtime_error && !r.passes_tests {
            test_fail += 1;
        }
        if r.passes_tests {
            test_pass += 1;
        }
        problems.insert(r.problem.as_str());
    }

    if total == 0 {
        return RateSummary::default();
    }

    RateSummary {
        total_translations: total,
        unique_problems: problems.len(),
        compile_fail_rate: rate_pct(compile_fail, total),
        runtime_fail_rate: rate_pct(runtime_fail, total),
        test_fail_rate: rate_pct(test_fail, total),
        test_pass_rate: rate_pct(test_pass, total),
    }
}

/// `count / total` as a percentage rounded to two decimals. Zero when `total` is zero.
pub fn rate_pct(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(100.0 * count as f64 / total as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
