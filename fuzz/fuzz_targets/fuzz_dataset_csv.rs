//! Fuzz target for CSV dataset parsing.
//!
//! Tests that CSV parsing of both record shapes handles arbitrary input
//! without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tb_cli::dataset::parse_csv;
use tb_common::{BenchmarkResult, Filters, StaticMetric};

fuzz_target!(|data: &[u8]| {
    if let Ok(results) = parse_csv::<BenchmarkResult>(data) {
        let filtered = tb_metrics::filter_results(&results, &Filters::all());
        let _ = tb_metrics::performance_by_complexity(filtered);
    }
    let _ = parse_csv::<StaticMetric>(data);
});
