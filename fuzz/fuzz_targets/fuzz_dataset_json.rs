//! Fuzz target for JSON dataset parsing.
//!
//! Parses arbitrary bytes as both record shapes; anything that parses is
//! pushed through the metrics pipeline, which must not panic either.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tb_cli::dataset::parse_json;
use tb_common::{BenchmarkResult, Filters, StaticMetric};

fuzz_target!(|data: &[u8]| {
    if let Ok(results) = parse_json::<BenchmarkResult>(data) {
        let _ = tb_metrics::calculate_metrics(&results);
        let _ = tb_metrics::heatmap(&results);
    }
    if let Ok(metrics) = parse_json::<StaticMetric>(data) {
        for dimension in tb_common::Dimension::all() {
            let _ = tb_metrics::variation_by(*dimension, &metrics, &Filters::all());
        }
    }
});
