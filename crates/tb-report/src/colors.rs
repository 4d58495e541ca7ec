//! Color classes and chart palette.

/// Rates at or above this are "good".
pub const GOOD_THRESHOLD: f64 = 60.0;
/// Rates at or above this (and below [`GOOD_THRESHOLD`]) are "fair".
pub const FAIR_THRESHOLD: f64 = 30.0;

/// Series colors for the four outcome rates, in
/// compile-fail, runtime-fail, test-fail, test-pass order.
pub const RATE_SERIES_COLORS: [&str; 4] = ["#ef4444", "#f97316", "#eab308", "#22c55e"];

/// Bar color for the log-scaled cyclomatic-complexity delta.
pub const DELTA_CC_COLOR: &str = "#6366f1";

/// Line color for the lines-of-code delta.
pub const DELTA_LOC_COLOR: &str = "#f59e0b";

/// Tailwind text class for a success percentage.
pub fn success_text_class(value: f64) -> &'static str {
    if value >= GOOD_THRESHOLD {
        "text-green-600"
    } else if value >= FAIR_THRESHOLD {
        "text-yellow-600"
    } else {
        "text-red-600"
    }
}

/// Tailwind background class for a success percentage.
pub fn success_bg_class(value: f64) -> &'static str {
    if value >= GOOD_THRESHOLD {
        "bg-green-100"
    } else if value >= FAIR_THRESHOLD {
        "bg-yellow-100"
    } else {
        "bg-red-100"
    }
}
