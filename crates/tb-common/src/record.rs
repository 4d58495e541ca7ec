//! Benchmark and static-metric records.
//!
//! Field names on the wire are the contract with whatever produced the
//! datasets and must not change: benchmark results use snake_case, static
//! metric rows use the column names of the precomputed table.

use crate::categories::{Complexity, Language, Llm, Prompt};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

/// One LLM-generated translation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub target_language: Language,
    pub llm: Llm,
    pub prompt: Prompt,
    pub complexity: Complexity,
    /// Source problem identifier.
    pub problem: String,
    pub compiles: bool,
    pub runtime_error: bool,
    pub passes_tests: bool,
}

/// One precomputed row of code-metric deltas over a dimension combination.
///
/// A dimension set to [`Selection::All`] means the row aggregates across it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticMetric {
    #[serde(rename = "Language")]
    pub language: Selection<Language>,
    #[serde(rename = "LLM")]
    pub llm: Selection<Llm>,
    #[serde(rename = "Prompt")]
    pub prompt: Selection<Prompt>,
    #[serde(rename = "Complexity")]
    pub complexity: Selection<Complexity>,
    /// Log-scaled cyclomatic-complexity delta.
    #[serde(rename = "DeltaCClog")]
    pub delta_cc_log: f64,
    #[serde(rename = "MinDeltaCC")]
    pub min_delta_cc: f64,
    #[serde(rename = "MaxDeltaCC")]
    pub max_delta_cc: f64,
    /// Lines-of-code delta.
    #[serde(rename = "DeltaLOC")]
    pub delta_loc: f64,
    #[serde(rename = "MinDeltaLOC")]
    pub min_delta_loc: f64,
    #[serde(rename = "MaxDeltaLOC")]
    pub max_delta_loc: f64,
}

/// Current filter selection across the four dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    pub language: Selection<Language>,
    pub llm: Selection<Llm>,
    pub prompt: Selection<Prompt>,
    pub complexity: Selection<Complexity>,
}

impl Filters {
    /// No restriction on any dimension.
    pub fn all() -> Self {
        Self::default()
    }

    /// Pin the target language.
    pub fn with_language(mut self, language: impl Into<Language>) -> Self {
        self.language = Selection::Specific(language.into());
        self
    }

    /// Pin the model.
    pub fn with_llm(mut self, llm: impl Into<Llm>) -> Self {
        self.llm = Selection::Specific(llm.into());
        self
    }

    /// Pin the prompt strategy.
    pub fn with_prompt(mut self, prompt: impl Into<Prompt>) -> Self {
        self.prompt = Selection::Specific(prompt.into());
        self
    }

    /// Pin the complexity level.
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Selection::Specific(complexity);
        self
    }

    /// True when no dimension is pinned.
    pub fn is_unfiltered(&self) -> bool {
        self.language.is_all() && self.llm.is_all() && self.prompt.is_all() && self.complexity.is_all()
    }
}
