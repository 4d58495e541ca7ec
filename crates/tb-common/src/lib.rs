//! TransBench common types and errors.
//!
//! This crate provides the shapes shared by every TransBench crate:
//! - Benchmark and static-metric record types (the loader contract)
//! - Categorical dimensions (language, model, prompt strategy, complexity)
//! - The `Selection` type that replaces the `"all"` sentinel
//! - Display-name lookup tables for presentation
//! - Output format specifications

pub mod categories;
pub mod display;
pub mod error;
pub mod output;
pub mod record;
pub mod selection;

pub use categories::{Complexity, Dimension, Language, Llm, Prompt};
pub use display::{capitalize, format_llm_name, format_prompt_name, DisplayName};
pub use error::{Error, Result};
pub use output::OutputFormat;
pub use record::{BenchmarkResult, Filters, StaticMetric};
pub use selection::Selection;

/// Schema version for serialized TransBench payloads.
pub const SCHEMA_VERSION: &str = "1.0.0";
