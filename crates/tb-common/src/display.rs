//! Display names for raw categorical keys.
//!
//! Presentation-only lookup tables. Aggregation code asks a key for its
//! [`DisplayName`] and never inspects the labels themselves.

use crate::categories::{Complexity, Language, Llm, Prompt};

const LLM_NAMES: &[(&str, &str)] = &[
    ("qwen2.5-coder_32b", "Qwen2.5-Coder 32B"),
    ("qwen2.5_32b", "Qwen2.5 32B"),
    ("qwen2.5-coder", "Qwen2.5-Coder 7B"),
    ("deepseek-coder-v2", "DeepSeek-Coder-V2 16B"),
    ("deepseek-coder_33b", "DeepSeek-Coder 33B"),
    ("llama3.1_70b", "Llama3.1 70B"),
    ("llama3.1", "Llama3.1 8B"),
];

const PROMPT_NAMES: &[(&str, &str)] = &[
    ("standard zero-shot", "Standard Zero-Shot"),
    ("curated zero-shot", "Curated Zero-Shot"),
    ("chain-of-thought", "Chain-of-Thought"),
];

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(raw, _)| *raw == key)
        .map(|(_, label)| *label)
}

/// Human label for a model identifier; unknown identifiers pass through.
pub fn format_llm_name(name: &str) -> String {
    lookup(LLM_NAMES, name).unwrap_or(name).to_string()
}

/// Human label for a prompt strategy; unknown strategies pass through.
pub fn format_prompt_name(name: &str) -> String {
    lookup(PROMPT_NAMES, name).unwrap_or(name).to_string()
}

/// Uppercase the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A categorical key with a human-readable label.
pub trait DisplayName {
    fn display_name(&self) -> String;
}

impl<T: DisplayName + ?Sized> DisplayName for &T {
    fn display_name(&self) -> String {
        (**self).display_name()
    }
}

impl DisplayName for Llm {
    fn display_name(&self) -> String {
        format_llm_name(self.as_str())
    }
}

impl DisplayName for Prompt {
    fn display_name(&self) -> String {
        format_prompt_name(self.as_str())
    }
}

impl DisplayName for Language {
    fn display_name(&self) -> String {
        capitalize(self.as_str())
    }
}

impl DisplayName for Complexity {
    fn display_name(&self) -> String {
        capitalize(self.name())
    }
}
