//! Categorical dimensions of a benchmark record.
//!
//! Complexity is a closed set and is modeled as an enum. Target languages,
//! model identifiers, and prompt strategies are open: datasets may carry
//! values outside the canonical lists below, so they are string newtypes
//! with a fixed canonical enumeration used by the variation lookups.

use crate::error::Error;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Problem complexity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    /// All levels in canonical order.
    pub fn all() -> &'static [Complexity] {
        &[Complexity::Simple, Complexity::Moderate, Complexity::Complex]
    }

    /// Raw key as it appears in datasets.
    pub fn name(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Complexity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Complexity::Simple),
            "moderate" => Ok(Complexity::Moderate),
            "complex" => Ok(Complexity::Complex),
            _ => Err(Error::unknown("complexity", s)),
        }
    }
}

/// Translation target language.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(pub String);

impl Language {
    /// Languages covered by the precomputed static metrics.
    pub fn canonical() -> Vec<Language> {
        ["python", "java", "rust"]
            .into_iter()
            .map(Language::from)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Model identifier, e.g. `qwen2.5-coder_32b`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Llm(pub String);

impl Llm {
    /// Models covered by the precomputed static metrics, in chart order.
    pub fn canonical() -> Vec<Llm> {
        [
            "llama3.1_70b",
            "llama3.1",
            "qwen2.5-coder_32b",
            "qwen2.5_32b",
            "qwen2.5-coder",
            "deepseek-coder-v2",
            "deepseek-coder_33b",
        ]
        .into_iter()
        .map(Llm::from)
        .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Prompting strategy identifier, e.g. `chain-of-thought`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prompt(pub String);

impl Prompt {
    /// Strategies covered by the precomputed static metrics.
    pub fn canonical() -> Vec<Prompt> {
        ["standard zero-shot", "curated zero-shot", "chain-of-thought"]
            .into_iter()
            .map(Prompt::from)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Static-metric tables spell strategies with inconsistent casing
    /// ("Chain-of-Thought"), so they are compared ASCII case-insensitively.
    pub fn eq_ignore_case(&self, other: &Prompt) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

macro_rules! impl_string_id {
    ($($ty:ident),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                $ty(s.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                $ty(s)
            }
        }

        impl FromStr for $ty {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($ty(s.trim().to_string()))
            }
        }
    )*};
}

impl_string_id!(Language, Llm, Prompt);

/// A breakdown dimension for pivots and variation lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Model identifier.
    Llm,
    /// Target language.
    Language,
    /// Prompting strategy.
    Prompt,
    /// Problem complexity.
    Complexity,
}

impl Dimension {
    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Llm,
            Dimension::Language,
            Dimension::Prompt,
            Dimension::Complexity,
        ]
    }

    /// Human-readable axis label.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Llm => "Model",
            Dimension::Language => "Target Language",
            Dimension::Prompt => "Prompt Strategy",
            Dimension::Complexity => "Complexity",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Llm => write!(f, "llm"),
            Dimension::Language => write!(f, "language"),
            Dimension::Prompt => write!(f, "prompt"),
            Dimension::Complexity => write!(f, "complexity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_canonical_order() {
        assert_eq!(
            Complexity::all(),
            &[Complexity::Simple, Complexity::Moderate, Complexity::Complex]
        );
        assert!(Complexity::Simple < Complexity::Complex);
    }

    #[test]
    fn test_complexity_parse() {
        assert_eq!("Moderate".parse::<Complexity>().unwrap(), Complexity::Moderate);
        assert!("all".parse::<Complexity>().is_err());
    }

    #[test]
    fn test_complexity_serde_lowercase() {
        let json = serde_json::to_string(&Complexity::Complex).unwrap();
        assert_eq!(json, "\"complex\"");
    }

    #[test]
    fn test_canonical_sizes() {
        assert_eq!(Language::canonical().len(), 3);
        assert_eq!(Prompt::canonical().len(), 3);
        assert_eq!(Llm::canonical().len(), 7);
        assert_eq!(Llm::canonical()[0].as_str(), "llama3.1_70b");
    }

    #[test]
    fn test_prompt_case_insensitive() {
        let a = Prompt::from("Chain-of-Thought");
        let b = Prompt::from("chain-of-thought");
        assert_ne!(a, b);
        assert!(a.eq_ignore_case(&b));
    }

    #[test]
    fn test_string_ids_are_transparent() {
        let llm = Llm::from("llama3.1");
        assert_eq!(serde_json::to_string(&llm).unwrap(), "\"llama3.1\"");
        assert_eq!(llm.to_string(), "llama3.1");
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(Dimension::Llm.to_string(), "llm");
        assert_eq!(Dimension::all().len(), 4);
    }
}
