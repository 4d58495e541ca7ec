//! Dataset loading.
//!
//! Benchmark results and static metrics are read from either a JSON array of
//! records or a CSV file whose header row carries the record field names.
//! The format is chosen by file extension.

use crate::config::compute_hash;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tb_common::{BenchmarkResult, StaticMetric};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("No {kind} dataset configured (pass {flag} or set it in config.toml)")]
    Missing {
        kind: &'static str,
        flag: &'static str,
    },

    #[error("I/O error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid CSV in {path}: {source}")]
    CsvError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Unsupported dataset format for {path} (expected .json or .csv)")]
    UnsupportedFormat { path: PathBuf },
}

/// On-disk dataset encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    /// Detect from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DatasetFormat::Json),
            "csv" => Some(DatasetFormat::Csv),
            _ => None,
        }
    }
}

/// Records read from one file, with provenance.
#[derive(Debug, Clone, Serialize)]
pub struct Loaded<T> {
    #[serde(skip)]
    pub records: Vec<T>,
    pub path: PathBuf,
    pub sha256: String,
    pub count: usize,
}

/// Parse a JSON array of records.
pub fn parse_json<T: DeserializeOwned>(content: &[u8]) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_slice(content)
}

/// Parse CSV with a header row; surrounding whitespace in fields is trimmed.
pub fn parse_csv<T: DeserializeOwned>(content: &[u8]) -> Result<Vec<T>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content)
        .deserialize()
        .collect()
}

fn load<T: DeserializeOwned>(path: &Path, kind: &'static str) -> Result<Loaded<T>, DatasetError> {
    let format = DatasetFormat::from_path(path).ok_or_else(|| DatasetError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read(path).map_err(|e| DatasetError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records: Vec<T> = match format {
        DatasetFormat::Json => parse_json(&content).map_err(|e| DatasetError::JsonError {
            path: path.to_path_buf(),
            source: e,
        })?,
        DatasetFormat::Csv => parse_csv(&content).map_err(|e| DatasetError::CsvError {
            path: path.to_path_buf(),
            source: e,
        })?,
    };

    info!(
        kind,
        path = %path.display(),
        records = records.len(),
        "Dataset loaded"
    );

    Ok(Loaded {
        count: records.len(),
        sha256: compute_hash(&content),
        path: path.to_path_buf(),
        records,
    })
}

/// Load benchmark results.
pub fn load_results(path: &Path) -> Result<Loaded<BenchmarkResult>, DatasetError> {
    load(path, "results")
}

/// Load static metrics.
pub fn load_static_metrics(path: &Path) -> Result<Loaded<StaticMetric>, DatasetError> {
    load(path, "static_metrics")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_common::{Complexity, Selection};

    const RESULTS_CSV: &str = "\
target_language,llm,prompt,complexity,problem,compiles,runtime_error,passes_tests
rust,llama3.1,chain-of-thought,simple,p1,true,false,true
java, qwen2.5-coder ,standard zero-shot,complex,p2,false,false,false
";

    const METRICS_CSV: &str = "\
Language,LLM,Prompt,Complexity,DeltaCClog,MinDeltaCC,MaxDeltaCC,DeltaLOC,MinDeltaLOC,MaxDeltaLOC
all,all,all,moderate,0.42,-3,7,12.5,-20,48
rust,all,Chain-of-Thought,all,0.1,-1,2,3,-4,5
";

    #[test]
    fn test_format_detection() {
        assert_eq!(DatasetFormat::from_path(Path::new("a.json")), Some(DatasetFormat::Json));
        assert_eq!(DatasetFormat::from_path(Path::new("a.CSV")), Some(DatasetFormat::Csv));
        assert_eq!(DatasetFormat::from_path(Path::new("a.parquet")), None);
        assert_eq!(DatasetFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_parse_results_csv() {
        let rows: Vec<BenchmarkResult> = parse_csv(RESULTS_CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].passes_tests);
        assert_eq!(rows[1].llm.as_str(), "qwen2.5-coder");
        assert_eq!(rows[1].complexity, Complexity::Complex);
    }

    #[test]
    fn test_parse_static_metrics_csv() {
        let rows: Vec<StaticMetric> = parse_csv(METRICS_CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].language.is_all());
        assert_eq!(rows[0].complexity, Selection::Specific(Complexity::Moderate));
        assert_eq!(rows[0].delta_loc, 12.5);
        assert!(rows[1].complexity.is_all());
    }

    #[test]
    fn test_parse_json_array() {
        let json = r#"[{"target_language":"rust","llm":"llama3.1","prompt":"chain-of-thought",
            "complexity":"moderate","problem":"p1","compiles":true,"runtime_error":true,
            "passes_tests":false}]"#;
        let rows: Vec<BenchmarkResult> = parse_json(json.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].runtime_error);
    }

    #[test]
    fn test_bad_boolean_rejected() {
        let csv = "target_language,llm,prompt,complexity,problem,compiles,runtime_error,passes_tests\n\
                   rust,llama3.1,cot,simple,p1,maybe,false,true\n";
        assert!(parse_csv::<BenchmarkResult>(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_from_disk_records_hash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, RESULTS_CSV).unwrap();
        let loaded = load_results(&path).unwrap();
        assert_eq!(loaded.count, 2);
        assert_eq!(loaded.sha256, compute_hash(RESULTS_CSV.as_bytes()));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let txt = dir.path().join("results.txt");
        std::fs::write(&txt, "x").unwrap();
        assert!(matches!(
            load_results(&txt),
            Err(DatasetError::UnsupportedFormat { .. })
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_results(&missing),
            Err(DatasetError::IoError { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{not json").unwrap();
        let err = load_static_metrics(&bad).unwrap_err();
        assert!(matches!(err, DatasetError::JsonError { .. }));
        assert!(err.to_string().contains("bad.json"));
    }
}
