//! Configuration loading for the transbench CLI.
//!
//! This module handles:
//! - Loading `config.toml` (dataset paths, default filters, dashboard settings)
//! - Config resolution order (CLI > env > XDG > defaults)
//! - Provenance (path and SHA-256 of the file the config came from)

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tb_common::Filters;
use tb_report::{ReportConfig, ReportError};
use thiserror::Error;
use tracing::debug;

/// Default XDG config directory name.
const CONFIG_DIR_NAME: &str = "transbench";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TRANSBENCH_CONFIG";

/// Errors that can occur during config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid TOML in config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dashboard settings: {0}")]
    Report(#[from] ReportError),
}

/// Default dataset locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Benchmark results file (`.json` or `.csv`).
    pub results: Option<PathBuf>,
    /// Static metrics file (`.json` or `.csv`).
    pub static_metrics: Option<PathBuf>,
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransbenchConfig {
    /// Default dataset paths.
    pub data: DataConfig,
    /// Default filters; CLI flags override them per dimension.
    pub filters: Filters,
    /// Dashboard settings.
    pub report: ReportConfig,
}

impl TransbenchConfig {
    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Where the resolved configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    /// `--config` flag.
    Flag,
    /// `TRANSBENCH_CONFIG` environment variable.
    Env,
    /// `$XDG_CONFIG_HOME/transbench/config.toml`.
    Xdg,
    /// Built-in defaults.
    Defaults,
}

/// Resolved configuration with provenance information.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    /// The loaded configuration.
    pub config: TransbenchConfig,
    /// Where it came from.
    pub source: ConfigSource,
    /// Path to the config file (None if using defaults).
    pub path: Option<PathBuf>,
    /// SHA-256 hash of the config file content (None if using defaults).
    pub hash: Option<String>,
}

impl ResolvedConfig {
    /// Built-in defaults.
    pub fn defaults() -> Self {
        ResolvedConfig {
            config: TransbenchConfig::default(),
            source: ConfigSource::Defaults,
            path: None,
            hash: None,
        }
    }

    /// Resolve a dataset path from the config file relative to its directory.
    pub fn dataset_path(&self, configured: &Path) -> PathBuf {
        match self.path.as_deref().and_then(Path::parent) {
            Some(dir) if configured.is_relative() => dir.join(configured),
            _ => configured.to_path_buf(),
        }
    }

    /// Configured results path, resolved.
    pub fn results_path(&self) -> Option<PathBuf> {
        self.config.data.results.as_deref().map(|p| self.dataset_path(p))
    }

    /// Configured static metrics path, resolved.
    pub fn static_metrics_path(&self) -> Option<PathBuf> {
        self.config
            .data
            .static_metrics
            .as_deref()
            .map(|p| self.dataset_path(p))
    }
}

/// Configuration resolution options.
#[derive(Debug, Default)]
pub struct ConfigOptions {
    /// Explicit config file (highest priority).
    pub config_path: Option<PathBuf>,
    /// Value of `TRANSBENCH_CONFIG`.
    pub env_path: Option<PathBuf>,
    /// XDG config home.
    pub config_home: Option<PathBuf>,
}

impl ConfigOptions {
    /// Capture env and XDG locations from the running process.
    pub fn from_env(config_path: Option<PathBuf>) -> Self {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")));
        ConfigOptions {
            config_path,
            env_path: std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from),
            config_home,
        }
    }
}

/// Load configuration with the standard resolution order.
///
/// Resolution order (highest to lowest priority):
/// 1. Explicit CLI flag
/// 2. Environment variable (TRANSBENCH_CONFIG)
/// 3. XDG config home (~/.config/transbench/config.toml)
/// 4. Built-in defaults
///
/// An explicitly named file must exist; the XDG file is optional.
pub fn load_config(options: &ConfigOptions) -> Result<ResolvedConfig, ConfigError> {
    let resolved = if let Some(path) = &options.config_path {
        load_from_file(path, ConfigSource::Flag)?
    } else if let Some(path) = &options.env_path {
        load_from_file(path, ConfigSource::Env)?
    } else {
        match options
            .config_home
            .as_ref()
            .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        {
            Some(path) if path.exists() => load_from_file(&path, ConfigSource::Xdg)?,
            _ => ResolvedConfig::defaults(),
        }
    };

    resolved.config.report.validate()?;
    debug!(
        source = ?resolved.source,
        path = ?resolved.path,
        "Configuration resolved"
    );
    Ok(resolved)
}

fn load_from_file(path: &Path, source: ConfigSource) -> Result<ResolvedConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let hash = compute_hash(content.as_bytes());

    let config = TransbenchConfig::from_toml(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(ResolvedConfig {
        config,
        source,
        path: Some(path.to_path_buf()),
        hash: Some(hash),
    })
}

/// Compute the SHA-256 hash of content as lowercase hex.
pub fn compute_hash(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_common::{Complexity, Language, Selection};

    /// Options pointing at a config home with no config files.
    /// This avoids race conditions from modifying environment variables.
    fn empty_options() -> ConfigOptions {
        ConfigOptions {
            config_path: None,
            env_path: None,
            config_home: Some(std::env::temp_dir().join("transbench-test-config-nonexistent")),
        }
    }

    fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_when_nothing_configured() {
        let resolved = load_config(&empty_options()).unwrap();
        assert_eq!(resolved.source, ConfigSource::Defaults);
        assert!(resolved.path.is_none());
        assert!(resolved.hash.is_none());
        assert!(resolved.config.filters.is_unfiltered());
    }

    #[test]
    fn test_compute_hash_is_sha256() {
        assert_eq!(
            compute_hash(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_parse_full_config() {
        let config = TransbenchConfig::from_toml(
            r#"
            [data]
            results = "data/results.csv"

            [filters]
            language = "rust"
            complexity = "all"

            [report]
            title = "Nightly"
            theme = "dark"

            [report.sections]
            heatmap = false
            "#,
        )
        .unwrap();
        assert_eq!(config.data.results, Some(PathBuf::from("data/results.csv")));
        assert_eq!(config.filters.language, Selection::Specific(Language::from("rust")));
        assert!(config.filters.complexity.is_all());
        assert_eq!(config.report.title.as_deref(), Some("Nightly"));
        assert!(!config.report.sections.heatmap);
        assert!(config.report.sections.overview);
    }

    #[test]
    fn test_invalid_complexity_filter_rejected() {
        let err = TransbenchConfig::from_toml("[filters]\ncomplexity = \"trivial\"\n").unwrap_err();
        assert!(err.to_string().contains("trivial"));
    }

    #[test]
    fn test_flag_beats_env_and_xdg() {
        let dir = tempfile::tempdir().unwrap();
        let flag = write_config(dir.path(), "flag.toml", "[filters]\nlanguage = \"rust\"\n");
        let env = write_config(dir.path(), "env.toml", "[filters]\nlanguage = \"java\"\n");
        let options = ConfigOptions {
            config_path: Some(flag.clone()),
            env_path: Some(env),
            config_home: None,
        };
        let resolved = load_config(&options).unwrap();
        assert_eq!(resolved.source, ConfigSource::Flag);
        assert_eq!(resolved.path, Some(flag));
        assert_eq!(resolved.hash.as_ref().map(String::len), Some(64));
    }

    #[test]
    fn test_env_beats_xdg() {
        let dir = tempfile::tempdir().unwrap();
        let env = write_config(dir.path(), "env.toml", "[filters]\ncomplexity = \"simple\"\n");
        let xdg_dir = dir.path().join(CONFIG_DIR_NAME);
        std::fs::create_dir_all(&xdg_dir).unwrap();
        write_config(&xdg_dir, CONFIG_FILE_NAME, "");
        let options = ConfigOptions {
            config_path: None,
            env_path: Some(env),
            config_home: Some(dir.path().to_path_buf()),
        };
        let resolved = load_config(&options).unwrap();
        assert_eq!(resolved.source, ConfigSource::Env);
        assert_eq!(
            resolved.config.filters.complexity,
            Selection::Specific(Complexity::Simple)
        );
    }

    #[test]
    fn test_xdg_file_used_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let xdg_dir = dir.path().join(CONFIG_DIR_NAME);
        std::fs::create_dir_all(&xdg_dir).unwrap();
        write_config(&xdg_dir, CONFIG_FILE_NAME, "[data]\nresults = \"r.json\"\n");
        let options = ConfigOptions {
            config_home: Some(dir.path().to_path_buf()),
            ..ConfigOptions::default()
        };
        let resolved = load_config(&options).unwrap();
        assert_eq!(resolved.source, ConfigSource::Xdg);
        assert_eq!(resolved.results_path(), Some(xdg_dir.join("r.json")));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let options = ConfigOptions {
            config_path: Some(PathBuf::from("/nonexistent/transbench.toml")),
            ..ConfigOptions::default()
        };
        assert!(matches!(
            load_config(&options),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_report_settings_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "bad.toml",
            "[report.sections]\noverview = false\nperformance = false\nheatmap = false\nvariation = false\n",
        );
        let options = ConfigOptions {
            config_path: Some(path),
            ..ConfigOptions::default()
        };
        assert!(matches!(load_config(&options), Err(ConfigError::Report(_))));
    }

    #[test]
    fn test_absolute_dataset_path_kept() {
        let mut resolved = ResolvedConfig::defaults();
        resolved.path = Some(PathBuf::from("/etc/transbench/config.toml"));
        assert_eq!(
            resolved.dataset_path(Path::new("/data/r.csv")),
            PathBuf::from("/data/r.csv")
        );
        assert_eq!(
            resolved.dataset_path(Path::new("r.csv")),
            PathBuf::from("/etc/transbench/r.csv")
        );
    }
}
