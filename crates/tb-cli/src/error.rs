//! Top-level CLI errors and their exit codes.

use crate::config::ConfigError;
use crate::dataset::DatasetError;
use crate::exit_codes::ExitCode;
use std::path::PathBuf;
use tb_report::ReportError;
use thiserror::Error;

/// Any failure a command can end with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Dashboard generation failed: {0}")]
    Report(#[from] ReportError),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigOutput(#[from] toml::ser::Error),

    #[error("I/O error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Stable exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Dataset(_) => ExitCode::DatasetError,
            CliError::Config(_) | CliError::Report(ReportError::InvalidConfig(_)) => {
                ExitCode::ConfigError
            }
            CliError::Write { .. } => ExitCode::IoError,
            CliError::Report(_) | CliError::Output(_) | CliError::ConfigOutput(_) => {
                ExitCode::InternalError
            }
        }
    }
}
