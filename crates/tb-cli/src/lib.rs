//! TransBench CLI library.
//!
//! The `transbench` binary is a thin clap front end over these modules:
//! - `config`: `config.toml` resolution (flag > env > XDG > defaults)
//! - `dataset`: JSON/CSV loading of results and static metrics
//! - `output`: JSON envelope, Markdown and one-line renderings
//! - `logging`: stderr logging in human or JSONL form
//! - `exit_codes`: the stable exit code contract

pub mod config;
pub mod dataset;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod output;

pub use error::CliError;
pub use exit_codes::ExitCode;
