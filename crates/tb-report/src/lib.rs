//! HTML dashboard generator for TransBench results.
//!
//! Renders a single self-contained HTML file from benchmark results and the
//! precomputed static code-variation table.
//!
//! # Features
//!
//! - **Single-file output**: standalone HTML with CDN-loaded assets
//! - **CDN pinning**: all libraries use pinned versions with SRI hashes
//! - **Filter-aware**: every section is computed under the same filters
//!
//! # Sections
//!
//! - Overview: headline rate cards and selection coverage
//! - Performance: outcome rates per model, language, prompt and complexity
//! - Heatmap: test-pass rate for every model × language pair
//! - Code variation: ΔCC (log) and ΔSLoC from the static metrics table
//!
//! # Example
//!
//! ```no_run
//! use tb_common::Filters;
//! use tb_report::{ReportConfig, ReportGenerator};
//!
//! let generator = ReportGenerator::new(ReportConfig::default());
//! let html = generator.render(&[], &[], &Filters::all()).unwrap();
//! std::fs::write("dashboard.html", html).unwrap();
//! ```

pub mod colors;
pub mod config;
pub mod error;
pub mod generator;
pub mod sections;

pub use config::{CdnLibrary, ChartLayout, ReportConfig, ReportSections, ReportTheme};
pub use error::{ReportError, Result};
pub use generator::{DashboardData, DatasetInfo, ReportGenerator};
