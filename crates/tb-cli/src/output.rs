//! Command output rendering.
//!
//! Every query command renders to one of three formats: a JSON envelope
//! (`schema_version`, `command`, `filters`, `data`), Markdown tables, or a
//! single summary line.

use crate::config::ResolvedConfig;
use crate::error::CliError;
use serde::Serialize;
use tb_common::{Dimension, Filters, OutputFormat, SCHEMA_VERSION};
use tb_metrics::{HeatmapCell, PerformanceRow, RateSummary, VariationData};

/// JSON wrapper shared by all commands.
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: Serialize> {
    pub schema_version: &'static str,
    pub command: &'a str,
    pub filters: &'a Filters,
    pub data: T,
}

fn json<T: Serialize>(command: &str, filters: &Filters, data: T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Envelope {
        schema_version: SCHEMA_VERSION,
        command,
        filters,
        data,
    })
}

fn md_table(headers: &[&str], rows: impl IntoIterator<Item = Vec<String>>) -> String {
    let mut out = format!("| {} |\n", headers.join(" | "));
    let align: Vec<&str> = headers
        .iter()
        .enumerate()
        .map(|(i, _)| if i == 0 { "---" } else { "---:" })
        .collect();
    out.push_str(&format!("| {} |\n", align.join(" | ")));
    for row in rows {
        out.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    out
}

fn pct(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Markdown line describing the active filters.
fn md_filters(filters: &Filters) -> String {
    format!(
        "_Filters: language={}, llm={}, prompt={}, complexity={}_\n",
        filters.language, filters.llm, filters.prompt, filters.complexity
    )
}

/// Render `summary`.
pub fn render_summary(
    format: OutputFormat,
    filters: &Filters,
    summary: &RateSummary,
) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Json => json("summary", filters, summary)?,
        OutputFormat::Md => {
            let mut out = String::from("## Summary\n\n");
            out.push_str(&md_filters(filters));
            out.push('\n');
            out.push_str(&md_table(
                &["Metric", "Value"],
                [
                    vec!["Total Translations".to_string(), summary.total_translations.to_string()],
                    vec!["Unique Problems".to_string(), summary.unique_problems.to_string()],
                    vec!["Compile Failures".to_string(), pct(summary.compile_fail_rate)],
                    vec!["Runtime Failures".to_string(), pct(summary.runtime_fail_rate)],
                    vec!["Test Failures".to_string(), pct(summary.test_fail_rate)],
                    vec!["Tests Passed".to_string(), pct(summary.test_pass_rate)],
                ],
            ));
            out
        }
        OutputFormat::Summary => format!(
            "{} translations ({} problems): {} pass, {} compile fail, {} runtime fail, {} test fail",
            summary.total_translations,
            summary.unique_problems,
            pct(summary.test_pass_rate),
            pct(summary.compile_fail_rate),
            pct(summary.runtime_fail_rate),
            pct(summary.test_fail_rate),
        ),
    })
}

#[derive(Serialize)]
struct PivotData<'a> {
    by: Dimension,
    rows: &'a [PerformanceRow],
}

/// Render `pivot --by <dimension>`.
pub fn render_pivot(
    format: OutputFormat,
    filters: &Filters,
    by: Dimension,
    rows: &[PerformanceRow],
) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Json => json("pivot", filters, PivotData { by, rows })?,
        OutputFormat::Md => {
            let mut out = format!("## Performance by {}\n\n", by.label());
            out.push_str(&md_filters(filters));
            out.push('\n');
            out.push_str(&md_table(
                &[by.label(), "Compile Fail", "Runtime Fail", "Test Fail", "Test Pass", "Count"],
                rows.iter().map(|r| {
                    vec![
                        r.name.clone(),
                        pct(r.compile_fail_rate),
                        pct(r.runtime_fail_rate),
                        pct(r.test_fail_rate),
                        pct(r.test_pass_rate),
                        r.count.to_string(),
                    ]
                }),
            ));
            out
        }
        OutputFormat::Summary => {
            let best = rows
                .iter()
                .filter(|r| r.count > 0)
                .max_by(|a, b| a.test_pass_rate.total_cmp(&b.test_pass_rate));
            match best {
                Some(best) => format!(
                    "{} {} groups; best: {} ({} pass, n={})",
                    rows.len(),
                    by,
                    best.name,
                    pct(best.test_pass_rate),
                    best.count
                ),
                None => format!("{} {} groups; no translations", rows.len(), by),
            }
        }
    })
}

/// Render `heatmap`.
pub fn render_heatmap(
    format: OutputFormat,
    filters: &Filters,
    cells: &[HeatmapCell],
) -> serde_json::Result<String> {
    let mut llms: Vec<&str> = Vec::new();
    let mut languages: Vec<&str> = Vec::new();
    for cell in cells {
        if !llms.contains(&cell.llm.as_str()) {
            llms.push(&cell.llm);
        }
        if !languages.contains(&cell.language.as_str()) {
            languages.push(&cell.language);
        }
    }

    Ok(match format {
        OutputFormat::Json => json("heatmap", filters, cells)?,
        OutputFormat::Md => {
            let mut out = String::from("## Test Pass Rate: Model × Language\n\n");
            out.push_str(&md_filters(filters));
            out.push('\n');
            let mut headers = vec!["Model"];
            headers.extend(languages.iter().copied());
            out.push_str(&md_table(
                &headers,
                cells.chunks(languages.len().max(1)).map(|row| {
                    let mut cols = vec![row.first().map(|c| c.llm.clone()).unwrap_or_default()];
                    cols.extend(row.iter().map(|c| {
                        if c.count == 0 {
                            "-".to_string()
                        } else {
                            pct(c.value)
                        }
                    }));
                    cols
                }),
            ));
            out
        }
        OutputFormat::Summary => {
            let best = cells
                .iter()
                .filter(|c| c.count > 0)
                .max_by(|a, b| a.value.total_cmp(&b.value));
            match best {
                Some(best) => format!(
                    "{} models × {} languages; best: {} / {} ({} pass)",
                    llms.len(),
                    languages.len(),
                    best.llm,
                    best.language,
                    pct(best.value)
                ),
                None => "0 models × 0 languages".to_string(),
            }
        }
    })
}

#[derive(Serialize)]
struct VariationPayload<'a> {
    by: Dimension,
    rows: &'a [VariationData],
}

/// Render `variation --by <dimension>`.
pub fn render_variation(
    format: OutputFormat,
    filters: &Filters,
    by: Dimension,
    rows: &[VariationData],
) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Json => json("variation", filters, VariationPayload { by, rows })?,
        OutputFormat::Md => {
            let mut out = format!("## Code Variation by {}\n\n", by.label());
            out.push_str(&md_filters(filters));
            out.push('\n');
            out.push_str(&md_table(
                &[by.label(), "ΔCC (log)", "ΔCC range", "ΔSLoC", "ΔSLoC range"],
                rows.iter().map(|r| {
                    vec![
                        r.name.clone(),
                        format!("{:.2}", r.delta_cc_log),
                        format!("[{}, {}]", r.min_delta_cc, r.max_delta_cc),
                        format!("{:.2}", r.delta_loc),
                        format!("[{}, {}]", r.min_delta_loc, r.max_delta_loc),
                    ]
                }),
            ));
            out
        }
        OutputFormat::Summary => {
            let largest = rows
                .iter()
                .max_by(|a, b| a.delta_loc.total_cmp(&b.delta_loc));
            match largest {
                Some(row) => format!(
                    "{} rows by {}; largest ΔSLoC: {} ({:.2})",
                    rows.len(),
                    by,
                    row.name,
                    row.delta_loc
                ),
                None => format!("0 rows by {}", by),
            }
        }
    })
}

/// Acknowledgement printed after writing a dashboard.
#[derive(Debug, Serialize)]
pub struct ReportWritten {
    pub path: String,
    pub bytes: usize,
    pub report_id: String,
}

/// Render the `report` acknowledgement.
pub fn render_report(
    format: OutputFormat,
    filters: &Filters,
    written: &ReportWritten,
) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Json => json("report", filters, written)?,
        OutputFormat::Md => format!(
            "## Dashboard\n\n{}\nWrote `{}` ({} bytes, id `{}`)\n",
            md_filters(filters),
            written.path,
            written.bytes,
            written.report_id
        ),
        OutputFormat::Summary => format!("wrote {} ({} bytes)", written.path, written.bytes),
    })
}

/// Render `config show`.
pub fn render_config(
    format: OutputFormat,
    filters: &Filters,
    resolved: &ResolvedConfig,
) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Json => json("config", filters, resolved)?,
        OutputFormat::Md => {
            let source = match &resolved.path {
                Some(path) => format!("`{}` ({:?})", path.display(), resolved.source),
                None => "built-in defaults".to_string(),
            };
            format!(
                "## Configuration\n\nSource: {}\n\n```toml\n{}```\n",
                source,
                toml::to_string_pretty(&resolved.config)?
            )
        }
        OutputFormat::Summary => match (&resolved.path, &resolved.hash) {
            (Some(path), Some(hash)) => format!("config {} sha256:{}", path.display(), hash),
            _ => "config: built-in defaults".to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, pass: f64, count: usize) -> PerformanceRow {
        PerformanceRow {
            name: name.to_string(),
            compile_fail_rate: 10.0,
            runtime_fail_rate: 0.0,
            test_fail_rate: 100.0 - 10.0 - pass,
            test_pass_rate: pass,
            count,
        }
    }

    #[test]
    fn test_summary_json_envelope() {
        let summary = RateSummary::default();
        let out = render_summary(OutputFormat::Json, &Filters::all(), &summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["schema_version"], SCHEMA_VERSION);
        assert_eq!(value["command"], "summary");
        assert_eq!(value["filters"]["language"], "all");
        assert_eq!(value["data"]["totalTranslations"], 0);
    }

    #[test]
    fn test_pivot_markdown_table() {
        let rows = vec![row("Llama3.1 8B", 60.0, 5), row("Qwen2.5 32B", 30.0, 2)];
        let out = render_pivot(OutputFormat::Md, &Filters::all(), Dimension::Llm, &rows).unwrap();
        assert!(out.starts_with("## Performance by Model"));
        assert!(out.contains("| Model | Compile Fail | Runtime Fail | Test Fail | Test Pass | Count |"));
        assert!(out.contains("| Llama3.1 8B | 10.00% | 0.00% | 30.00% | 60.00% | 5 |"));
    }

    #[test]
    fn test_pivot_summary_line() {
        let rows = vec![row("Simple", 0.0, 0), row("Moderate", 45.0, 4)];
        let out =
            render_pivot(OutputFormat::Summary, &Filters::all(), Dimension::Complexity, &rows).unwrap();
        assert_eq!(out, "2 complexity groups; best: Moderate (45.00% pass, n=4)");
    }

    #[test]
    fn test_heatmap_markdown_marks_empty_cells() {
        let cells = vec![
            HeatmapCell { llm: "A".into(), language: "Java".into(), value: 0.0, count: 0 },
            HeatmapCell { llm: "A".into(), language: "Rust".into(), value: 50.0, count: 2 },
        ];
        let out = render_heatmap(OutputFormat::Md, &Filters::all(), &cells).unwrap();
        assert!(out.contains("| Model | Java | Rust |"));
        assert!(out.contains("| A | - | 50.00% |"));
    }

    #[test]
    fn test_config_defaults_rendering() {
        let resolved = ResolvedConfig::defaults();
        let line = render_config(OutputFormat::Summary, &Filters::all(), &resolved).unwrap();
        assert_eq!(line, "config: built-in defaults");

        let md = render_config(OutputFormat::Md, &Filters::all(), &resolved).unwrap();
        assert!(md.contains("```toml"));
        assert!(md.contains("[report.sections]"));
    }

    #[test]
    fn test_empty_variation_summary() {
        let out =
            render_variation(OutputFormat::Summary, &Filters::all(), Dimension::Prompt, &[]).unwrap();
        assert_eq!(out, "0 rows by prompt");
    }
}
