//! TransBench - LLM code-translation benchmark analytics
//!
//! The main entry point for the `transbench` binary, handling:
//! - Dataset loading (JSON or CSV)
//! - Filtered summaries, pivots, heatmaps and code-variation lookups
//! - Self-contained HTML dashboard rendering

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tb_cli::config::{load_config, ConfigOptions, ResolvedConfig};
use tb_cli::dataset::{load_results, load_static_metrics, DatasetError, Loaded};
use tb_cli::exit_codes::ExitCode;
use tb_cli::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use tb_cli::output::{
    render_config, render_heatmap, render_pivot, render_report, render_summary, render_variation,
    ReportWritten,
};
use tb_cli::CliError;
use tb_common::{
    BenchmarkResult, Complexity, Dimension, Filters, Language, Llm, OutputFormat, Prompt,
    Selection, StaticMetric,
};
use tb_metrics::{calculate_metrics, filter_results, heatmap, performance_by, variation_by};
use tb_report::{DatasetInfo, ReportGenerator, ReportTheme};
use tracing::{debug, error, warn};

/// TransBench - analytics over LLM code-translation benchmark results
#[derive(Parser)]
#[command(name = "transbench")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Config file (overrides TRANSBENCH_CONFIG and the XDG location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Benchmark results file (.json or .csv)
    #[arg(long, global = true)]
    results: Option<PathBuf>,

    /// Static metrics file (.json or .csv)
    #[arg(long, global = true)]
    static_metrics: Option<PathBuf>,

    #[command(flatten)]
    filters: FilterArgs,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log format on stderr (human or jsonl)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

/// Filter flags; each accepts a value or `all`.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Target language filter
    #[arg(long, global = true, value_name = "LANGUAGE|all")]
    language: Option<Selection<Language>>,

    /// Model filter
    #[arg(long, global = true, value_name = "LLM|all")]
    llm: Option<Selection<Llm>>,

    /// Prompt strategy filter
    #[arg(long, global = true, value_name = "PROMPT|all")]
    prompt: Option<Selection<Prompt>>,

    /// Complexity filter (simple, moderate, complex)
    #[arg(long, global = true, value_name = "LEVEL|all")]
    complexity: Option<Selection<Complexity>>,
}

impl FilterArgs {
    /// Apply the flags given on the command line over `base`.
    fn apply(&self, mut base: Filters) -> Filters {
        if let Some(language) = &self.language {
            base.language = language.clone();
        }
        if let Some(llm) = &self.llm {
            base.llm = llm.clone();
        }
        if let Some(prompt) = &self.prompt {
            base.prompt = prompt.clone();
        }
        if let Some(complexity) = &self.complexity {
            base.complexity = complexity.clone();
        }
        base
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Headline rates for the filtered results
    Summary,

    /// Outcome rates grouped along one dimension
    Pivot(ByArgs),

    /// Test-pass rate for every model × language pair
    Heatmap,

    /// Code-variation rows from the static metrics table
    Variation(ByArgs),

    /// Render the self-contained HTML dashboard
    Report(ReportArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct ByArgs {
    /// Dimension to break down by
    #[arg(long, value_enum)]
    by: Dimension,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Output HTML file
    #[arg(long, short = 'o')]
    out: PathBuf,

    /// Dashboard title
    #[arg(long)]
    title: Option<String>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Auto,
}

impl From<ThemeArg> for ReportTheme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => ReportTheme::Light,
            ThemeArg::Dark => ReportTheme::Dark,
            ThemeArg::Auto => ReportTheme::Auto,
        }
    }
}

#[derive(Args, Debug)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the resolved configuration and where it came from
    Show,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Clean
            };
            let _ = e.print();
            std::process::exit(code.as_i32());
        }
    };

    let cli_level = if cli.global.quiet {
        Some(LogLevel::Error)
    } else {
        match cli.global.verbose {
            0 => None,
            1 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    };
    init_logging(&LogConfig::from_env(cli_level, cli.global.log_format));

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Clean,
        Err(e) => {
            let code = e.exit_code();
            error!(error = %e, code = %code, "Command failed");
            eprintln!("transbench: {}", e);
            code
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Shared state for one invocation.
struct Context<'a> {
    global: &'a GlobalOpts,
    resolved: ResolvedConfig,
    filters: Filters,
}

impl<'a> Context<'a> {
    fn new(global: &'a GlobalOpts) -> Result<Self, CliError> {
        let resolved = load_config(&ConfigOptions::from_env(global.config.clone()))?;
        let filters = global.filters.apply(resolved.config.filters.clone());
        debug!(?filters, "Filters resolved");
        Ok(Context {
            global,
            resolved,
            filters,
        })
    }

    fn results_path(&self) -> Option<PathBuf> {
        self.global
            .results
            .clone()
            .or_else(|| self.resolved.results_path())
    }

    fn static_metrics_path(&self) -> Option<PathBuf> {
        self.global
            .static_metrics
            .clone()
            .or_else(|| self.resolved.static_metrics_path())
    }

    fn results(&self) -> Result<Loaded<BenchmarkResult>, DatasetError> {
        let path = self.results_path().ok_or(DatasetError::Missing {
            kind: "results",
            flag: "--results",
        })?;
        load_results(&path)
    }

    fn static_metrics(&self) -> Result<Loaded<StaticMetric>, DatasetError> {
        let path = self.static_metrics_path().ok_or(DatasetError::Missing {
            kind: "static metrics",
            flag: "--static-metrics",
        })?;
        load_static_metrics(&path)
    }

    fn format(&self) -> OutputFormat {
        self.global.format
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let ctx = Context::new(&cli.global)?;
    let output = match &cli.command {
        Commands::Summary => run_summary(&ctx)?,
        Commands::Pivot(args) => run_pivot(&ctx, args.by)?,
        Commands::Heatmap => run_heatmap(&ctx)?,
        Commands::Variation(args) => run_variation(&ctx, args.by)?,
        Commands::Report(args) => run_report(&ctx, args)?,
        Commands::Config(args) => match args.command {
            ConfigCommands::Show => render_config(ctx.format(), &ctx.filters, &ctx.resolved)?,
        },
    };
    println!("{}", output);
    Ok(())
}

fn run_summary(ctx: &Context) -> Result<String, CliError> {
    let results = ctx.results()?;
    let filtered = filter_results(&results.records, &ctx.filters);
    let summary = calculate_metrics(filtered);
    Ok(render_summary(ctx.format(), &ctx.filters, &summary)?)
}

fn run_pivot(ctx: &Context, by: Dimension) -> Result<String, CliError> {
    let results = ctx.results()?;
    let filtered = filter_results(&results.records, &ctx.filters);
    let rows = performance_by(by, filtered);
    Ok(render_pivot(ctx.format(), &ctx.filters, by, &rows)?)
}

fn run_heatmap(ctx: &Context) -> Result<String, CliError> {
    let results = ctx.results()?;
    let filtered = filter_results(&results.records, &ctx.filters);
    let cells = heatmap(filtered);
    Ok(render_heatmap(ctx.format(), &ctx.filters, &cells)?)
}

fn run_variation(ctx: &Context, by: Dimension) -> Result<String, CliError> {
    let metrics = ctx.static_metrics()?;
    let rows = variation_by(by, &metrics.records, &ctx.filters);
    Ok(render_variation(ctx.format(), &ctx.filters, by, &rows)?)
}

fn run_report(ctx: &Context, args: &ReportArgs) -> Result<String, CliError> {
    let results = ctx.results()?;
    let metrics = match ctx.static_metrics() {
        Ok(metrics) => Some(metrics),
        Err(DatasetError::Missing { .. }) => {
            warn!("No static metrics configured; code variation charts will be empty");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let mut config = ctx.resolved.config.report.clone();
    if let Some(title) = &args.title {
        config.title = Some(title.clone());
    }
    if let Some(theme) = args.theme {
        config.theme = theme.into();
    }

    let generator = ReportGenerator::try_new(config)?;
    let static_rows: &[StaticMetric] = metrics
        .as_ref()
        .map(|m| m.records.as_slice())
        .unwrap_or_default();
    let mut data = generator.build(&results.records, static_rows, &ctx.filters);
    data.dataset = Some(DatasetInfo {
        results_path: Some(results.path.display().to_string()),
        results_sha256: Some(results.sha256.clone()),
        static_metrics_path: metrics.as_ref().map(|m| m.path.display().to_string()),
        static_metrics_sha256: metrics.as_ref().map(|m| m.sha256.clone()),
    });
    let report_id = data.report_id.clone();
    let html = generator.generate(data)?;

    write_file(&args.out, &html)?;

    let written = ReportWritten {
        path: args.out.display().to_string(),
        bytes: html.len(),
        report_id,
    };
    Ok(render_report(ctx.format(), &ctx.filters, &written)?)
}

fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| CliError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
