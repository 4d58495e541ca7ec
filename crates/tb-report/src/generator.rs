//! Dashboard generator implementation.

use crate::colors::{
    success_text_class, DELTA_CC_COLOR, DELTA_LOC_COLOR, RATE_SERIES_COLORS,
};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::sections::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tb_common::{BenchmarkResult, Filters, StaticMetric};
use tb_metrics::filter_results;
use tracing::{debug, info};

/// Provenance of the datasets a dashboard was built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Benchmark results file.
    pub results_path: Option<String>,
    /// SHA-256 of the benchmark results file.
    pub results_sha256: Option<String>,
    /// Static metrics file.
    pub static_metrics_path: Option<String>,
    /// SHA-256 of the static metrics file.
    pub static_metrics_sha256: Option<String>,
}

/// Complete dashboard data structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    /// Dashboard configuration.
    pub config: ReportConfig,
    /// Unique id of this rendering.
    pub report_id: String,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Generator version.
    pub generator_version: String,
    /// Where the data came from, when known.
    #[serde(default)]
    pub dataset: Option<DatasetInfo>,
    /// Overview section.
    pub overview: Option<OverviewSection>,
    /// Performance charts.
    pub performance: Option<PerformanceSection>,
    /// Model × language heatmap.
    pub heatmap: Option<HeatmapSection>,
    /// Code variation charts.
    pub variation: Option<VariationSection>,
}

impl DashboardData {
    /// Get the dashboard title.
    pub fn title(&self) -> String {
        self.config
            .title
            .clone()
            .unwrap_or_else(|| "LLM Code Translation Benchmark".to_string())
    }
}

/// Generate a short unique dashboard id.
pub fn generate_report_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("tb-{}", &uuid.simple().to_string()[..12])
}

/// Dashboard generator.
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Create a new generator with configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Create a generator after validating the configuration.
    pub fn try_new(config: ReportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a generator with default configuration.
    pub fn default_config() -> Self {
        Self::new(ReportConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Compute every enabled section for the given datasets and filters.
    pub fn build(
        &self,
        results: &[BenchmarkResult],
        metrics: &[StaticMetric],
        filters: &Filters,
    ) -> DashboardData {
        let filtered = filter_results(results, filters);
        debug!(
            total = results.len(),
            filtered = filtered.len(),
            static_rows = metrics.len(),
            "Building dashboard sections"
        );

        let sections = &self.config.sections;
        DashboardData {
            config: self.config.clone(),
            report_id: generate_report_id(),
            generated_at: Utc::now(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            dataset: None,
            overview: sections
                .overview
                .then(|| OverviewSection::build(filtered.iter().copied(), filters, results.len())),
            performance: sections
                .performance
                .then(|| PerformanceSection::build(&filtered)),
            heatmap: sections.heatmap.then(|| HeatmapSection::build(&filtered)),
            variation: sections
                .variation
                .then(|| VariationSection::build(metrics, filters)),
        }
    }

    /// Build and render in one step.
    pub fn render(
        &self,
        results: &[BenchmarkResult],
        metrics: &[StaticMetric],
        filters: &Filters,
    ) -> Result<String> {
        let data = self.build(results, metrics, filters);
        self.generate(data)
    }

    /// Generate the dashboard from structured data.
    pub fn generate(&self, data: DashboardData) -> Result<String> {
        self.render_html(&data)
    }

    /// Generate the dashboard from JSON data.
    pub fn generate_from_json(&self, json: &str) -> Result<String> {
        let data: DashboardData = serde_json::from_str(json)?;
        self.render_html(&data)
    }

    fn render_html(&self, data: &DashboardData) -> Result<String> {
        let html = self.generate_html(data)?;

        // Optionally minify
        let output = if cfg!(debug_assertions) {
            html
        } else {
            let cfg = minify_html::Cfg {
                minify_js: true,
                minify_css: true,
                ..Default::default()
            };
            String::from_utf8(minify_html::minify(html.as_bytes(), &cfg)).unwrap_or(html)
        };

        info!(
            bytes = output.len(),
            title = %data.title(),
            report_id = %data.report_id,
            "Dashboard generated"
        );

        Ok(output)
    }

    fn generate_html(&self, data: &DashboardData) -> Result<String> {
        let title = data.title();
        let theme_class = self.config.theme.css_class();
        let cdn_base = &self.config.cdn_config.base_url;
        let libs = &self.config.cdn_config.libraries;

        // Build CDN script/style tags
        let mut cdn_styles = String::new();
        let mut cdn_scripts = String::new();

        if let Some(lib) = libs.get("tailwindcss") {
            cdn_styles.push_str(&format!(
                r#"<link rel="stylesheet" href="{}"{}>"#,
                lib.url(cdn_base, "tailwindcss"),
                lib.integrity_attrs()
            ));
        }

        if let Some(lib) = libs.get("echarts") {
            cdn_scripts.push_str(&format!(
                r#"<script src="{}"{}></script>"#,
                lib.url(cdn_base, "echarts"),
                lib.integrity_attrs()
            ));
        }

        // Serialize data for JavaScript
        let data_json = script_safe_json(&serde_json::to_string(data)?);

        Ok(format!(
            r##"<!DOCTYPE html>
<html lang="en" class="{theme_class}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="generator" content="tb-report {version}">
    <meta name="robots" content="noindex, nofollow">
    {cdn_styles}
    <style>
        /* Base styles */
        :root {{
            --bg-primary: #ffffff;
            --bg-secondary: #f9fafb;
            --text-primary: #111827;
            --text-secondary: #6b7280;
            --border-color: #e5e7eb;
            --accent-color: #6366f1;
        }}
        .dark {{
            --bg-primary: #111827;
            --bg-secondary: #1f2937;
            --text-primary: #f9fafb;
            --text-secondary: #9ca3af;
            --border-color: #374151;
            --accent-color: #818cf8;
        }}
        @media (prefers-color-scheme: dark) {{
            :root:not(.light) {{
                --bg-primary: #111827;
                --bg-secondary: #1f2937;
                --text-primary: #f9fafb;
                --text-secondary: #9ca3af;
                --border-color: #374151;
                --accent-color: #818cf8;
            }}
        }}
        body {{
            background-color: var(--bg-primary);
            color: var(--text-primary);
            font-family: ui-sans-serif, system-ui, sans-serif;
            line-height: 1.5;
        }}
        .card {{
            background-color: var(--bg-secondary);
            border: 1px solid var(--border-color);
            border-radius: 1rem;
            padding: 1.5rem;
            margin-bottom: 1rem;
        }}
        .stat-card {{
            text-align: center;
            padding: 1rem;
        }}
        .stat-value {{
            font-size: 2rem;
            font-weight: 700;
        }}
        .stat-label {{
            font-size: 0.875rem;
            color: var(--text-secondary);
        }}
        .tab-btn {{
            padding: 0.75rem 1.5rem;
            border-bottom: 2px solid transparent;
            cursor: pointer;
            transition: all 0.2s;
        }}
        .tab-btn:hover {{
            background-color: var(--bg-secondary);
        }}
        .tab-btn.active {{
            border-bottom-color: var(--accent-color);
            color: var(--accent-color);
        }}
        .tab-content {{
            display: none;
        }}
        .tab-content.active {{
            display: block;
        }}
        .badge {{
            display: inline-flex;
            align-items: center;
            padding: 0.25rem 0.75rem;
            border-radius: 9999px;
            font-size: 0.75rem;
            font-weight: 500;
        }}
        .heatmap td {{
            text-align: center;
            padding: 0.5rem 1rem;
        }}
        /* Print styles */
        @media print {{
            .no-print {{ display: none !important; }}
            body {{ font-size: 10pt; }}
            .card {{ page-break-inside: avoid; }}
        }}
    </style>
</head>
<body>
    <div class="max-w-7xl mx-auto px-4 py-8">
        <!-- Header -->
        <header class="mb-8">
            <h1 class="text-3xl font-bold mb-2">{title}</h1>
            <p class="text-sm" style="color: var(--text-secondary)">
                Generated: {generated_at} | Report: {report_id}
            </p>
            <div class="mt-2 flex gap-2">{filter_badges}</div>
        </header>

        <!-- Navigation Tabs -->
        <nav class="flex border-b mb-6 no-print" style="border-color: var(--border-color)">
            {tab_buttons}
        </nav>

        <!-- Tab Contents -->
        <main>
            {tab_contents}
        </main>

        <!-- Footer -->
        <footer class="mt-8 pt-4 border-t text-sm text-center" style="border-color: var(--border-color); color: var(--text-secondary)">
            <p>TransBench Dashboard v{version}</p>
        </footer>
    </div>

    {cdn_scripts}
    <script>
        // Dashboard data
        const REPORT_DATA = {data_json};

        // Tab switching
        function switchTab(tabId) {{
            document.querySelectorAll('.tab-btn').forEach(btn => {{
                btn.classList.toggle('active', btn.dataset.tab === tabId);
            }});
            document.querySelectorAll('.tab-content').forEach(content => {{
                content.classList.toggle('active', content.id === 'tab-' + tabId);
            }});
            charts.forEach(c => c.resize());
        }}

        const charts = [];

        // Initialize tabs
        document.querySelectorAll('.tab-btn').forEach(btn => {{
            btn.addEventListener('click', () => switchTab(btn.dataset.tab));
        }});

        const RATE_SERIES = [
            {{ field: 'compileFailRate', label: 'Compile Fail', color: '{c0}' }},
            {{ field: 'runtimeFailRate', label: 'Runtime Fail', color: '{c1}' }},
            {{ field: 'testFailRate', label: 'Test Fail', color: '{c2}' }},
            {{ field: 'testPassRate', label: 'Test Pass', color: '{c3}' }},
        ];

        if (typeof echarts !== 'undefined') {{
            // Performance bar charts
            ((REPORT_DATA.performance || {{}}).charts || []).forEach(chart => {{
                const el = document.getElementById('perf-' + chart.dimension);
                if (!el) return;
                const c = echarts.init(el);
                c.setOption({{
                    tooltip: {{ trigger: 'axis', valueFormatter: v => v.toFixed(2) + '%' }},
                    legend: {{ bottom: 0 }},
                    xAxis: {{ type: 'category', data: chart.rows.map(r => r.name) }},
                    yAxis: {{ type: 'value', max: 100, axisLabel: {{ formatter: '{{value}}%' }} }},
                    series: RATE_SERIES.map(s => ({{
                        name: s.label,
                        type: 'bar',
                        data: chart.rows.map(r => r[s.field]),
                        itemStyle: {{ color: s.color }},
                    }})),
                }});
                charts.push(c);
            }});

            // Composed variation charts
            ((REPORT_DATA.variation || {{}}).charts || []).forEach(chart => {{
                const el = document.getElementById('variation-' + chart.dimension);
                if (!el) return;
                const c = echarts.init(el);
                c.setOption({{
                    tooltip: {{
                        trigger: 'axis',
                        formatter: params => {{
                            const d = chart.rows[params[0].dataIndex];
                            return '<b>' + d.name + '</b><br>'
                                + 'ΔCC (log): ' + d.deltaCClog.toFixed(2)
                                + ' <small>[' + d.minDeltaCC + ', ' + d.maxDeltaCC + ']</small><br>'
                                + 'ΔSLoC: ' + d.deltaLOC.toFixed(2)
                                + ' <small>[' + d.minDeltaLOC + ', ' + d.maxDeltaLOC + ']</small>';
                        }},
                    }},
                    legend: {{ bottom: 0 }},
                    xAxis: {{ type: 'category', data: chart.rows.map(r => r.name) }},
                    yAxis: {{ type: 'value', name: 'Variation', scale: true }},
                    series: [
                        {{
                            name: 'ΔCC (log)',
                            type: 'bar',
                            barMaxWidth: 80,
                            data: chart.rows.map(r => r.deltaCClog),
                            itemStyle: {{ color: '{cc_color}' }},
                            markLine: {{
                                silent: true,
                                symbol: 'none',
                                data: [{{ yAxis: 0 }}],
                                lineStyle: {{ color: '#94a3b8', width: 2, type: 'dashed' }},
                            }},
                        }},
                        {{
                            name: 'ΔSLoC',
                            type: 'line',
                            smooth: true,
                            symbolSize: 12,
                            data: chart.rows.map(r => r.deltaLOC),
                            lineStyle: {{ width: 3, color: '{loc_color}' }},
                            itemStyle: {{ color: '{loc_color}' }},
                        }},
                    ],
                }});
                charts.push(c);
            }});

            window.addEventListener('resize', () => charts.forEach(c => c.resize()));
        }}

        // Initialize first tab
        const firstTab = document.querySelector('.tab-btn');
        if (firstTab) switchTab(firstTab.dataset.tab);
    </script>
</body>
</html>"##,
            theme_class = theme_class,
            title = html_escape(&title),
            version = env!("CARGO_PKG_VERSION"),
            cdn_styles = cdn_styles,
            generated_at = data.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report_id = html_escape(&data.report_id),
            filter_badges = self.generate_filter_badges(data),
            tab_buttons = self.generate_tab_buttons(data),
            tab_contents = self.generate_tab_contents(data),
            cdn_scripts = cdn_scripts,
            data_json = data_json,
            c0 = RATE_SERIES_COLORS[0],
            c1 = RATE_SERIES_COLORS[1],
            c2 = RATE_SERIES_COLORS[2],
            c3 = RATE_SERIES_COLORS[3],
            cc_color = DELTA_CC_COLOR,
            loc_color = DELTA_LOC_COLOR,
        ))
    }

    fn generate_filter_badges(&self, data: &DashboardData) -> String {
        let Some(ref overview) = data.overview else {
            return String::new();
        };
        let active = overview.active_filters();
        if active.is_empty() {
            return r#"<span class="badge bg-gray-100 text-gray-800">All data</span>"#.to_string();
        }
        active
            .iter()
            .map(|(dimension, value)| {
                format!(
                    r#"<span class="badge bg-indigo-100 text-indigo-800">{}: {}</span>"#,
                    dimension,
                    html_escape(value)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn generate_tab_buttons(&self, data: &DashboardData) -> String {
        let mut buttons = Vec::new();
        let sections = &self.config.sections;

        if sections.overview && data.overview.is_some() {
            buttons.push(r#"<button class="tab-btn" data-tab="overview">Overview</button>"#);
        }
        if sections.performance && data.performance.is_some() {
            buttons.push(r#"<button class="tab-btn" data-tab="performance">Performance</button>"#);
        }
        if sections.heatmap && data.heatmap.is_some() {
            buttons.push(r#"<button class="tab-btn" data-tab="heatmap">Heatmap</button>"#);
        }
        if sections.variation && data.variation.is_some() {
            buttons.push(r#"<button class="tab-btn" data-tab="variation">Code Variation</button>"#);
        }

        buttons.join("\n            ")
    }

    fn generate_tab_contents(&self, data: &DashboardData) -> String {
        let mut contents = Vec::new();
        let sections = &self.config.sections;

        if sections.overview {
            if let Some(ref overview) = data.overview {
                contents.push(self.generate_overview_tab(overview));
            }
        }
        if sections.performance {
            if let Some(ref performance) = data.performance {
                contents.push(self.generate_performance_tab(performance));
            }
        }
        if sections.heatmap {
            if let Some(ref heatmap) = data.heatmap {
                contents.push(self.generate_heatmap_tab(heatmap));
            }
        }
        if sections.variation {
            if let Some(ref variation) = data.variation {
                contents.push(self.generate_variation_tab(variation));
            }
        }

        contents.join("\n")
    }

    fn generate_overview_tab(&self, overview: &OverviewSection) -> String {
        let cards: String = overview
            .cards()
            .iter()
            .map(|card| {
                format!(
                    r#"<div class="card stat-card {bg}">
            <div class="stat-value {text}">{value}</div>
            <div class="stat-label">{label}</div>
        </div>"#,
                    bg = card.bg_class,
                    text = card.text_class,
                    value = html_escape(&card.value),
                    label = html_escape(&card.label),
                )
            })
            .collect::<Vec<_>>()
            .join("\n        ");

        format!(
            r##"<section id="tab-overview" class="tab-content">
    <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4 mb-6">
        {cards}
    </div>
    <div class="card">
        <h3 class="text-lg font-semibold mb-4">Selection</h3>
        <dl class="grid grid-cols-2 gap-2 text-sm">
            <dt style="color: var(--text-secondary)">Translations in selection</dt>
            <dd>{selected} of {dataset}</dd>
            <dt style="color: var(--text-secondary)">Coverage</dt>
            <dd>{coverage:.1}%</dd>
        </dl>
    </div>
</section>"##,
            cards = cards,
            selected = overview.summary.total_translations,
            dataset = overview.dataset_size,
            coverage = overview.coverage_pct(),
        )
    }

    fn generate_performance_tab(&self, performance: &PerformanceSection) -> String {
        let height = self.config.layout.chart_height_px;
        let charts: String = performance
            .charts
            .iter()
            .map(|chart| {
                let best = chart
                    .best()
                    .map(|row| {
                        format!(
                            r#"<p class="text-sm mb-2">Best: <span class="font-medium {}">{} ({:.2}% pass)</span></p>"#,
                            success_text_class(row.test_pass_rate),
                            html_escape(&row.name),
                            row.test_pass_rate
                        )
                    })
                    .unwrap_or_default();
                format!(
                    r##"<div class="card">
        <h3 class="text-2xl font-bold mb-2">{title}</h3>
        {best}
        <div id="{id}" style="height: {height}px;"></div>
    </div>"##,
                    title = html_escape(&chart.title),
                    best = best,
                    id = chart.element_id(),
                    height = height,
                )
            })
            .collect::<Vec<_>>()
            .join("\n    ");

        format!(
            r##"<section id="tab-performance" class="tab-content">
    {charts}
</section>"##,
            charts = charts
        )
    }

    fn generate_heatmap_tab(&self, heatmap: &HeatmapSection) -> String {
        let header: String = heatmap
            .languages
            .iter()
            .map(|l| format!(r#"<th class="px-4 py-2">{}</th>"#, html_escape(l)))
            .collect();

        let rows: String = heatmap
            .llms
            .iter()
            .enumerate()
            .map(|(i, llm)| {
                let cells: String = (0..heatmap.languages.len())
                    .filter_map(|j| heatmap.cell(i, j))
                    .map(|cell| {
                        format!(
                            r#"<td class="{}" title="{} translations">{:.1}%</td>"#,
                            HeatmapSection::cell_class(cell),
                            cell.count,
                            cell.value
                        )
                    })
                    .collect();
                format!(
                    r#"<tr><th class="px-4 py-2 text-left">{}</th>{}</tr>"#,
                    html_escape(llm),
                    cells
                )
            })
            .collect::<Vec<_>>()
            .join("\n                ");

        format!(
            r##"<section id="tab-heatmap" class="tab-content">
    <div class="card overflow-x-auto">
        <h3 class="text-2xl font-bold mb-2">Test Pass Rate: Model × Language</h3>
        <table class="heatmap w-full text-sm">
            <thead>
                <tr><th></th>{header}</tr>
            </thead>
            <tbody>
                {rows}
            </tbody>
        </table>
    </div>
</section>"##,
            header = header,
            rows = rows,
        )
    }

    fn generate_variation_tab(&self, variation: &VariationSection) -> String {
        let height = self.config.layout.variation_height_px;
        let charts: String = variation
            .charts
            .iter()
            .map(|chart| {
                let note = chart
                    .note
                    .as_deref()
                    .map(|n| format!(r#"<span class="italic"> {}</span>"#, html_escape(n)))
                    .unwrap_or_default();
                let body = if chart.rows.is_empty() {
                    r#"<p class="text-sm" style="color: var(--text-secondary)">No precomputed metrics for this selection.</p>"#.to_string()
                } else {
                    format!(r#"<div id="{}" style="height: {}px;"></div>"#, chart.element_id(), height)
                };
                format!(
                    r##"<div class="card">
        <h3 class="text-2xl font-bold mb-2">{title}</h3>
        <p class="text-sm mb-6" style="color: var(--text-secondary)">{description}{note}</p>
        {body}
    </div>"##,
                    title = html_escape(&chart.title),
                    description = html_escape(&chart.description),
                    note = note,
                    body = body,
                )
            })
            .collect::<Vec<_>>()
            .join("\n    ");

        format!(
            r##"<section id="tab-variation" class="tab-content">
    {charts}
</section>"##,
            charts = charts
        )
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Make serialized JSON safe to inline inside a `<script>` element.
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\!--")
}
