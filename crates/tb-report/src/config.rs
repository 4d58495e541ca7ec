//! Dashboard configuration types.

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dashboard color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportTheme {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
    /// Auto-detect from system preference.
    #[default]
    Auto,
}

impl ReportTheme {
    /// Get the CSS class for this theme.
    pub fn css_class(&self) -> &'static str {
        match self {
            ReportTheme::Light => "light",
            ReportTheme::Dark => "dark",
            ReportTheme::Auto => "",
        }
    }
}

/// CDN library configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdnLibrary {
    /// Pinned version number.
    pub version: String,
    /// Subresource integrity hash (`sha384-...`). Omitted from the tag when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sri: Option<String>,
    /// Path within npm package.
    #[serde(default)]
    pub path: Option<String>,
}

impl CdnLibrary {
    /// Create a new CDN library configuration.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            sri: None,
            path: None,
        }
    }

    /// Pin the asset to a subresource integrity hash.
    pub fn with_sri(mut self, sri: impl Into<String>) -> Self {
        self.sri = Some(sri.into());
        self
    }

    /// `integrity`/`crossorigin` attributes for the asset tag, empty when unpinned.
    pub fn integrity_attrs(&self) -> String {
        match &self.sri {
            Some(sri) => format!(r#" integrity="{}" crossorigin="anonymous""#, sri),
            None => String::new(),
        }
    }

    /// Set the path within the npm package.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Get the full CDN URL for this library.
    pub fn url(&self, base_url: &str, package_name: &str) -> String {
        let path = self.path.as_deref().unwrap_or("dist/index.min.js");
        format!("{}/{}@{}/{}", base_url, package_name, self.version, path)
    }
}

/// Dashboard section visibility configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSections {
    /// Headline metric cards.
    #[serde(default = "default_true")]
    pub overview: bool,
    /// Per-dimension pass/fail bar charts.
    #[serde(default = "default_true")]
    pub performance: bool,
    /// Model × language heatmap.
    #[serde(default = "default_true")]
    pub heatmap: bool,
    /// Static code-variation charts.
    #[serde(default = "default_true")]
    pub variation: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ReportSections {
    fn default() -> Self {
        Self {
            overview: true,
            performance: true,
            heatmap: true,
            variation: true,
        }
    }
}

impl ReportSections {
    /// True when at least one section is enabled.
    pub fn any(&self) -> bool {
        self.overview || self.performance || self.heatmap || self.variation
    }
}

/// CDN configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdnConfig {
    /// Base URL for CDN resources.
    #[serde(default = "default_cdn_base")]
    pub base_url: String,
    /// Library configurations.
    #[serde(default = "default_libraries")]
    pub libraries: HashMap<String, CdnLibrary>,
}

fn default_cdn_base() -> String {
    "https://cdn.jsdelivr.net/npm".to_string()
}

fn default_libraries() -> HashMap<String, CdnLibrary> {
    let mut libs = HashMap::new();

    // Tailwind 2.x is the last line that publishes a prebuilt stylesheet.
    // Versions are pinned; integrity hashes are opt-in through config.
    libs.insert(
        "tailwindcss".to_string(),
        CdnLibrary::new("2.2.19").with_path("dist/tailwind.min.css"),
    );

    // ECharts for bar and composed charts
    libs.insert(
        "echarts".to_string(),
        CdnLibrary::new("5.5.0").with_path("dist/echarts.min.js"),
    );

    libs
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            base_url: default_cdn_base(),
            libraries: default_libraries(),
        }
    }
}

/// Chart sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Height of bar charts in pixels.
    #[serde(default = "default_chart_height")]
    pub chart_height_px: u32,
    /// Height of the composed variation charts in pixels.
    #[serde(default = "default_variation_height")]
    pub variation_height_px: u32,
}

fn default_chart_height() -> u32 {
    400
}

fn default_variation_height() -> u32 {
    500
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            chart_height_px: default_chart_height(),
            variation_height_px: default_variation_height(),
        }
    }
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Custom dashboard title.
    #[serde(default)]
    pub title: Option<String>,
    /// Color theme.
    #[serde(default)]
    pub theme: ReportTheme,
    /// Section visibility.
    #[serde(default)]
    pub sections: ReportSections,
    /// CDN configuration.
    #[serde(default)]
    pub cdn_config: CdnConfig,
    /// Chart sizing.
    #[serde(default)]
    pub layout: ChartLayout,
}

fn default_schema_version() -> String {
    tb_common::SCHEMA_VERSION.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            title: None,
            theme: ReportTheme::default(),
            sections: ReportSections::default(),
            cdn_config: CdnConfig::default(),
            layout: ChartLayout::default(),
        }
    }
}

impl ReportConfig {
    /// Create a new dashboard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dashboard title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: ReportTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Replace section visibility.
    pub fn with_sections(mut self, sections: ReportSections) -> Self {
        self.sections = sections;
        self
    }

    /// Check the configuration can produce a usable dashboard.
    pub fn validate(&self) -> Result<()> {
        if !self.sections.any() {
            return Err(ReportError::InvalidConfig(
                "all dashboard sections are disabled".to_string(),
            ));
        }
        let base = &self.cdn_config.base_url;
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(ReportError::InvalidConfig(format!(
                "cdn base_url must be an http(s) URL, got '{}'",
                base
            )));
        }
        if self.layout.chart_height_px == 0 || self.layout.variation_height_px == 0 {
            return Err(ReportError::InvalidConfig(
                "chart heights must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.schema_version, "1.0.0");
        assert_eq!(config.theme, ReportTheme::Auto);
        assert!(config.sections.overview);
        assert!(config.sections.variation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ReportConfig::new()
            .with_title("Translation Benchmark")
            .with_theme(ReportTheme::Dark);

        assert_eq!(config.title, Some("Translation Benchmark".to_string()));
        assert_eq!(config.theme, ReportTheme::Dark);
    }

    #[test]
    fn test_cdn_library_url() {
        let lib = CdnLibrary::new("5.5.0").with_path("dist/echarts.min.js");
        let url = lib.url("https://cdn.jsdelivr.net/npm", "echarts");
        assert_eq!(
            url,
            "https://cdn.jsdelivr.net/npm/echarts@5.5.0/dist/echarts.min.js"
        );
    }

    #[test]
    fn test_integrity_attrs_only_when_pinned() {
        let lib = CdnLibrary::new("5.5.0");
        assert_eq!(lib.integrity_attrs(), "");
        let pinned = lib.with_sri("sha384-abc");
        assert_eq!(
            pinned.integrity_attrs(),
            r#" integrity="sha384-abc" crossorigin="anonymous""#
        );
    }

    #[test]
    fn test_default_libraries_carry_no_unverified_hashes() {
        let cdn = CdnConfig::default();
        assert!(cdn.libraries.values().all(|lib| lib.sri.is_none()));
        let tailwind = &cdn.libraries["tailwindcss"];
        assert_eq!(tailwind.version, "2.2.19");
        assert_eq!(tailwind.path.as_deref(), Some("dist/tailwind.min.css"));
    }

    #[test]
    fn test_config_serialization() {
        let config = ReportConfig::default().with_title("x");
        let json = config.to_json().unwrap();
        let parsed: ReportConfig = ReportConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let parsed = ReportConfig::from_json(r#"{"sections": {"heatmap": false}}"#).unwrap();
        assert!(!parsed.sections.heatmap);
        assert!(parsed.sections.overview);
        assert_eq!(parsed.layout.chart_height_px, 400);
    }

    #[test]
    fn test_validate_rejects_no_sections() {
        let config = ReportConfig::default().with_sections(ReportSections {
            overview: false,
            performance: false,
            heatmap: false,
            variation: false,
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sections"));
    }

    #[test]
    fn test_validate_rejects_bad_cdn_base() {
        let mut config = ReportConfig::default();
        config.cdn_config.base_url = "ftp://mirror".to_string();
        assert!(matches!(
            config.validate(),
            Err(ReportError::InvalidConfig(_))
        ));
    }
}
