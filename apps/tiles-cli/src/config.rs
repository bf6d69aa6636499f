//! Optional TOML configuration for the `tiles` binary
//!
//! Every table and field is optional; an empty file is the same as no file.
//!
//! ```toml
//! [generate]
//! layout = "annotated"
//! title = "Sevens"
//!
//! [scan]
//! word_pattern = '\b[A-Z]{7}\b'
//! definition_terminator = "["
//! backend = "pdf-extract"
//! ```

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tile_pdf::TileLayout;
use word_harvest::ScanConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generate: GenerateConfig,
    pub scan: ScanConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub layout: LayoutPreset,
    pub title: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            layout: LayoutPreset::Grid,
            title: "Reduplicated Words".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPreset {
    /// Tiles only, two columns
    #[default]
    Grid,
    /// Tiles with definitions, one column
    Annotated,
}

impl LayoutPreset {
    pub fn layout(self) -> TileLayout {
        match self {
            LayoutPreset::Grid => TileLayout::grid(),
            LayoutPreset::Annotated => TileLayout::annotated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use word_harvest::TextBackend;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.scan.word_length, 7);
        assert_eq!(config.generate.layout, LayoutPreset::Grid);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [generate]
            layout = "annotated"
            title = "Sevens"

            [scan]
            word_pattern = '\b[A-Z]{7}\b'
            definition_terminator = "("
            trailing_punctuation = ".;"
            missing_definition = "n/a"
            require_reduplication = false
            backend = "pdf-extract"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.generate.layout, LayoutPreset::Annotated);
        assert_eq!(config.generate.title, "Sevens");
        assert_eq!(config.scan.definition_terminator, '(');
        assert_eq!(config.scan.trailing_punctuation, ".;");
        assert_eq!(config.scan.missing_definition, "n/a");
        assert!(!config.scan.require_reduplication);
        assert_eq!(config.scan.backend, TextBackend::PdfExtract);
        // untouched fields keep their defaults
        assert_eq!(config.scan.word_length, 7);
    }

    #[test]
    fn test_malformed_config_rejected() {
        assert!(Config::from_str("[scan\nword_length = ").is_err());
        assert!(Config::from_str("[generate]\nlayout = \"spiral\"").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Config::from_file("/nonexistent/tiles.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tiles.toml"));
    }

    #[test]
    fn test_presets_map_to_layouts() {
        assert_eq!(LayoutPreset::Grid.layout(), TileLayout::grid());
        assert!(LayoutPreset::Annotated.layout().definitions.is_some());
    }
}
