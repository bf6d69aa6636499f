//! The three jobs behind the `tiles` subcommands
//!
//! Each one reads its input, writes a single output file and returns the
//! absolute path of that file.

use crate::config::{Config, LayoutPreset};
use anyhow::Context;
use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};
use tile_pdf::TileRenderer;
use tracing::info;
use word_harvest::{
    define_file, harvest_file, render_definitions, word_list, DefinitionFormat,
    DefinitionStrategy, Scanner,
};
use word_types::{parse_word_file, sample_entries, sample_words, LetterPoints, WordEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Definition is the line after the word
    Line,
    /// Definition runs from the word to the next `[`
    Flattened,
}

impl From<StrategyArg> for DefinitionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Line => DefinitionStrategy::Line,
            StrategyArg::Flattened => DefinitionStrategy::Flattened,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Quoted,
    Tuples,
    Json,
}

impl From<FormatArg> for DefinitionFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Quoted => DefinitionFormat::Quoted,
            FormatArg::Tuples => DefinitionFormat::Tuples,
            FormatArg::Json => DefinitionFormat::Json,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Overrides the configured preset
    pub layout: Option<LayoutPreset>,
    /// Word file; the built-in sample list when absent
    pub words: Option<PathBuf>,
    /// Overrides the configured title
    pub title: Option<String>,
    pub output: PathBuf,
}

/// Render word tiles to a PDF
pub fn generate(options: &GenerateOptions, config: &Config) -> anyhow::Result<PathBuf> {
    let entries = load_entries(options.words.as_deref())?;
    let preset = options.layout.unwrap_or(config.generate.layout);
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| config.generate.title.clone());

    let renderer = TileRenderer::new(preset.layout(), LetterPoints::english()).with_title(title);
    let rendered = renderer
        .render(&entries)
        .context("Failed to render tile document")?;

    write_output(&options.output, &rendered.bytes)?;
    info!(
        pages = rendered.metrics.page_count,
        bytes = rendered.metrics.output_size_bytes,
        ?preset,
        "Wrote tile document"
    );
    absolute(&options.output)
}

/// Write the sorted reduplicated words found in `pdf`, one per line
pub fn harvest(pdf: &Path, output: &Path, config: &Config) -> anyhow::Result<PathBuf> {
    let scanner = Scanner::new(config.scan.clone())?;
    let words = harvest_file(pdf, &scanner)
        .with_context(|| format!("Failed to harvest words from {}", pdf.display()))?;

    write_output(output, word_list(&words).as_bytes())?;
    info!(words = words.len(), "Wrote word list");
    absolute(output)
}

/// Write definitions for the sample words found in `pdf`
pub fn define(
    pdf: &Path,
    output: &Path,
    strategy: DefinitionStrategy,
    format: DefinitionFormat,
    config: &Config,
) -> anyhow::Result<PathBuf> {
    let scanner = Scanner::new(config.scan.clone())?;
    let canonical = sample_words();
    let records = define_file(pdf, &scanner, strategy, &canonical)
        .with_context(|| format!("Failed to read definitions from {}", pdf.display()))?;

    let text = render_definitions(&records, format)?;
    write_output(output, text.as_bytes())?;
    info!(rows = records.len(), ?strategy, ?format, "Wrote definitions");
    absolute(output)
}

fn load_entries(path: Option<&Path>) -> anyhow::Result<Vec<WordEntry>> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read word file: {}", path.display()))?;
            parse_word_file(&content)
                .with_context(|| format!("Malformed word file: {}", path.display()))
        }
        None => Ok(sample_entries()),
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve {}", path.display()))
}
