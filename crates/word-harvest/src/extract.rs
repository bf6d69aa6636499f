//! PDF text extraction module
//!
//! Pulls raw text out of a PDF one page at a time. Two backends:
//! - `Lopdf`: walks each page's content stream (`Document::extract_text`),
//!   so page boundaries are exact
//! - `PdfExtract`: pdf-extract's per-page text output
//!
//! # Example
//! ```no_run
//! use word_harvest::{HarvestError, PdfExtractor, TextBackend};
//!
//! fn count_pages(pdf_bytes: &[u8]) -> Result<usize, HarvestError> {
//!     let pages = PdfExtractor::extract_pages(pdf_bytes, TextBackend::Lopdf)?;
//!     Ok(pages.len())
//! }
//! ```

use crate::error::HarvestError;
use lopdf::Document;
use pdf_extract::extract_text_from_mem_by_pages;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Which library turns page content into text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextBackend {
    #[default]
    Lopdf,
    PdfExtract,
}

/// Main PDF extraction interface
pub struct PdfExtractor;

impl PdfExtractor {
    /// Read a PDF from disk and extract its pages
    pub fn extract_file(
        path: impl AsRef<Path>,
        backend: TextBackend,
    ) -> Result<Vec<PageContent>, HarvestError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::extract_pages(&bytes, backend)
    }

    /// Extract text from PDF bytes, one entry per page
    ///
    /// # Errors
    /// - `HarvestError::InvalidPdf` - The PDF is malformed or corrupted
    /// - `HarvestError::PasswordProtected` - The PDF requires a password
    /// - `HarvestError::ExtractionError` - Other extraction failures
    pub fn extract_pages(
        pdf_bytes: &[u8],
        backend: TextBackend,
    ) -> Result<Vec<PageContent>, HarvestError> {
        let pages = match backend {
            TextBackend::Lopdf => Self::extract_with_lopdf(pdf_bytes)?,
            TextBackend::PdfExtract => Self::extract_with_pdf_extract(pdf_bytes)?,
        };

        for page in pages.iter().filter(|p| p.text.trim().is_empty()) {
            warn!(page = page.page_number, "Page has no extractable text");
        }
        debug!(pages = pages.len(), ?backend, "Extracted page text");

        Ok(pages)
    }

    fn extract_with_lopdf(pdf_bytes: &[u8]) -> Result<Vec<PageContent>, HarvestError> {
        let doc = Document::load_mem(pdf_bytes).map_err(|e| classify_error(e.to_string()))?;
        if doc.is_encrypted() {
            return Err(HarvestError::PasswordProtected);
        }

        doc.get_pages()
            .keys()
            .map(|&number| {
                let text = doc
                    .extract_text(&[number])
                    .map_err(|e| HarvestError::ExtractionError(format!("page {}: {}", number, e)))?;
                Ok(Self::create_page_content(number as usize, &text))
            })
            .collect()
    }

    fn extract_with_pdf_extract(pdf_bytes: &[u8]) -> Result<Vec<PageContent>, HarvestError> {
        let pages = extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| classify_error(e.to_string()))?;

        Ok(pages
            .iter()
            .enumerate()
            .map(|(idx, text)| Self::create_page_content(idx + 1, text))
            .collect())
    }

    /// Create a PageContent structure from raw page text
    pub fn create_page_content(page_number: usize, text: &str) -> PageContent {
        let lines: Vec<TextLine> = text
            .lines()
            .enumerate()
            .map(|(idx, line)| TextLine {
                text: line.to_string(),
                line_number: idx + 1,
            })
            .collect();

        PageContent {
            page_number,
            text: text.to_string(),
            lines,
        }
    }
}

fn classify_error(message: String) -> HarvestError {
    let lower = message.to_lowercase();

    if lower.contains("encrypted") || lower.contains("password") {
        return HarvestError::PasswordProtected;
    }

    if lower.contains("invalid")
        || lower.contains("malformed")
        || lower.contains("corrupt")
        || lower.contains("header")
        || lower.contains("xref")
        || lower.contains("trailer")
    {
        return HarvestError::InvalidPdf(message);
    }

    HarvestError::ExtractionError(message)
}

/// The text of a single page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-indexed)
    pub page_number: usize,

    /// Raw text content of the page
    pub text: String,

    /// Individual lines of text on the page
    pub lines: Vec<TextLine>,
}

impl PageContent {
    /// All lines joined with single spaces
    pub fn flattened(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,

    /// Line number within the page (1-indexed)
    pub line_number: usize,
}
