//! Reduplicated word harvesting
//!
//! This crate pulls text out of a PDF word list, picks out reduplicated
//! seven-letter words (`MUUMUUS`, `TSKTSKS`, ...) and associates each with
//! the definition text printed next to it.
//!
//! Pipeline:
//! - `extract`: PDF bytes → per-page text
//! - `scan`: page text → candidate words / definitions
//! - `report`: words and definitions → output text

pub mod definitions;
pub mod error;
pub mod extract;
pub mod redup;
pub mod report;
pub mod scan;

pub use definitions::{DefinitionMap, DefinitionStrategy};
pub use error::HarvestError;
pub use extract::{PageContent, PdfExtractor, TextBackend, TextLine};
pub use redup::is_reduplicated;
pub use report::{definition_records, render_definitions, word_list, DefinitionFormat, DefinitionRecord};
pub use scan::{ScanConfig, Scanner, DEFAULT_WORD_PATTERN, MISSING_DEFINITION};

use std::path::Path;
use word_types::Word;

/// Sorted reduplicated words found anywhere in the PDF at `path`
pub fn harvest_file(path: impl AsRef<Path>, scanner: &Scanner) -> Result<Vec<Word>, HarvestError> {
    let pages = PdfExtractor::extract_file(path, scanner.config().backend)?;
    Ok(scanner.harvest_words(&pages))
}

/// Definitions found in the PDF at `path`, as output rows in canonical order
///
/// The line strategy only looks for `canonical` words and fills gaps with
/// the configured placeholder. The flattened strategy records every
/// reduplicated word it matches; rows follow `canonical` for those it
/// contains and omit the rest.
pub fn define_file(
    path: impl AsRef<Path>,
    scanner: &Scanner,
    strategy: DefinitionStrategy,
    canonical: &[Word],
) -> Result<Vec<DefinitionRecord>, HarvestError> {
    let pages = PdfExtractor::extract_file(path, scanner.config().backend)?;
    define_pages(&pages, scanner, strategy, canonical)
}

pub fn define_pages(
    pages: &[PageContent],
    scanner: &Scanner,
    strategy: DefinitionStrategy,
    canonical: &[Word],
) -> Result<Vec<DefinitionRecord>, HarvestError> {
    let map = match strategy {
        DefinitionStrategy::Line => scanner.line_definitions(pages, canonical)?,
        DefinitionStrategy::Flattened => scanner.flattened_definitions(pages),
    };

    let missing = strategy
        .reports_missing()
        .then_some(scanner.config().missing_definition.as_str());
    let canonical = (!canonical.is_empty()).then_some(canonical);

    Ok(definition_records(&map, canonical, missing))
}
