//! Scrabble-style tile rendering
//!
//! This crate lays out words as rows of lettered tiles and writes them to a
//! paginated PDF using lopdf.
//!
//! Two steps, usable separately:
//! - `plan_pages`: pure layout arithmetic (which slot, which coordinates)
//! - `TileRenderer::render`: turns the plan into PDF bytes

pub mod error;
pub mod layout;
pub mod metrics;
pub mod plan;
pub mod render;

pub use error::TileError;
pub use layout::{DefinitionStyle, Rgb, TileLayout};
pub use plan::{page_count, plan_pages, PagePlan, Rect, TilePlacement, WordPlacement};
pub use render::{render_tiles, RenderMetrics, RenderedDocument, TileRenderer};

/// Parse PDF bytes and return page count
pub fn get_page_count(bytes: &[u8]) -> Result<u32, TileError> {
    let doc =
        lopdf::Document::load_mem(bytes).map_err(|e| TileError::ParseError(e.to_string()))?;
    Ok(doc.get_pages().len() as u32)
}
