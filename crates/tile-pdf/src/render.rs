//! PDF rendering of planned pages
//!
//! Builds the document object graph directly with lopdf: one content stream
//! per page, two standard Type1 fonts shared by every page.

use crate::error::TileError;
use crate::layout::{Rgb, TileLayout};
use crate::metrics::{encode_text, fit_text, text_width, Font};
use crate::plan::{plan_pages, PagePlan, Rect, WordPlacement};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use serde::Serialize;
use tracing::{debug, info};
use word_types::{LetterPoints, WordEntry};

/// Summary of a finished render
#[derive(Debug, Clone, Serialize)]
pub struct RenderMetrics {
    pub word_count: usize,
    pub page_count: usize,
    pub output_size_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub metrics: RenderMetrics,
}

/// Renders word tiles with a fixed layout and point table
pub struct TileRenderer {
    layout: TileLayout,
    points: LetterPoints,
    title: String,
}

impl TileRenderer {
    pub fn new(layout: TileLayout, points: LetterPoints) -> Self {
        Self {
            layout,
            points,
            title: "Reduplicated Words".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Render every entry into a complete PDF
    pub fn render(&self, entries: &[WordEntry]) -> Result<RenderedDocument, TileError> {
        let pages = plan_pages(entries, &self.layout, &self.points)?;
        let total_pages = pages.len();
        info!(
            words = entries.len(),
            pages = total_pages,
            "Rendering tile document"
        );

        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let resources = font_resources(&mut doc);
        let resources_id = doc.add_object(resources);

        let mut page_ids = Vec::with_capacity(total_pages);
        for page in &pages {
            let content = self.page_content(page, total_pages);
            let encoded = content
                .encode()
                .map_err(|e| TileError::EncodeError(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

            let page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(self.layout.page_width),
                    Object::Real(self.layout.page_height),
                ],
                "Contents" => content_id,
                "Resources" => resources_id,
            };
            page_ids.push(doc.add_object(page_dict));
            debug!(page = page.number, words = page.words.len(), "Page laid out");
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Count" => total_pages as i64,
            "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| TileError::SaveError(e.to_string()))?;

        Ok(RenderedDocument {
            metrics: RenderMetrics {
                word_count: entries.len(),
                page_count: total_pages,
                output_size_bytes: bytes.len(),
            },
            bytes,
        })
    }

    fn page_content(&self, page: &PagePlan<'_>, total_pages: usize) -> Content {
        let mut ops = Vec::new();
        self.draw_header(&mut ops);
        for placement in &page.words {
            self.draw_word(&mut ops, placement);
        }
        self.draw_footer(&mut ops, page.number, total_pages);
        Content { operations: ops }
    }

    fn draw_header(&self, ops: &mut Vec<Operation>) {
        let l = &self.layout;
        let band = Rect {
            x: 0.0,
            y: l.page_height - l.header_height,
            width: l.page_width,
            height: l.header_height,
        };
        fill_rect(ops, band, l.header_color);

        let baseline = band.y + (band.height - l.title_size) / 2.0 + l.title_size * 0.25;
        show_text(
            ops,
            Font::HelveticaBold,
            l.title_size,
            l.header_text_color,
            l.margin_x,
            baseline,
            &self.title,
        );
    }

    fn draw_word(&self, ops: &mut Vec<Operation>, placement: &WordPlacement<'_>) {
        let l = &self.layout;

        for tile in &placement.tiles {
            ops.push(Operation::new("q", vec![]));
            ops.push(set_fill(l.tile_fill));
            ops.push(set_stroke(l.tile_stroke));
            ops.push(Operation::new("w", vec![Object::Real(1.0)]));
            ops.push(rect_op(tile.rect));
            ops.push(Operation::new("B", vec![]));
            ops.push(Operation::new("Q", vec![]));

            // Letter centred in the tile
            let letter = tile.letter.to_string();
            let width = text_width(Font::HelveticaBold, &letter, l.letter_size);
            show_text(
                ops,
                Font::HelveticaBold,
                l.letter_size,
                Rgb::BLACK,
                tile.rect.x + (tile.rect.width - width) / 2.0,
                tile.rect.y + tile.rect.height / 2.0 - l.letter_size * 0.35,
                &letter,
            );

            // Point value in the lower-right corner
            let value = tile.points.to_string();
            let width = text_width(Font::Helvetica, &value, l.point_size);
            show_text(
                ops,
                Font::Helvetica,
                l.point_size,
                Rgb::BLACK,
                tile.rect.right() - width - 2.0,
                tile.rect.y + 2.0,
                &value,
            );
        }

        if let (Some(style), Some(area), Some(definition)) = (
            l.definitions.as_ref(),
            placement.definition_box,
            placement.entry.definition.as_ref(),
        ) {
            let max_lines = (area.height / style.line_height).floor() as usize;
            let lines = fit_text(
                Font::Helvetica,
                definition.as_str(),
                style.font_size,
                area.width,
                max_lines,
            );
            for (i, line) in lines.iter().enumerate() {
                let baseline = area.top() - style.font_size - i as f32 * style.line_height;
                show_text(
                    ops,
                    Font::Helvetica,
                    style.font_size,
                    style.color,
                    area.x,
                    baseline,
                    line,
                );
            }
        }
    }

    fn draw_footer(&self, ops: &mut Vec<Operation>, number: usize, total: usize) {
        let l = &self.layout;
        let label = format!("Page {} of {}", number, total);
        let size = 9.0;
        let width = text_width(Font::Helvetica, &label, size);
        show_text(
            ops,
            Font::Helvetica,
            size,
            Rgb::DARK_GRAY,
            (l.page_width - width) / 2.0,
            l.margin_bottom / 2.0,
            &label,
        );
    }
}

impl Default for TileRenderer {
    fn default() -> Self {
        Self::new(TileLayout::grid(), LetterPoints::english())
    }
}

/// Plan and render in one call
pub fn render_tiles(
    entries: &[WordEntry],
    layout: &TileLayout,
    points: &LetterPoints,
) -> Result<RenderedDocument, TileError> {
    TileRenderer::new(layout.clone(), *points).render(entries)
}

fn font_resources(doc: &mut Document) -> Dictionary {
    let mut fonts = Dictionary::new();
    for font in [Font::Helvetica, Font::HelveticaBold] {
        let id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => Object::Name(font.base_font().to_vec()),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name().to_vec(), id);
    }
    dictionary! { "Font" => fonts }
}

fn set_fill(color: Rgb) -> Operation {
    Operation::new(
        "rg",
        vec![
            Object::Real(color.0),
            Object::Real(color.1),
            Object::Real(color.2),
        ],
    )
}

fn set_stroke(color: Rgb) -> Operation {
    Operation::new(
        "RG",
        vec![
            Object::Real(color.0),
            Object::Real(color.1),
            Object::Real(color.2),
        ],
    )
}

fn rect_op(rect: Rect) -> Operation {
    Operation::new(
        "re",
        vec![
            Object::Real(rect.x),
            Object::Real(rect.y),
            Object::Real(rect.width),
            Object::Real(rect.height),
        ],
    )
}

fn fill_rect(ops: &mut Vec<Operation>, rect: Rect, color: Rgb) {
    ops.push(Operation::new("q", vec![]));
    ops.push(set_fill(color));
    ops.push(rect_op(rect));
    ops.push(Operation::new("f", vec![]));
    ops.push(Operation::new("Q", vec![]));
}

fn show_text(
    ops: &mut Vec<Operation>,
    font: Font,
    size: f32,
    color: Rgb,
    x: f32,
    y: f32,
    text: &str,
) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(set_fill(color));
    ops.push(Operation::new(
        "Tf",
        vec![
            Object::Name(font.resource_name().to_vec()),
            Object::Real(size),
        ],
    ));
    ops.push(Operation::new("Td", vec![Object::Real(x), Object::Real(y)]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(encode_text(text), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}
