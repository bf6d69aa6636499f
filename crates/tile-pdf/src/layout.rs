//! Fixed page layouts for tile rendering
//!
//! All measurements are PDF points (1/72 inch) with the origin at the
//! bottom-left corner of the page.

use crate::error::TileError;
use serde::{Deserialize, Serialize};

/// US letter, portrait
pub const LETTER_WIDTH: f32 = 612.0;
pub const LETTER_HEIGHT: f32 = 792.0;

/// RGB colour with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);
    pub const BEIGE: Rgb = Rgb(0.96, 0.96, 0.86);
    pub const DARK_GRAY: Rgb = Rgb(0.66, 0.66, 0.66);
    pub const NAVY: Rgb = Rgb(0.13, 0.22, 0.42);
}

/// How definitions are drawn next to each word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionStyle {
    /// Horizontal gap between the last tile and the text box
    pub gap: f32,
    pub box_height: f32,
    pub font_size: f32,
    pub line_height: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_x: f32,
    pub margin_bottom: f32,

    pub header_height: f32,
    pub header_color: Rgb,
    pub header_text_color: Rgb,
    pub title_size: f32,

    pub tile_size: f32,
    pub tile_spacing: f32,
    pub tile_fill: Rgb,
    pub tile_stroke: Rgb,
    pub letter_size: f32,
    pub point_size: f32,

    pub columns: usize,
    pub rows_per_page: usize,
    pub row_height: f32,
    /// Space between the header band and the first row of tiles
    pub grid_top_gap: f32,

    /// `None` renders tiles only
    pub definitions: Option<DefinitionStyle>,
}

impl TileLayout {
    /// Two centred columns of tiles, twenty words per page
    pub fn grid() -> Self {
        Self {
            page_width: LETTER_WIDTH,
            page_height: LETTER_HEIGHT,
            margin_x: 40.0,
            margin_bottom: 40.0,
            header_height: 72.0,
            header_color: Rgb::NAVY,
            header_text_color: Rgb::WHITE,
            title_size: 22.0,
            tile_size: 30.0,
            tile_spacing: 5.0,
            tile_fill: Rgb::BEIGE,
            tile_stroke: Rgb::BLACK,
            letter_size: 16.0,
            point_size: 6.0,
            columns: 2,
            rows_per_page: 10,
            row_height: 62.0,
            grid_top_gap: 24.0,
            definitions: None,
        }
    }

    /// One column of tiles with a definition box to the right of each word
    pub fn annotated() -> Self {
        Self {
            columns: 1,
            rows_per_page: 8,
            row_height: 76.0,
            definitions: Some(DefinitionStyle {
                gap: 16.0,
                box_height: 64.0,
                font_size: 11.0,
                line_height: 13.0,
                color: Rgb::DARK_GRAY,
            }),
            ..Self::grid()
        }
    }

    pub fn words_per_page(&self) -> usize {
        self.columns * self.rows_per_page
    }

    pub fn column_width(&self) -> f32 {
        (self.page_width - 2.0 * self.margin_x) / self.columns as f32
    }

    /// Width of a run of `letters` adjacent tiles
    pub fn word_width(&self, letters: usize) -> f32 {
        if letters == 0 {
            return 0.0;
        }
        letters as f32 * self.tile_size + (letters - 1) as f32 * self.tile_spacing
    }

    /// Bottom edge of the tiles in `row` (0-indexed from the top)
    pub fn row_baseline(&self, row: usize) -> f32 {
        self.page_height
            - self.header_height
            - self.grid_top_gap
            - row as f32 * self.row_height
            - self.tile_size
    }

    /// Check the layout describes a grid that fits on its page
    pub fn validate(&self) -> Result<(), TileError> {
        if self.columns == 0 || self.rows_per_page == 0 {
            return Err(TileError::InvalidLayout(
                "columns and rows_per_page must be >= 1".into(),
            ));
        }
        if self.tile_size <= 0.0 || self.tile_spacing < 0.0 {
            return Err(TileError::InvalidLayout(format!(
                "tile size {} / spacing {} out of range",
                self.tile_size, self.tile_spacing
            )));
        }
        if self.row_height < self.tile_size {
            return Err(TileError::InvalidLayout(format!(
                "row height {} is smaller than tile size {}",
                self.row_height, self.tile_size
            )));
        }
        if self.column_width() <= 0.0 {
            return Err(TileError::InvalidLayout(
                "margins leave no room for columns".into(),
            ));
        }

        let last_row_bottom = self.row_baseline(self.rows_per_page - 1);
        if last_row_bottom < self.margin_bottom {
            return Err(TileError::InvalidLayout(format!(
                "{} rows of {}pt do not fit above the bottom margin",
                self.rows_per_page, self.row_height
            )));
        }

        if let Some(style) = &self.definitions {
            if style.line_height <= 0.0 || style.font_size <= 0.0 {
                return Err(TileError::InvalidLayout(
                    "definition font size and line height must be positive".into(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for TileLayout {
    fn default() -> Self {
        Self::grid()
    }
}
