//! Page planning: which word goes on which page, and where
//!
//! Planning is pure geometry. Nothing here touches lopdf, so the layout
//! arithmetic can be tested without parsing PDFs.

use crate::error::TileError;
use crate::layout::TileLayout;
use serde::Serialize;
use word_types::{LetterPoints, WordEntry};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TilePlacement {
    pub letter: char,
    pub points: u8,
    pub rect: Rect,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordPlacement<'a> {
    pub entry: &'a WordEntry,
    pub row: usize,
    pub column: usize,
    pub tiles: Vec<TilePlacement>,
    /// Present only when the layout renders definitions
    pub definition_box: Option<Rect>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PagePlan<'a> {
    /// 1-indexed
    pub number: usize,
    pub words: Vec<WordPlacement<'a>>,
}

/// Number of pages needed for `word_count` words
pub fn page_count(word_count: usize, words_per_page: usize) -> usize {
    word_count.div_ceil(words_per_page)
}

/// Lay out every entry, filling slots row by row and starting a new page
/// when the current one is full.
pub fn plan_pages<'a>(
    entries: &'a [WordEntry],
    layout: &TileLayout,
    points: &LetterPoints,
) -> Result<Vec<PagePlan<'a>>, TileError> {
    if entries.is_empty() {
        return Err(TileError::NoWords);
    }
    layout.validate()?;

    let per_page = layout.words_per_page();
    let mut pages = Vec::with_capacity(page_count(entries.len(), per_page));

    for (page_idx, chunk) in entries.chunks(per_page).enumerate() {
        let words = chunk
            .iter()
            .enumerate()
            .map(|(slot, entry)| {
                place_word(entry, slot / layout.columns, slot % layout.columns, layout, points)
            })
            .collect::<Result<Vec<_>, _>>()?;

        pages.push(PagePlan {
            number: page_idx + 1,
            words,
        });
    }

    Ok(pages)
}

fn place_word<'a>(
    entry: &'a WordEntry,
    row: usize,
    column: usize,
    layout: &TileLayout,
    points: &LetterPoints,
) -> Result<WordPlacement<'a>, TileError> {
    let column_width = layout.column_width();
    let column_left = layout.margin_x + column as f32 * column_width;
    let word_width = layout.word_width(entry.word.len());

    if word_width > column_width {
        return Err(TileError::WordTooWide {
            word: entry.word.to_string(),
            needed: word_width,
            available: column_width,
        });
    }

    // Tiles are centred in their column unless a definition box shares it
    let x = match layout.definitions {
        Some(_) => column_left,
        None => column_left + (column_width - word_width) / 2.0,
    };
    let y = layout.row_baseline(row);

    let step = layout.tile_size + layout.tile_spacing;
    let tiles = entry
        .word
        .letters()
        .enumerate()
        .map(|(i, letter)| TilePlacement {
            letter,
            points: points.points(letter).unwrap_or(0),
            rect: Rect {
                x: x + i as f32 * step,
                y,
                width: layout.tile_size,
                height: layout.tile_size,
            },
        })
        .collect();

    let definition_box = layout.definitions.as_ref().map(|style| {
        let box_x = x + word_width + style.gap;
        let top = y + layout.tile_size;
        Rect {
            x: box_x,
            y: top - style.box_height,
            width: (column_left + column_width - box_x).max(0.0),
            height: style.box_height,
        }
    });

    Ok(WordPlacement {
        entry,
        row,
        column,
        tiles,
        definition_box,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use word_types::{Word, WordEntry};

    proptest! {
        /// Property: every page holds at most words_per_page words and the
        /// page count is exactly ceil(n / words_per_page)
        #[test]
        fn pagination_is_exact(n in 1usize..200, grid in any::<bool>()) {
            let layout = if grid { TileLayout::grid() } else { TileLayout::annotated() };
            let entries: Vec<WordEntry> = (0..n)
                .map(|_| WordEntry::new(Word::new("MUUMUUS").unwrap()))
                .collect();
            let pages = plan_pages(&entries, &layout, &LetterPoints::english()).unwrap();

            let per_page = layout.words_per_page();
            prop_assert_eq!(pages.len(), (n + per_page - 1) / per_page);
            prop_assert!(pages.iter().all(|p| p.words.len() <= per_page));
            prop_assert_eq!(pages.iter().map(|p| p.words.len()).sum::<usize>(), n);
        }
    }
}
