//! Glyph widths for the two standard fonts we draw with
//!
//! Widths are in 1/1000 em, taken from the Adobe core font metrics for
//! Helvetica and Helvetica-Bold. Characters outside printable ASCII are
//! drawn as `?` and measured as such.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    pub fn base_font(self) -> &'static [u8] {
        match self {
            Font::Helvetica => b"Helvetica",
            Font::HelveticaBold => b"Helvetica-Bold",
        }
    }

    /// Resource name used in page content streams
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            Font::Helvetica => b"F1",
            Font::HelveticaBold => b"F2",
        }
    }
}

// ASCII 32..=126
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n-z
    334, 260, 334, 584, // {..~
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a-m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n-z
    389, 280, 389, 584, // {..~
];

/// Map a character to the single byte we emit for it
pub fn encode_char(c: char) -> u8 {
    if (' '..='~').contains(&c) {
        c as u8
    } else {
        b'?'
    }
}

pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

pub fn char_width(font: Font, c: char, size: f32) -> f32 {
    let table = match font {
        Font::Helvetica => &HELVETICA,
        Font::HelveticaBold => &HELVETICA_BOLD,
    };
    let idx = (encode_char(c) - b' ') as usize;
    f32::from(table[idx]) * size / 1000.0
}

pub fn text_width(font: Font, text: &str, size: f32) -> f32 {
    text.chars().map(|c| char_width(font, c, size)).sum()
}

/// Greedy word wrap into lines no wider than `max_width`
///
/// A single word wider than the box gets a line of its own and overflows.
pub fn wrap_text(font: Font, text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if text_width(font, &candidate, size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Wrap and keep only the lines that fit `max_lines`
pub fn fit_text(font: Font, text: &str, size: f32, max_width: f32, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(font, text, size, max_width);
    if lines.len() > max_lines {
        debug!(
            dropped = lines.len() - max_lines,
            "Definition text overflows its box"
        );
        lines.truncate(max_lines);
    }
    lines
}
