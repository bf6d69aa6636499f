//! Letter point values printed in the corner of each tile

use crate::types::Word;
use serde::{Deserialize, Serialize};

/// Point value for each of the 26 Latin letters, indexed `A..=Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterPoints {
    values: [u8; 26],
}

impl LetterPoints {
    /// Standard English tile values
    pub const fn english() -> Self {
        Self {
            values: [
                1, 3, 3, 2, 1, 4, 2, 4, 1, 8, // A-J
                5, 1, 3, 1, 1, 3, 10, 1, 1, 1, // K-T
                1, 4, 4, 8, 4, 10, // U-Z
            ],
        }
    }

    pub const fn from_values(values: [u8; 26]) -> Self {
        Self { values }
    }

    /// Points for a single letter; `None` outside `A..=Z`
    pub fn points(&self, letter: char) -> Option<u8> {
        if letter.is_ascii_uppercase() {
            Some(self.values[(letter as u8 - b'A') as usize])
        } else {
            None
        }
    }

    /// Per-letter points, in spelling order
    pub fn word_points(&self, word: &Word) -> Vec<u8> {
        // Word guarantees A-Z, so every lookup hits
        word.letters().filter_map(|c| self.points(c)).collect()
    }

    pub fn word_score(&self, word: &Word) -> u32 {
        self.word_points(word).iter().map(|&p| u32::from(p)).sum()
    }
}

impl Default for LetterPoints {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_atlatls_points() {
        let table = LetterPoints::english();
        let word = Word::new("ATLATLS").unwrap();
        assert_eq!(table.word_points(&word), vec![1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(table.word_score(&word), 7);
    }

    #[test]
    fn test_high_value_letters() {
        let table = LetterPoints::english();
        assert_eq!(table.points('Q'), Some(10));
        assert_eq!(table.points('Z'), Some(10));
        assert_eq!(table.points('J'), Some(8));
        assert_eq!(table.points('X'), Some(8));
        assert_eq!(table.points('K'), Some(5));
    }

    #[test]
    fn test_points_in_spelling_order() {
        let table = LetterPoints::english();
        let word = Word::new("TZETZES").unwrap();
        assert_eq!(table.word_points(&word), vec![1, 10, 1, 1, 10, 1, 1]);
        assert_eq!(table.word_score(&word), 25);
    }

    #[test]
    fn test_non_letters_have_no_points() {
        let table = LetterPoints::english();
        assert_eq!(table.points('a'), None);
        assert_eq!(table.points('1'), None);
        assert_eq!(table.points(' '), None);
    }

    #[test]
    fn test_custom_table() {
        let table = LetterPoints::from_values([2; 26]);
        let word = Word::new("BONBONS").unwrap();
        assert_eq!(table.word_score(&word), 14);
    }
}
