//! Shared word types
//!
//! Words, definitions and the letter point table used by both the tile
//! renderer and the PDF word harvester.

pub mod points;
pub mod sample;
pub mod types;
pub mod word_file;

pub use points::LetterPoints;
pub use sample::{sample_entries, sample_words, SAMPLE_WORDS};
pub use types::{Definition, Word, WordEntry, WordError};
pub use word_file::parse_word_file;
