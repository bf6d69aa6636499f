//! Built-in list of reduplicated seven-letter words
//!
//! This is the canonical order used when writing definition files and the
//! default input for the tile generator.

use crate::types::{Word, WordEntry};

pub const SAMPLE_WORDS: [&str; 50] = [
    "AKEAKES", "ARAARAS", "ATAATAS", "ATLATLS", "BEEBEES", //
    "BERBERS", "BONBONS", "BOOBOOS", "BOUBOUS", "BUIBUIS", //
    "BULBULS", "CANCANS", "CHICHIS", "CHOCHOS", "DIKDIKS", //
    "DOODOOS", "DUMDUMS", "FURFURS", "GRIGRIS", "GRUGRUS", //
    "HUMHUMS", "JIGJIGS", "KAIKAIS", "KIEKIES", "KUMKUMS", //
    "LABLABS", "LOGLOGS", "MAOMAOS", "MOTMOTS", "MULMULS", //
    "MURMURS", "MUUMUUS", "NEINEIS", "PAWPAWS", "PIOPIOS", //
    "PIUPIUS", "POMPOMS", "SARSARS", "SEMSEMS", "SIKSIKS", //
    "TARTARS", "TOETOES", "TOITOIS", "TSETSES", "TSKTSKS", //
    "TUATUAS", "TZETZES", "TZITZIS", "WEEWEES", "ZOOZOOS", //
];

const SAMPLE_DEFINITIONS: [(&str, &str); 4] = [
    ("MUUMUUS", "a loose Hawaiian dress"),
    ("TOETOES", "tall grass in New Zealand"),
    ("MAOMAOS", "Chinese revolutionary soldiers"),
    ("NEINEIS", "a type of goosefish"),
];

pub fn sample_words() -> Vec<Word> {
    SAMPLE_WORDS
        .iter()
        .filter_map(|w| Word::new(*w).ok())
        .collect()
}

/// The sample list as renderer entries, with the definitions we ship
pub fn sample_entries() -> Vec<WordEntry> {
    sample_words()
        .into_iter()
        .map(|word| {
            match SAMPLE_DEFINITIONS
                .iter()
                .find(|(w, _)| *w == word.as_str())
            {
                Some((_, def)) => WordEntry::with_definition(word, *def),
                None => WordEntry::new(word),
            }
        })
        .collect()
}
