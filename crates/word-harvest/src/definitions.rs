//! Word → definition mapping with first-occurrence-wins inserts

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use word_types::{Definition, Word};

/// Which heuristic associates definitions with words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionStrategy {
    /// The line after the word
    #[default]
    Line,
    /// Text after the word up to the terminator, lines joined
    Flattened,
}

impl DefinitionStrategy {
    /// Line-based output lists every canonical word, filling gaps with a
    /// placeholder; flattened output only lists what was matched
    pub fn reports_missing(self) -> bool {
        matches!(self, DefinitionStrategy::Line)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DefinitionMap {
    entries: BTreeMap<Word, Definition>,
}

impl DefinitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the word already has a definition. Returns whether the
    /// definition was stored.
    pub fn insert_first(&mut self, word: Word, definition: &str) -> bool {
        if self.entries.contains_key(&word) {
            return false;
        }
        self.entries.insert(word, Definition::new(definition));
        true
    }

    pub fn get(&self, word: &Word) -> Option<&str> {
        self.entries.get(word).map(Definition::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in word order
    pub fn iter(&self) -> impl Iterator<Item = (&Word, &str)> {
        self.entries.iter().map(|(w, d)| (w, d.as_str()))
    }
}
