use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("Word is empty")]
    Empty,

    #[error("Invalid character {found:?} in word {word:?} (expected A-Z)")]
    InvalidCharacter { word: String, found: char },

    #[error("Line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}

/// An uppercase Latin word, e.g. `MUUMUUS`.
///
/// Only the character set is checked. Whether the word is a real
/// dictionary word, or has any particular length, is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(found) = text.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacter { word: text, found });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of tiles needed to spell the word
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

/// Free-text definition attached to a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Definition(String);

impl Definition {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A word with its (optional) definition, the unit the renderer lays out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: Word,
    pub definition: Option<Definition>,
}

impl WordEntry {
    pub fn new(word: Word) -> Self {
        Self {
            word,
            definition: None,
        }
    }

    pub fn with_definition(word: Word, definition: impl Into<String>) -> Self {
        Self {
            word,
            definition: Some(Definition::new(definition)),
        }
    }
}
