//! Plain-text word list parsing
//!
//! One entry per line: `WORD` or `WORD,definition`. Blank lines and lines
//! starting with `#` are skipped. Any other malformed line fails the whole
//! parse with its 1-indexed line number.

use crate::types::{Word, WordEntry, WordError};

pub fn parse_word_file(content: &str) -> Result<Vec<WordEntry>, WordError> {
    let mut entries = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (word, definition) = match line.split_once(',') {
            Some((word, def)) => (word.trim(), Some(def.trim())),
            None => (line, None),
        };

        let word = Word::new(word).map_err(|e| WordError::MalformedLine {
            line: idx + 1,
            reason: e.to_string(),
        })?;

        entries.push(match definition {
            Some(def) if !def.is_empty() => WordEntry::with_definition(word, def),
            _ => WordEntry::new(word),
        });
    }

    Ok(entries)
}
