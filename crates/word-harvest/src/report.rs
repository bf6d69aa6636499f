//! Output files: harvested word lists and definition listings

use crate::definitions::DefinitionMap;
use crate::error::HarvestError;
use serde::{Deserialize, Serialize};
use word_types::Word;

/// How a definition listing is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionFormat {
    /// `"definition",` per line.
    ///
    /// Embedded `"` and `\` are backslash-escaped, so a definition
    /// containing quotes is not written byte-for-byte.
    #[default]
    Quoted,
    /// `("WORD", "definition"),` per line
    Tuples,
    /// JSON array of `{ "word", "definition" }`
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionRecord {
    pub word: String,
    pub definition: String,
}

/// One word per line
pub fn word_list(words: &[Word]) -> String {
    words.iter().fold(String::new(), |mut out, word| {
        out.push_str(word.as_str());
        out.push('\n');
        out
    })
}

/// Rows in output order.
///
/// With `canonical`, rows follow that list: words without a definition get
/// `missing` if given and are skipped otherwise. Without it, every mapped
/// word is listed in sorted order.
pub fn definition_records(
    map: &DefinitionMap,
    canonical: Option<&[Word]>,
    missing: Option<&str>,
) -> Vec<DefinitionRecord> {
    let record = |word: &Word, definition: &str| DefinitionRecord {
        word: word.to_string(),
        definition: definition.to_string(),
    };

    match canonical {
        Some(words) => words
            .iter()
            .filter_map(|word| match (map.get(word), missing) {
                (Some(def), _) => Some(record(word, def)),
                (None, Some(placeholder)) => Some(record(word, placeholder)),
                (None, None) => None,
            })
            .collect(),
        None => map.iter().map(|(word, def)| record(word, def)).collect(),
    }
}

pub fn render_definitions(
    records: &[DefinitionRecord],
    format: DefinitionFormat,
) -> Result<String, HarvestError> {
    let mut out = String::new();

    match format {
        DefinitionFormat::Quoted => {
            for r in records {
                out.push_str(&format!("\"{}\",\n", escape(&r.definition)));
            }
        }
        DefinitionFormat::Tuples => {
            for r in records {
                out.push_str(&format!(
                    "(\"{}\", \"{}\"),\n",
                    escape(&r.word),
                    escape(&r.definition)
                ));
            }
        }
        DefinitionFormat::Json => {
            out = serde_json::to_string_pretty(records)
                .map_err(|e| HarvestError::SerializationError(e.to_string()))?;
            out.push('\n');
        }
    }

    Ok(out)
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
