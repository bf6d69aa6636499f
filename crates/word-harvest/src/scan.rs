//! Candidate word and definition scanning
//!
//! Page text has no structure we can rely on, so everything here is pattern
//! matching. The patterns themselves come from `ScanConfig` so a change in
//! matching rules shows up in configuration rather than in code.

use crate::definitions::DefinitionMap;
use crate::error::HarvestError;
use crate::extract::{PageContent, TextBackend};
use crate::redup::is_reduplicated;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};
use word_types::Word;

pub const DEFAULT_WORD_PATTERN: &str = r"\b[A-Z]{7}\b";
pub const MISSING_DEFINITION: &str = "Definition not found.";

lazy_static! {
    /// Seven uppercase letters between word boundaries
    static ref SEVEN_LETTER_WORD: Regex = Regex::new(DEFAULT_WORD_PATTERN).unwrap();

    /// Seven-letter word, whitespace, then everything up to the next `[`
    static ref SEVEN_LETTER_DEFINITION: Regex =
        Regex::new(&flattened_pattern(DEFAULT_WORD_PATTERN, '[')).unwrap();
}

/// Matching rules for the harvester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Regex for a candidate word
    pub word_pattern: String,
    /// Matches of any other length are discarded
    pub word_length: usize,
    /// Flattened definitions stop before this character
    pub definition_terminator: char,
    /// Stripped from the end of flattened definitions
    pub trailing_punctuation: String,
    /// Written for canonical words the line strategy couldn't find
    pub missing_definition: String,
    /// Only keep flattened matches that pass the reduplication test
    pub require_reduplication: bool,
    pub backend: TextBackend,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            word_pattern: DEFAULT_WORD_PATTERN.to_string(),
            word_length: 7,
            definition_terminator: '[',
            trailing_punctuation: ":.;,".to_string(),
            missing_definition: MISSING_DEFINITION.to_string(),
            require_reduplication: true,
            backend: TextBackend::Lopdf,
        }
    }
}

fn flattened_pattern(word_pattern: &str, terminator: char) -> String {
    format!(
        r"(?P<word>{})\s+(?P<definition>[^{}]*)",
        word_pattern,
        regex::escape(&terminator.to_string())
    )
}

fn compile(pattern: &str) -> Result<Regex, HarvestError> {
    Regex::new(pattern).map_err(|e| HarvestError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Compiled matching rules
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScanConfig,
    word_re: Regex,
    flattened_re: Regex,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Result<Self, HarvestError> {
        let word_re = compile(&config.word_pattern)?;
        let flattened_re = compile(&flattened_pattern(
            &config.word_pattern,
            config.definition_terminator,
        ))?;

        Ok(Self {
            config,
            word_re,
            flattened_re,
        })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// A match is only a candidate if it has the configured length and is
    /// all uppercase A-Z, whatever the pattern let through
    fn as_candidate(&self, text: &str) -> Option<Word> {
        if text.len() != self.config.word_length {
            return None;
        }
        Word::new(text).ok()
    }

    /// Every word-shaped match on one page, in page order, duplicates kept
    pub fn candidates<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.word_re
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|m| self.as_candidate(m).is_some())
            .collect()
    }

    /// Reduplicated words across all pages, sorted and deduplicated
    pub fn harvest_words(&self, pages: &[PageContent]) -> Vec<Word> {
        let mut found = BTreeSet::new();

        for page in pages {
            let before = found.len();
            found.extend(
                self.candidates(&page.text)
                    .into_iter()
                    .filter(|w| is_reduplicated(w))
                    .filter_map(|w| self.as_candidate(w)),
            );
            debug!(
                page = page.page_number,
                new_words = found.len() - before,
                "Scanned page"
            );
        }

        info!(words = found.len(), "Harvested reduplicated words");
        found.into_iter().collect()
    }

    /// Line strategy: a listed word, the rest of its line, then the whole
    /// next line is its definition
    pub fn line_definitions(
        &self,
        pages: &[PageContent],
        targets: &[Word],
    ) -> Result<DefinitionMap, HarvestError> {
        let mut found = DefinitionMap::new();
        if targets.is_empty() {
            return Ok(found);
        }

        let alternation = targets
            .iter()
            .map(|w| regex::escape(w.as_str()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = compile(&format!(r"\b({})\b[^\n]*\n([^\n]+)", alternation))?;

        for page in pages {
            for caps in pattern.captures_iter(&page.text) {
                let (Some(word), Some(definition)) = (caps.get(1), caps.get(2)) else {
                    continue;
                };
                if let Ok(word) = Word::new(word.as_str()) {
                    found.insert_first(word, definition.as_str().trim());
                }
            }
        }

        info!(
            found = found.len(),
            targets = targets.len(),
            "Associated definitions by line"
        );
        Ok(found)
    }

    /// Flattened strategy: join each page's lines with spaces, then take
    /// everything after a word up to the terminator character
    pub fn flattened_definitions(&self, pages: &[PageContent]) -> DefinitionMap {
        let mut found = DefinitionMap::new();

        for page in pages {
            let flat = page.flattened();
            for caps in self.flattened_re.captures_iter(&flat) {
                let (Some(word), Some(definition)) = (caps.name("word"), caps.name("definition"))
                else {
                    continue;
                };
                let Some(word) = self.as_candidate(word.as_str()) else {
                    continue;
                };
                if self.config.require_reduplication && !is_reduplicated(word.as_str()) {
                    continue;
                }
                found.insert_first(word, self.clean_definition(definition.as_str()));
            }
        }

        info!(found = found.len(), "Associated definitions from flattened text");
        found
    }

    fn clean_definition<'t>(&self, raw: &'t str) -> &'t str {
        let punctuation: Vec<char> = self.config.trailing_punctuation.chars().collect();
        raw.trim()
            .trim_end_matches(punctuation.as_slice())
            .trim_end()
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            config: ScanConfig::default(),
            word_re: SEVEN_LETTER_WORD.clone(),
            flattened_re: SEVEN_LETTER_DEFINITION.clone(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::extract::PdfExtractor;
    use proptest::prelude::*;

    proptest! {
        /// Property: candidates are always exactly seven uppercase letters
        #[test]
        fn candidates_have_word_shape(text in "[A-Za-z0-9 ,.\\n\\[\\]]{0,200}") {
            for candidate in Scanner::default().candidates(&text) {
                prop_assert_eq!(candidate.len(), 7);
                prop_assert!(candidate.chars().all(|c| c.is_ascii_uppercase()));
            }
        }

        /// Property: a loose pattern still yields only configured-length words
        #[test]
        fn loose_pattern_still_filtered(text in "[A-Z ]{0,100}") {
            let scanner = Scanner::new(ScanConfig {
                word_pattern: r"[A-Z]+".to_string(),
                ..ScanConfig::default()
            })
            .unwrap();
            for candidate in scanner.candidates(&text) {
                prop_assert_eq!(candidate.len(), 7);
            }
        }

        /// Property: appending later conflicting pages never changes an
        /// existing definition
        #[test]
        fn first_definition_is_stable(extra in prop::collection::vec("[a-z ]{1,20}", 0..5)) {
            let scanner = Scanner::default();
            let mut pages = vec![PdfExtractor::create_page_content(1, "MUUMUUS a loose Hawaiian dress [n]")];
            for (i, def) in extra.iter().enumerate() {
                pages.push(PdfExtractor::create_page_content(i + 2, &format!("MUUMUUS {} [n]", def)));
            }
            let found = scanner.flattened_definitions(&pages);
            prop_assert_eq!(
                found.get(&Word::new("MUUMUUS").unwrap()),
                Some("a loose Hawaiian dress")
            );
        }
    }
}
