//! Action catalogue: synonym sets of command verbs and their extraction rules

use crate::error::CatalogueError;
use crate::lexicon::{synonym_lines, Lexicon, LexiconEntry};
use crate::rules::Rule;

pub const DEFAULT_ACTIONS: &str = include_str!("../data/actions.txt");

/// A catalogue line that was dropped at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub canonical: String,
    pub reason: String,
}

/// Immutable word → action lookup built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCatalogue {
    lexicon: Lexicon,
    rules: Vec<Rule>,
    skipped: Vec<SkippedLine>,
}

impl ActionCatalogue {
    /// Build from catalogue text. Lines whose first word names no rule are
    /// reported and dropped without consuming a set index.
    pub fn parse(source: &str) -> Result<Self, CatalogueError> {
        let mut accepted = Vec::new();
        let mut rules = Vec::new();
        let mut skipped = Vec::new();

        for line in synonym_lines(source) {
            let Some(canonical) = line.canonical() else {
                continue;
            };
            match canonical.parse::<Rule>() {
                Ok(rule) => {
                    tracing::trace!(line = line.line_number, %rule, "action line registered");
                    rules.push(rule);
                    accepted.push(line);
                }
                Err(reason) => {
                    tracing::error!(
                        line = line.line_number,
                        text = %line.words.join(", "),
                        %reason,
                        "action line skipped"
                    );
                    skipped.push(SkippedLine {
                        line_number: line.line_number,
                        canonical: canonical.to_string(),
                        reason,
                    });
                }
            }
        }

        let lexicon = Lexicon::from_lines(accepted)?;
        tracing::debug!(
            sets = lexicon.set_count(),
            words = lexicon.len(),
            skipped = skipped.len(),
            "action catalogue built"
        );
        Ok(Self {
            lexicon,
            rules,
            skipped,
        })
    }

    /// Catalogue built from the action list shipped with the crate
    pub fn embedded() -> Result<Self, CatalogueError> {
        Self::parse(DEFAULT_ACTIONS)
    }

    /// Binary search for an exact lowercase word, returning its set index
    pub fn lookup(&self, word: &str) -> Option<usize> {
        self.lexicon.lookup(word)
    }

    pub fn canonical(&self, set_index: usize) -> Option<&str> {
        self.lexicon.canonical(set_index)
    }

    pub fn rule_for(&self, set_index: usize) -> Option<Rule> {
        self.rules.get(set_index).copied()
    }

    pub fn canonical_names(&self) -> &[String] {
        self.lexicon.canonical_names()
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        self.lexicon.entries()
    }

    pub fn synonyms(&self, set_index: usize) -> Vec<&str> {
        self.lexicon.synonyms(set_index)
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }
}
