//! Sorted synonym tables built from comma-separated catalogue files
//!
//! Each non-blank line of a catalogue is one synonym set. Words are
//! normalised to lowercase and the first word of a line is the canonical
//! name of its set.

use crate::error::CatalogueError;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One word of a synonym set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub word: String,
    pub set_index: usize,
}

/// A parsed, non-blank catalogue line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymLine {
    /// 1-based line number in the source
    pub line_number: usize,
    pub words: Vec<String>,
}

impl SynonymLine {
    pub fn canonical(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

/// Split a catalogue source into synonym lines, dropping blank lines.
pub fn synonym_lines(source: &str) -> Vec<SynonymLine> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let line = raw.trim().to_lowercase();
            if line.is_empty() {
                return None;
            }
            let words: Vec<String> = line
                .split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect();
            if words.is_empty() {
                // e.g. a line made only of commas
                tracing::debug!(line = idx + 1, "catalogue line has no words");
                return None;
            }
            Some(SynonymLine {
                line_number: idx + 1,
                words,
            })
        })
        .collect()
}

/// Word → synonym-set lookup table with canonical names per set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    canonical: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon where every non-blank line becomes a synonym set.
    pub fn parse(source: &str) -> Result<Self, CatalogueError> {
        Self::from_lines(synonym_lines(source))
    }

    /// Build from already accepted lines; set indices follow the order given.
    pub fn from_lines(lines: Vec<SynonymLine>) -> Result<Self, CatalogueError> {
        let mut entries = Vec::new();
        let mut canonical = Vec::with_capacity(lines.len());
        let mut seen: HashMap<String, (usize, usize)> = HashMap::new();

        for line in lines {
            let set_index = canonical.len();
            let Some(first) = line.canonical() else {
                continue;
            };
            canonical.push(first.to_string());

            for word in line.words {
                match seen.get(&word) {
                    Some(&(idx, _)) if idx == set_index => {
                        tracing::debug!(%word, line = line.line_number, "word repeated within its own line");
                        continue;
                    }
                    Some(&(_, first_line)) => {
                        return Err(CatalogueError::DuplicateWord {
                            word,
                            first_line,
                            second_line: line.line_number,
                        });
                    }
                    None => {}
                }
                seen.insert(word.clone(), (set_index, line.line_number));
                entries.push(LexiconEntry { word, set_index });
            }
        }

        entries.sort_by(|a, b| a.word.cmp(&b.word));
        Ok(Self { entries, canonical })
    }

    /// Binary search for an exact (already lowercase) word.
    pub fn lookup(&self, word: &str) -> Option<usize> {
        let mut lo = 0;
        let mut hi = self.entries.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let entry = &self.entries[mid];
            match word.cmp(entry.word.as_str()) {
                Ordering::Less => hi = mid,
                Ordering::Greater => lo = mid + 1,
                Ordering::Equal => return Some(entry.set_index),
            }
        }
        None
    }

    pub fn canonical(&self, set_index: usize) -> Option<&str> {
        self.canonical.get(set_index).map(String::as_str)
    }

    /// Canonical name of the set containing `word`, if any
    pub fn canonical_for(&self, word: &str) -> Option<&str> {
        self.lookup(word).and_then(|idx| self.canonical(idx))
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn canonical_names(&self) -> &[String] {
        &self.canonical
    }

    /// Words belonging to one set, in sorted order
    pub fn synonyms(&self, set_index: usize) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.set_index == set_index)
            .map(|e| e.word.as_str())
            .collect()
    }

    /// Number of synonym sets
    pub fn set_count(&self) -> usize {
        self.canonical.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
