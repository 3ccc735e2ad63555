//! Lightweight default tokenizer, tagger and stemmer
//!
//! These cover the short imperative sentences a robot receives. Hosts that
//! have a statistical tagger can plug it in through the [`Tagger`] trait.

use crate::{Stemmer, TaggedToken, Tagger, Tokenizer};
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};
use std::collections::HashMap;

/// Word/punctuation tokenizer
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = Regex::new(r"[\p{L}\p{N}]+(?:'\p{L}+)?|[^\s\p{L}\p{N}]")?;
        Ok(Self { pattern })
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any",
];
const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself", "yourself",
];
// "her" is ambiguous; the possessive reading is the common one in commands
const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];
const PREPOSITIONS: &[&str] = &[
    "with", "about", "in", "on", "at", "into", "onto", "from", "of", "for", "by", "near",
    "behind", "under", "over", "toward", "towards", "through", "around", "inside", "outside",
];
const WH_PRONOUNS: &[&str] = &["what", "who", "whom", "which"];
const WH_ADVERBS: &[&str] = &["how", "when", "where", "why"];
const MODALS: &[&str] = &["can", "could", "will", "would", "should", "shall", "may", "must"];
const ADVERBS: &[&str] = &[
    "left", "right", "up", "down", "forward", "backward", "back", "here", "there", "now",
    "again", "away", "slowly", "quickly",
];
const CONJUNCTIONS: &[&str] = &["and", "or", "but"];
const VERBS: &[&str] = &[
    "show", "teach", "demonstrate", "move", "go", "walk", "drive", "turn", "twist", "rotate",
    "spin", "stop", "halt", "freeze", "follow", "watch", "track", "talk", "speak", "tell", "chat",
    "play", "start", "wash", "clean", "rinse", "scrub", "brush", "cook", "prepare", "bake", "tie",
    "do", "want", "make", "eat", "drink", "open", "close", "get", "put", "take", "give", "use",
    "see", "come", "find", "help", "look",
];

/// Closed-class word lists plus a verb lexicon; unknown words are nouns.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    overrides: HashMap<String, String>,
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a tag for specific words
    pub fn with_words<I, S>(mut self, tag: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.overrides
                .insert(word.as_ref().to_lowercase(), tag.to_string());
        }
        self
    }

    fn tag_word(&self, word: &str, prev: Option<&str>) -> String {
        let lower = word.to_lowercase();
        if let Some(tag) = self.overrides.get(&lower) {
            return tag.clone();
        }
        let w = lower.as_str();

        let tag = if w == "to" {
            "TO"
        } else if DETERMINERS.contains(&w) {
            "DT"
        } else if PRONOUNS.contains(&w) {
            "PRP"
        } else if POSSESSIVES.contains(&w) {
            "PRP$"
        } else if PREPOSITIONS.contains(&w) {
            "IN"
        } else if WH_PRONOUNS.contains(&w) {
            "WP"
        } else if WH_ADVERBS.contains(&w) {
            "WRB"
        } else if MODALS.contains(&w) {
            "MD"
        } else if CONJUNCTIONS.contains(&w) {
            "CC"
        } else if ADVERBS.contains(&w) {
            "RB"
        } else if w == "is" || w == "does" || w == "has" {
            "VBZ"
        } else if w == "am" || w == "are" {
            "VBP"
        } else if VERBS.contains(&w) {
            match prev {
                Some("PRP") | Some("NNS") => "VBP",
                _ => "VB",
            }
        } else if w.chars().all(|c| c.is_ascii_digit()) {
            "CD"
        } else if !w.chars().any(char::is_alphanumeric) {
            return word.to_string();
        } else if w.len() > 3 && w.ends_with('s') && !w.ends_with("ss") {
            "NNS"
        } else {
            "NN"
        };
        tag.to_string()
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut out: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let prev = out.last().map(|t| t.tag.as_str());
            let tag = self.tag_word(token, prev);
            out.push(TaggedToken::new(token.clone(), tag));
        }
        out
    }
}

/// Porter2 (Snowball English) stemmer
pub struct EnglishStemmer {
    inner: SnowballStemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnglishStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishStemmer").finish_non_exhaustive()
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        // snowball expects lowercase input
        self.inner.stem(&word.to_lowercase()).into_owned()
    }
}
