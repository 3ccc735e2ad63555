//! Sentence → intent pipeline

use crate::catalogue::ActionCatalogue;
use crate::error::{CatalogueError, Result};
use crate::matcher::find_action;
use crate::rules::RuleContext;
use crate::shown::ShownWordCatalogue;
use crate::text::{EnglishStemmer, LexiconTagger, RegexTokenizer};
use crate::{Intent, Stemmer, Tagger, Tokenizer};

/// Turns command sentences into intents.
///
/// Holds only immutable catalogues and stateless collaborators, so one
/// instance can serve any number of threads.
pub struct Interpreter {
    actions: ActionCatalogue,
    shown: ShownWordCatalogue,
    tokenizer: Box<dyn Tokenizer>,
    tagger: Box<dyn Tagger>,
    stemmer: Box<dyn Stemmer>,
    lowercase_input: bool,
}

impl Interpreter {
    /// Create an interpreter with the built-in tokenizer, tagger and stemmer
    pub fn new(actions: ActionCatalogue, shown: ShownWordCatalogue) -> Result<Self> {
        if actions.is_empty() {
            return Err(CatalogueError::NoValidLines.into());
        }
        Ok(Self {
            actions,
            shown,
            tokenizer: Box::new(RegexTokenizer::new()?),
            tagger: Box::new(LexiconTagger::new()),
            stemmer: Box::new(EnglishStemmer::new()),
            lowercase_input: true,
        })
    }

    /// Interpreter over the catalogues shipped with the crate
    pub fn embedded() -> Result<Self> {
        Self::new(ActionCatalogue::embedded()?, ShownWordCatalogue::embedded()?)
    }

    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    pub fn with_tagger(mut self, tagger: impl Tagger + 'static) -> Self {
        self.tagger = Box::new(tagger);
        self
    }

    pub fn with_stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = Box::new(stemmer);
        self
    }

    /// Keep the sentence's original case instead of lowercasing it first
    pub fn with_lowercase_input(mut self, lowercase: bool) -> Self {
        self.lowercase_input = lowercase;
        self
    }

    pub fn actions(&self) -> &ActionCatalogue {
        &self.actions
    }

    pub fn shown(&self) -> &ShownWordCatalogue {
        &self.shown
    }

    /// Interpret one command sentence
    pub fn interpret(&self, sentence: &str) -> Intent {
        let text = if self.lowercase_input {
            sentence.to_lowercase()
        } else {
            sentence.to_string()
        };

        let tokens = self.tokenizer.tokenize(&text);
        let Some(found) = find_action(tokens.as_slice(), &self.actions) else {
            tracing::info!(sentence = %text, "no known action in sentence");
            return Intent::not_found();
        };
        let (Some(action), Some(rule)) = (
            self.actions.canonical(found.set_index),
            self.actions.rule_for(found.set_index),
        ) else {
            return Intent::not_found();
        };

        let mut tagged = self.tagger.tag(&tokens);
        if found.position < tagged.len() {
            tagged.remove(found.position);
        } else {
            tracing::warn!(
                position = found.position,
                tagged = tagged.len(),
                "tagger output shorter than token list"
            );
        }
        tracing::debug!(?tagged, %action, "extracting roles");

        let ctx = RuleContext {
            shown: &self.shown,
            stemmer: self.stemmer.as_ref(),
        };
        let objects = rule.extract(&tagged, &ctx);
        Intent::action(action, objects)
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("actions", &self.actions.canonical_names())
            .field("lowercase_input", &self.lowercase_input)
            .finish_non_exhaustive()
    }
}
