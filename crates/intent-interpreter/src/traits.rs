use crate::TaggedToken;

/// Splits a sentence into word and punctuation tokens
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Assigns part-of-speech tags; output is positionally aligned with `tokens`
pub trait Tagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}

/// Reduces a word to its root form
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}
