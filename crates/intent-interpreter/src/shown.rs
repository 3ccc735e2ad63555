//! Vocabulary of actions and objects that can be demonstrated by a "show" command

use crate::error::CatalogueError;
use crate::lexicon::Lexicon;
use crate::Stemmer;

pub const DEFAULT_SHOWN_ACTIONS: &str = include_str!("../data/shown_actions.txt");
pub const DEFAULT_SHOWN_OBJECTS: &str = include_str!("../data/shown_objects.txt");

/// Demonstrable actions and objects, each a separate synonym lexicon
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShownWordCatalogue {
    actions: Lexicon,
    objects: Lexicon,
}

impl ShownWordCatalogue {
    pub fn new(actions: Lexicon, objects: Lexicon) -> Self {
        Self { actions, objects }
    }

    pub fn parse(actions: &str, objects: &str) -> Result<Self, CatalogueError> {
        Ok(Self::new(Lexicon::parse(actions)?, Lexicon::parse(objects)?))
    }

    /// Catalogue built from the vocabulary shipped with the crate
    pub fn embedded() -> Result<Self, CatalogueError> {
        Self::parse(DEFAULT_SHOWN_ACTIONS, DEFAULT_SHOWN_OBJECTS)
    }

    pub fn actions(&self) -> &Lexicon {
        &self.actions
    }

    pub fn objects(&self) -> &Lexicon {
        &self.objects
    }

    pub fn resolve_action(&self, word: &str, stemmer: &dyn Stemmer) -> String {
        resolve(&self.actions, word, stemmer)
    }

    pub fn resolve_object(&self, word: &str, stemmer: &dyn Stemmer) -> String {
        resolve(&self.objects, word, stemmer)
    }
}

/// Exact lookup, then one retry on the stem; falls back to the word itself.
fn resolve(lexicon: &Lexicon, word: &str, stemmer: &dyn Stemmer) -> String {
    let key = word.to_lowercase();
    if let Some(canonical) = lexicon.canonical_for(&key) {
        return canonical.to_string();
    }
    let root = stemmer.stem(&key);
    if let Some(canonical) = lexicon.canonical_for(&root) {
        tracing::debug!(%word, %root, %canonical, "resolved shown word through its stem");
        return canonical.to_string();
    }
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnglishStemmer;

    fn catalogue() -> ShownWordCatalogue {
        ShownWordCatalogue::parse("wash, clean, rinse\nplay", "hands, hand\ncar, automobile")
            .unwrap()
    }

    #[test]
    fn test_exact_synonym_resolves_to_canonical() {
        let shown = catalogue();
        let stemmer = EnglishStemmer::new();
        assert_eq!(shown.resolve_action("rinse", &stemmer), "wash");
        assert_eq!(shown.resolve_object("automobile", &stemmer), "car");
        assert_eq!(shown.resolve_object("hands", &stemmer), "hands");
    }

    #[test]
    fn test_stem_fallback() {
        let shown = catalogue();
        let stemmer = EnglishStemmer::new();
        assert_eq!(shown.resolve_action("cleaning", &stemmer), "wash");
        assert_eq!(shown.resolve_object("cars", &stemmer), "car");
    }

    #[test]
    fn test_stem_fallback_embedded() {
        let shown = ShownWordCatalogue::embedded().unwrap();
        let stemmer = EnglishStemmer::new();
        assert_eq!(shown.resolve_action("baked", &stemmer), "cook");
        assert_eq!(shown.resolve_action("tied", &stemmer), "tie");
        assert_eq!(shown.resolve_action("scrubbing", &stemmer), "wash");
    }

    #[test]
    fn test_unknown_word_kept() {
        let shown = catalogue();
        let stemmer = EnglishStemmer::new();
        assert_eq!(shown.resolve_object("bicycles", &stemmer), "bicycles");
        assert_eq!(shown.resolve_action("dance", &stemmer), "dance");
    }

    #[test]
    fn test_stem_is_tried_once() {
        let shown = catalogue();
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let counting = |w: &str| {
            calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            w.trim_end_matches('s').to_string()
        };
        assert_eq!(shown.resolve_object("boats", &counting), "boats");
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        // exact hits never reach the stemmer
        assert_eq!(shown.resolve_object("hand", &counting), "hands");
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn test_embedded_vocabulary() {
        let shown = ShownWordCatalogue::embedded().unwrap();
        assert_eq!(shown.actions().canonical_for("play"), Some("play"));
        assert_eq!(shown.objects().canonical_for("tennis"), Some("tennis"));
    }
}
