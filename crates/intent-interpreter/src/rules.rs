//! Per-action role extraction
//!
//! Every rule scans the tagged sentence (with the action word already
//! removed) left to right and fills an [`ObjectDict`].

use crate::shown::ShownWordCatalogue;
use crate::{ObjectDict, Role, Stemmer, TaggedToken};
use std::fmt;
use std::str::FromStr;

/// Words that name a direction regardless of how the tagger labelled them
pub const DIRECTION_WORDS: &[&str] = &["left", "right", "up", "down", "forward", "backward"];

const DIRECTION_TAGS: &[&str] = &["VBD", "NN", "IN", "RB"];

/// Extraction rule selected by a synonym set's canonical name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Follow,
    Move,
    Turn,
    Stop,
    Talk,
    Show,
}

impl Rule {
    pub const ALL: [Rule; 6] = [
        Rule::Follow,
        Rule::Move,
        Rule::Turn,
        Rule::Stop,
        Rule::Talk,
        Rule::Show,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Follow => "follow",
            Rule::Move => "move",
            Rule::Turn => "turn",
            Rule::Stop => "stop",
            Rule::Talk => "talk",
            Rule::Show => "show",
        }
    }

    pub fn from_name(name: &str) -> Option<Rule> {
        Rule::ALL.into_iter().find(|r| r.name() == name)
    }

    pub fn extract(&self, sent: &[TaggedToken], ctx: &RuleContext<'_>) -> ObjectDict {
        match self {
            Rule::Follow => extract_follow(sent),
            Rule::Move | Rule::Turn => extract_move(sent),
            Rule::Stop => ObjectDict::new(),
            Rule::Talk => extract_talk(sent),
            Rule::Show => extract_show(sent, ctx),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::from_name(&s.trim().to_lowercase())
            .ok_or_else(|| format!("no extraction rule named '{s}'"))
    }
}

/// Shared lookups needed by rules that canonicalise words
pub struct RuleContext<'a> {
    pub shown: &'a ShownWordCatalogue,
    pub stemmer: &'a dyn Stemmer,
}

/// First noun is the person to follow, the second the place to follow them to.
fn extract_follow(sent: &[TaggedToken]) -> ObjectDict {
    let mut objects = ObjectDict::new();
    let mut nouns = sent.iter().filter(|t| t.is_noun());
    if let Some(person) = nouns.next() {
        objects.insert(Role::Person, person.word.clone());
    }
    if let Some(place) = nouns.next() {
        objects.insert(Role::Place, place.word.clone());
    }
    objects
}

fn is_direction_word(token: &TaggedToken) -> bool {
    DIRECTION_WORDS.contains(&token.word.to_lowercase().as_str())
        && DIRECTION_TAGS.contains(&token.tag.as_str())
}

/// Nouns after a preposition are places, before one they are directions.
fn extract_move(sent: &[TaggedToken]) -> ObjectDict {
    let mut objects = ObjectDict::new();
    let mut prep_found = false;

    for token in sent {
        if is_direction_word(token) {
            objects.insert(Role::Direction, token.word.clone());
        } else if token.is_preposition() {
            prep_found = true;
        } else if token.is_noun() {
            let role = if prep_found {
                Role::Place
            } else {
                Role::Direction
            };
            objects.insert(role, token.word.clone());
        }
    }
    objects
}

/// The noun after "about" is the topic, after any other preposition the person.
fn extract_talk(sent: &[TaggedToken]) -> ObjectDict {
    let mut objects = ObjectDict::new();
    let mut prep_found = false;
    let mut about_found = false;

    for token in sent {
        let is_about = token.word.eq_ignore_ascii_case("about");
        if is_about {
            about_found = true;
        } else if token.is_preposition() {
            prep_found = true;
        }

        if token.is_noun() {
            if prep_found && !about_found {
                objects.insert(Role::Person, token.word.clone());
                prep_found = false;
            } else if about_found && !prep_found {
                objects.insert(Role::Topic, token.word.clone());
                about_found = false;
            } else {
                // later unknowns overwrite earlier ones
                objects.insert(Role::Unknown, token.word.clone());
            }
        }
    }
    objects
}

/// Infinitive verb is the shown action, determiner-led noun the object,
/// any other noun the person being shown.
fn extract_show(sent: &[TaggedToken], ctx: &RuleContext<'_>) -> ObjectDict {
    let mut objects = ObjectDict::new();
    let mut det_found = false;
    let mut to_found = false;

    for token in sent {
        match token.tag.as_str() {
            "TO" => to_found = true,
            "DT" => det_found = true,
            _ if token.is_noun() => {
                let role = if det_found { Role::Object } else { Role::Person };
                objects.insert(role, token.word.clone());
            }
            "VB" if to_found => {
                objects.insert(Role::ShowAction, token.word.clone());
                // the noun after "to <verb>" is what the verb acts on
                det_found = true;
            }
            _ => {}
        }
    }

    if let Some(word) = objects.get_mut(&Role::Object) {
        *word = ctx.shown.resolve_object(word, ctx.stemmer);
    }
    if let Some(word) = objects.get_mut(&Role::ShowAction) {
        *word = ctx.shown.resolve_action(word, ctx.stemmer);
    }

    if to_found {
        let title = match (objects.get(&Role::ShowAction), objects.get(&Role::Object)) {
            (Some(action), Some(object)) => Some(format!("{action}-{object}")),
            (action, object) => {
                tracing::warn!(
                    has_action = action.is_some(),
                    has_object = object.is_some(),
                    "video title needs both a shown action and an object"
                );
                None
            }
        };
        if let Some(title) = title {
            objects.insert(Role::VideoTitle, title);
        }
    }
    objects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnglishStemmer;

    fn sent(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
        pairs.iter().map(|(w, t)| TaggedToken::new(*w, *t)).collect()
    }

    fn run(rule: Rule, pairs: &[(&str, &str)]) -> ObjectDict {
        let shown = ShownWordCatalogue::parse("wash, clean\nplay", "hands, hand\ntennis").unwrap();
        let stemmer = EnglishStemmer::new();
        let ctx = RuleContext {
            shown: &shown,
            stemmer: &stemmer,
        };
        rule.extract(&sent(pairs), &ctx)
    }

    fn dict(pairs: &[(Role, &str)]) -> ObjectDict {
        pairs.iter().map(|(r, w)| (*r, w.to_string())).collect()
    }

    #[test]
    fn test_rule_names() {
        for rule in Rule::ALL {
            assert_eq!(Rule::from_name(rule.name()), Some(rule));
        }
        assert_eq!("Talk".parse::<Rule>(), Ok(Rule::Talk));
        assert!("play".parse::<Rule>().is_err());
    }

    #[test]
    fn test_follow_person_then_place() {
        let objects = run(
            Rule::Follow,
            &[("jonathan", "NNP"), ("to", "TO"), ("the", "DT"), ("kitchen", "NN"), ("now", "RB"), ("him", "PRP")],
        );
        assert_eq!(
            objects,
            dict(&[(Role::Person, "jonathan"), (Role::Place, "kitchen")])
        );
    }

    #[test]
    fn test_follow_pronoun() {
        assert_eq!(run(Rule::Follow, &[("me", "PRP")]), dict(&[(Role::Person, "me")]));
    }

    #[test]
    fn test_move_place_after_preposition() {
        let objects = run(Rule::Move, &[("to", "TO"), ("the", "DT"), ("bathroom", "NN")]);
        assert_eq!(objects, dict(&[(Role::Place, "bathroom")]));
    }

    #[test]
    fn test_move_direction_words() {
        assert_eq!(run(Rule::Move, &[("left", "VBD")]), dict(&[(Role::Direction, "left")]));
        assert_eq!(
            run(Rule::Move, &[("to", "TO"), ("the", "DT"), ("right", "NN")]),
            dict(&[(Role::Direction, "right")])
        );
        // a direction word under an unexpected tag is not special-cased
        assert_eq!(run(Rule::Move, &[("up", "RP")]), ObjectDict::new());
    }

    #[test]
    fn test_move_bare_noun_is_direction() {
        assert_eq!(run(Rule::Move, &[("north", "NN")]), dict(&[(Role::Direction, "north")]));
    }

    #[test]
    fn test_turn_matches_move() {
        let pairs = [("around", "IN"), ("the", "DT"), ("corner", "NN")];
        assert_eq!(run(Rule::Turn, &pairs), run(Rule::Move, &pairs));
    }

    #[test]
    fn test_stop_is_empty() {
        assert!(run(Rule::Stop, &[("now", "RB"), ("robot", "NN")]).is_empty());
    }

    #[test]
    fn test_talk_person_and_topic() {
        let objects = run(
            Rule::Talk,
            &[("with", "IN"), ("brandon", "NNP"), ("about", "IN"), ("computers", "NNS")],
        );
        assert_eq!(
            objects,
            dict(&[(Role::Person, "brandon"), (Role::Topic, "computers")])
        );
    }

    #[test]
    fn test_talk_about_is_case_insensitive() {
        let objects = run(Rule::Talk, &[("About", "IN"), ("movies", "NNS")]);
        assert_eq!(objects, dict(&[(Role::Topic, "movies")]));
    }

    #[test]
    fn test_talk_unknown_overwritten() {
        let objects = run(Rule::Talk, &[("robots", "NNS"), ("and", "CC"), ("humans", "NNS")]);
        assert_eq!(objects, dict(&[(Role::Unknown, "humans")]));
    }

    #[test]
    fn test_talk_both_flags_unknown() {
        // "about" then another preposition leaves no clear role for the noun
        let objects = run(Rule::Talk, &[("about", "IN"), ("with", "IN"), ("robots", "NNS")]);
        assert_eq!(objects, dict(&[(Role::Unknown, "robots")]));
    }

    #[test]
    fn test_show_full_title() {
        let objects = run(
            Rule::Show,
            &[("me", "PRP"), ("how", "WRB"), ("to", "TO"), ("clean", "VB"), ("my", "PRP$"), ("hand", "NN")],
        );
        assert_eq!(
            objects,
            dict(&[
                (Role::Person, "me"),
                (Role::ShowAction, "wash"),
                (Role::Object, "hands"),
                (Role::VideoTitle, "wash-hands"),
            ])
        );
    }

    #[test]
    fn test_show_object_only() {
        let objects = run(Rule::Show, &[("the", "DT"), ("tennis", "NN")]);
        assert_eq!(objects, dict(&[(Role::Object, "tennis")]));
    }

    #[test]
    fn test_show_missing_object_omits_title() {
        let objects = run(Rule::Show, &[("me", "PRP"), ("to", "TO"), ("play", "VB")]);
        assert_eq!(
            objects,
            dict(&[(Role::Person, "me"), (Role::ShowAction, "play")])
        );
    }

    #[test]
    fn test_show_verb_without_to_ignored() {
        let objects = run(Rule::Show, &[("me", "PRP"), ("play", "VB")]);
        assert_eq!(objects, dict(&[(Role::Person, "me")]));
    }
}
