//! Interpretation results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Message carried by the intent when no catalogue word is in the sentence
pub const ACTION_NOT_FOUND: &str = "Main action not found";

/// A word with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Nouns are `PRP` or any `NN*` tag
    pub fn is_noun(&self) -> bool {
        self.tag == "PRP" || self.tag.starts_with("NN")
    }

    pub fn is_preposition(&self) -> bool {
        self.tag == "TO" || self.tag == "IN"
    }
}

/// Semantic role of a word within a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Person,
    Place,
    Direction,
    Topic,
    Unknown,
    Object,
    ShowAction,
    VideoTitle,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Person => "person",
            Role::Place => "place",
            Role::Direction => "direction",
            Role::Topic => "topic",
            Role::Unknown => "unknown",
            Role::Object => "object",
            Role::ShowAction => "show_action",
            Role::VideoTitle => "video_title",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role → word mapping produced by an extraction rule
pub type ObjectDict = BTreeMap<Role, String>;

/// Final result of interpreting a sentence.
///
/// Serializes as a flat map: `{"action": .., <role>: ..}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Intent {
    Action {
        action: String,
        #[serde(flatten)]
        objects: ObjectDict,
    },
    Error {
        error: String,
    },
}

impl Intent {
    pub fn action(action: impl Into<String>, objects: ObjectDict) -> Self {
        Intent::Action {
            action: action.into(),
            objects,
        }
    }

    pub fn not_found() -> Self {
        Intent::Error {
            error: ACTION_NOT_FOUND.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Intent::Error { .. })
    }

    /// Canonical action name, absent for error intents
    pub fn action_name(&self) -> Option<&str> {
        match self {
            Intent::Action { action, .. } => Some(action),
            Intent::Error { .. } => None,
        }
    }

    pub fn get(&self, role: Role) -> Option<&str> {
        match self {
            Intent::Action { objects, .. } => objects.get(&role).map(String::as_str),
            Intent::Error { .. } => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
