//! Intent Interpreter for Robot Commands
//!
//! This crate turns a short command sentence ("show me how to wash my hands")
//! into an action name plus a map of semantic roles, ready for a robot
//! command dispatcher.

mod catalogue;
mod dispatch;
mod error;
mod intent;
mod interpreter;
mod lexicon;
mod loader;
mod matcher;
mod rules;
mod session;
mod shown;
mod text;
mod traits;

pub use catalogue::{ActionCatalogue, SkippedLine, DEFAULT_ACTIONS};
pub use dispatch::{Command, Side};
pub use error::{CatalogueError, InterpretError, Result};
pub use intent::{Intent, ObjectDict, Role, TaggedToken, ACTION_NOT_FOUND};
pub use interpreter::Interpreter;
pub use lexicon::{synonym_lines, Lexicon, LexiconEntry, SynonymLine};
pub use loader::{build_interpreter, load_action_catalogue, load_config, load_lexicon};
pub use matcher::{find_action, ActionMatch};
pub use rules::{Rule, RuleContext, DIRECTION_WORDS};
pub use session::{Session, SessionEvent, START_MESSAGE};
pub use shown::{ShownWordCatalogue, DEFAULT_SHOWN_ACTIONS, DEFAULT_SHOWN_OBJECTS};
pub use text::{EnglishStemmer, LexiconTagger, RegexTokenizer};
pub use traits::{Stemmer, Tagger, Tokenizer};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the interpreter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Action synonym catalogue; embedded list when unset
    pub actions_path: Option<PathBuf>,
    /// Demonstrable actions for "show" commands
    pub shown_actions_path: Option<PathBuf>,
    /// Demonstrable objects for "show" commands
    pub shown_objects_path: Option<PathBuf>,
    /// Lowercase sentences before interpretation
    pub lowercase_input: bool,
    pub session: SessionConfig,
    pub media: MediaConfig,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            actions_path: None,
            shown_actions_path: None,
            shown_objects_path: None,
            lowercase_input: true,
            session: SessionConfig::default(),
            media: MediaConfig::default(),
        }
    }
}

/// Phrases recognised by the listening session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub wake_word: String,
    pub dismiss_phrases: Vec<String>,
    pub farewell_phrases: Vec<String>,
    /// Ignore speech until the master controller sends `start`
    pub await_start: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            wake_word: "lily".to_string(),
            dismiss_phrases: vec!["never mind".to_string(), "nevermind".to_string()],
            farewell_phrases: vec!["goodbye".to_string(), "good bye".to_string()],
            await_start: false,
        }
    }
}

/// Where demonstration media lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    pub video_dir: PathBuf,
    pub image_dir: PathBuf,
    pub video_extensions: Vec<String>,
    pub image_extensions: Vec<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            video_dir: PathBuf::from("videos"),
            image_dir: PathBuf::from("images"),
            video_extensions: vec!["mov".to_string(), "mp4".to_string()],
            image_extensions: vec!["jpg".to_string(), "png".to_string(), "gif".to_string()],
        }
    }
}

/// Initialize the intent interpreter system
pub fn init() -> Result<()> {
    tracing::info!("Initializing Intent Interpreter system");
    Ok(())
}

/// Interpret a sentence with the embedded catalogues
pub fn interpret(sentence: &str) -> Result<Intent> {
    let interpreter = Interpreter::embedded()?;
    Ok(interpreter.interpret(sentence))
}
