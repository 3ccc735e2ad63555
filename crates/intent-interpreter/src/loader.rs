use crate::catalogue::{ActionCatalogue, DEFAULT_ACTIONS};
use crate::lexicon::Lexicon;
use crate::shown::{ShownWordCatalogue, DEFAULT_SHOWN_ACTIONS, DEFAULT_SHOWN_OBJECTS};
use crate::{Interpreter, InterpreterConfig};
use anyhow::Context;
use std::fs;
use std::path::Path;

fn read_or_embedded(path: Option<&Path>, embedded: &str) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading catalogue: {}", path.display())),
        None => Ok(embedded.to_string()),
    }
}

pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<InterpreterConfig> {
    let path = path.as_ref();
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading config: {}", path.display()))?;
    let config: InterpreterConfig =
        serde_yaml::from_str(&raw).with_context(|| format!("parsing yaml: {}", path.display()))?;
    Ok(config)
}

pub fn load_action_catalogue(path: impl AsRef<Path>) -> anyhow::Result<ActionCatalogue> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalogue: {}", path.display()))?;
    ActionCatalogue::parse(&raw)
        .with_context(|| format!("building action catalogue: {}", path.display()))
}

pub fn load_lexicon(path: impl AsRef<Path>) -> anyhow::Result<Lexicon> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalogue: {}", path.display()))?;
    Lexicon::parse(&raw).with_context(|| format!("building lexicon: {}", path.display()))
}

/// Build an interpreter from configuration, using embedded catalogues for unset paths
pub fn build_interpreter(config: &InterpreterConfig) -> anyhow::Result<Interpreter> {
    let actions_src = read_or_embedded(config.actions_path.as_deref(), DEFAULT_ACTIONS)?;
    let shown_actions_src =
        read_or_embedded(config.shown_actions_path.as_deref(), DEFAULT_SHOWN_ACTIONS)?;
    let shown_objects_src =
        read_or_embedded(config.shown_objects_path.as_deref(), DEFAULT_SHOWN_OBJECTS)?;

    let actions = ActionCatalogue::parse(&actions_src).context("building action catalogue")?;
    let shown_actions = Lexicon::parse(&shown_actions_src).context("building shown actions")?;
    let shown_objects = Lexicon::parse(&shown_objects_src).context("building shown objects")?;

    tracing::info!(
        actions = ?actions.canonical_names(),
        shown_actions = shown_actions.set_count(),
        shown_objects = shown_objects.set_count(),
        "catalogues loaded"
    );

    let interpreter = Interpreter::new(actions, ShownWordCatalogue::new(shown_actions, shown_objects))?
        .with_lowercase_input(config.lowercase_input);
    Ok(interpreter)
}
