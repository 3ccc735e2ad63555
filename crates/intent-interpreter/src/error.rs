use thiserror::Error;

pub type Result<T, E = InterpretError> = core::result::Result<T, E>;

/// Failures while building a synonym catalogue
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("word '{word}' listed on line {first_line} and again on line {second_line}")]
    DuplicateWord {
        word: String,
        first_line: usize,
        second_line: usize,
    },
    #[error("catalogue has no usable lines")]
    NoValidLines,
}

/// Failures while constructing an interpreter
#[derive(Debug, Error)]
pub enum InterpretError {
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    #[error("tokenizer pattern: {0}")]
    Tokenizer(#[from] regex::Error),
}
