//! Lexical error types.

use ninoc_util::Span;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{0}' at {1}")]
    UnknownCharacter(char, Span),
}

pub type Result<T> = std::result::Result<T, LexError>;
