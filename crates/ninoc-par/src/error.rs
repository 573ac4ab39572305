//! Parser error types.

use ninoc_lex::TokenKind;
use ninoc_util::Span;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected {expected}, got {got} at {span}")]
    ExpectedToken { expected: TokenKind, got: TokenKind, span: Span },

    #[error("unexpected token {kind} at {span}: no primary-expression rule matched")]
    UnexpectedPrimary { kind: TokenKind, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::ExpectedToken { span, .. } => *span,
            ParseError::UnexpectedPrimary { span, .. } => *span,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
