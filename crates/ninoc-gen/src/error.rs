//! Code generator error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// A binary operator token whose text is not one of the four
    /// supported glyphs (`+`, `-`, `*`, `/`).
    #[error("unknown binary operator '{0}'")]
    UnknownOperator(String),

    /// An AST variant the back end does not lower — only `i32` arithmetic
    /// is implemented, so float and string literals land here.
    #[error("cannot lower expression of kind '{0}': only i32 arithmetic is supported")]
    UnknownExpressionKind(&'static str),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
