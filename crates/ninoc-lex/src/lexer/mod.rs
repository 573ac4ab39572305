//! Lexer implementation, split by token category the way the dispatch in
//! [`core`] delegates to it.

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{tokenize, Lexer};
