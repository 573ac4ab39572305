//! Shared span and diagnostic types used by every stage of the compiler.

mod diagnostic;
mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::Span;
