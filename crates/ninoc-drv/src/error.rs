//! Driver error types, and the top-level error `main` matches on.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("could not read or write '{0:?}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("clang exited with status {0}")]
    ToolchainFailed(i32),
}

/// Aggregates every stage's error into one type the driver's `main` can
/// match on to render a single diagnostic line, following the teacher's
/// pattern of a per-crate `thiserror` enum plus a driver-level aggregate.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] ninoc_lex::LexError),

    #[error(transparent)]
    Parse(#[from] ninoc_par::ParseError),

    #[error(transparent)]
    Codegen(#[from] ninoc_gen::CodegenError),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl From<ninoc_par::FrontendError> for CompileError {
    fn from(err: ninoc_par::FrontendError) -> Self {
        match err {
            ninoc_par::FrontendError::Lex(e) => CompileError::Lex(e),
            ninoc_par::FrontendError::Parse(e) => CompileError::Parse(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;
