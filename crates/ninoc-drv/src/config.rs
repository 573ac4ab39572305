//! Driver configuration, built directly from `std::env::args()`.
//!
//! The source language's CLI surface is deliberately minimal (no flags),
//! so there is nothing here for a configuration-file format to add.

use std::path::PathBuf;

use crate::error::{CompileError, DriverError};

/// `<program> <source-file> [<destination-file>]`
#[derive(Debug, Clone)]
pub struct Config {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
}

impl Config {
    /// Parses `args` (excluding the program name itself). With one
    /// argument, the destination defaults to the source's basename
    /// without extension.
    pub fn from_args(args: &[String]) -> std::result::Result<Self, CompileError> {
        let source_path = args
            .first()
            .map(PathBuf::from)
            .ok_or_else(|| DriverError::Io(PathBuf::from("<source-file>"), missing_argument()))?;

        let destination_path = match args.get(1) {
            Some(dest) => PathBuf::from(dest),
            None => source_path.with_extension(""),
        };

        Ok(Config { source_path, destination_path })
    }
}

fn missing_argument() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, "usage: <program> <source-file> [<destination-file>]")
}
