//! CLI error types.

use std::io;
use std::path::PathBuf;

use blockmark::ConversionError;
use thiserror::Error;

/// Errors reported by the command-line front end.
#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("Error reading file '{}': {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("Error reading stdin: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("Error writing file '{}': {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },

    #[error("Error writing output: {0}")]
    WriteStdout(#[source] io::Error),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
