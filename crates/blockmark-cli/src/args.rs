//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

/// Convert the top-level blocks of an HTML document to Markdown.
#[derive(Parser, Debug)]
#[command(name = "blockmark", version, about, long_about = None)]
pub(crate) struct Cli {
    /// Input HTML file. Reads from stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub(crate) input: Option<PathBuf>,

    /// Write Markdown to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,

    /// Input character encoding (e.g. utf-8, windows-1252, shift_jis).
    ///
    /// Without this flag input is read as UTF-8, falling back to windows-1252.
    #[arg(long, value_name = "ENCODING")]
    pub(crate) encoding: Option<String>,

    /// Log conversion details to stderr.
    #[arg(long)]
    pub(crate) debug: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub(crate) generate_completion: Option<Shell>,

    /// Print a man page and exit.
    #[arg(long, exclusive = true)]
    pub(crate) generate_man: bool,
}

impl Cli {
    /// Input path, or `None` for stdin.
    pub(crate) fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
