//! `blockmark` command-line tool.
//!
//! Reads an HTML document from a file or stdin and writes the Markdown
//! conversion of its body to stdout or a file.

mod args;
mod error;

use std::fs;
use std::io::{self, Read, Write};

use blockmark::{ConversionOptions, convert_bytes};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use args::Cli;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    // --debug forces debug output, otherwise RUST_LOG or warn
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if let Some(shell) = cli.generate_completion {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        return Ok(());
    }

    if cli.generate_man {
        return clap_mangen::Man::new(Cli::command())
            .render(&mut io::stdout())
            .map_err(CliError::WriteStdout);
    }

    let input = read_input(cli)?;

    let mut options = ConversionOptions::new();
    if let Some(label) = &cli.encoding {
        options = options.with_encoding(label);
    }

    let markdown = convert_bytes(&input, &options)?;
    tracing::debug!(input_bytes = input.len(), output_bytes = markdown.len(), "conversion finished");

    write_output(cli, &markdown)
}

fn read_input(cli: &Cli) -> Result<Vec<u8>, CliError> {
    match cli.input_path() {
        Some(path) => fs::read(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        }),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer).map_err(CliError::ReadStdin)?;
            Ok(buffer)
        }
    }
}

fn write_output(cli: &Cli, markdown: &str) -> Result<(), CliError> {
    match &cli.output {
        Some(path) => fs::write(path, markdown).map_err(|source| CliError::WriteFile {
            path: path.clone(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(markdown.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(CliError::WriteStdout)
        }
    }
}
