use std::{io::Write, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use tracing::{error, info};

use crate::{
    errors::errors::ErrorImpl,
    lexer::{lexer::scan, table::TokenTable},
    report::{
        report::{format_tokens, render_diagnostic, ConsoleReporter, Reporter},
        source::select_source,
    },
};

#[derive(Parser, Debug)]
#[command(name = "clex")]
#[command(author, version, about = "Token counter for a small C-like language", long_about = None)]
pub struct Cli {
    /// Source file to analyse
    #[arg(conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Analyse the built-in sample program instead of a file
    #[arg(long)]
    pub sample: bool,

    /// Print every token with its byte span instead of the count table
    #[arg(long)]
    pub tokens: bool,

    /// Exit with a failure status when the scanner reports diagnostics
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Runs one analysis: the report goes to `out`, problems to `err`.
pub fn run<O: Write, E: Write>(cli: Cli, out: &mut O, err: &mut E) -> Status {
    let source = match select_source(cli.input, cli.sample).and_then(|provider| provider.provide()) {
        Ok(source) => source,
        Err(error) => {
            let written = if let ErrorImpl::NoInputSelected = error.get_impl() {
                writeln!(out, "No file selected. Exiting...")
            } else {
                writeln!(err, "error: {}", error)
            };
            if let Err(io_error) = written {
                error!(%io_error, "failed to write error");
            }
            return Status::Failure;
        }
    };

    let start = Instant::now();
    let scanned = scan(&source.text);
    info!("Tokenized in {:?}", start.elapsed());

    let clean = scanned.is_clean();
    let diagnostics = scanned
        .diagnostics
        .iter()
        .map(|diagnostic| render_diagnostic(diagnostic, &source.text, &source.name))
        .collect::<String>();

    let written = err.write_all(diagnostics.as_bytes()).and_then(|_| {
        if cli.tokens {
            out.write_all(format_tokens(&scanned).as_bytes())
                .and_then(|_| out.flush())
        } else {
            ConsoleReporter::new(&mut *out).report(&TokenTable::from(scanned))
        }
    });

    if let Err(io_error) = written {
        error!(%io_error, "failed to write report");
        return Status::Failure;
    }

    if cli.strict && !clean {
        return Status::Failure;
    }

    Status::Success
}
