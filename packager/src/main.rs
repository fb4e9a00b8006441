//! PCM packaging binary for the PULSAR KiCad library.
//!
//! Thin CLI wrapper around [`pulsar_pcm::artefact::packaging`]: resolves the
//! arguments, runs the pipeline, and prints a summary. Validation warnings
//! are printed but never change the exit status; fatal errors print
//! `error: ...` on stderr and exit with status 1.

use clap::Parser;
use pulsar_pcm::artefact::packaging::package_library;
use pulsar_pcm::cli::Cli;
use pulsar_pcm::error::{PackagerError, Result};
use pulsar_pcm::output::{write_header, write_summary};
use std::io::Write;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    if let Err(err) = run(&cli, &mut stdout) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Resolve the CLI, package the library, and report progress to `out`.
fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let params = cli.resolve()?;
    write_header(out, &params).map_err(|source| PackagerError::WriteFailed { source })?;

    let output = package_library(&params)?;

    write_summary(out, &params, &output).map_err(|source| PackagerError::WriteFailed { source })
}
