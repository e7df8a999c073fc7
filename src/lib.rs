//! hashdupe - Duplicate File Finder
//!
//! A CLI tool that finds duplicate files within a directory tree by hashing
//! every regular file and grouping files that share a digest. Five digest
//! algorithms are available behind one interface (multiplicative string
//! hash, 8-bit and 64-bit Pearson hashing, 32-bit FNV-1a, and MD5), all
//! producing bit-exact, reproducible output.

pub mod cli;
pub mod error;
pub mod finder;
pub mod hash;
pub mod logging;
pub mod report;
pub mod walker;

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::error::ExitCode;
use crate::hash::PearsonTable;

/// Run the duplicate scan described by the parsed command line.
///
/// Generates the Pearson table once from the configured seed, hashes every
/// file under the target directory, and prints the duplicate report to
/// stdout. Exit code is [`ExitCode::Success`] whether or not duplicates
/// were found; a run with no duplicates simply prints nothing.
///
/// # Errors
///
/// Traversal, read, and hash failures abort the run and propagate to the
/// caller; nothing is printed for a failed run.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet, cli.no_color);

    let table = PearsonTable::generate(cli.seed);
    log::debug!(
        "Scanning {} with {} (table seed {})",
        cli.path.display(),
        cli.hash,
        cli.seed
    );

    let (groups, summary) = finder::find_duplicates(&cli.path, cli.hash, &table)?;
    log::debug!(
        "{} file(s) hashed, {} duplicate group(s)",
        summary.files_hashed,
        summary.duplicate_groups
    );

    let lines = report::render_report(&groups, cli.extension.as_deref(), cli.print_hash);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{line}").context("Failed to write report to stdout")?;
    }

    Ok(ExitCode::Success)
}
