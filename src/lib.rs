//! Core library for pylintrc-splice.
//!
//! The tool runs a linter, picks the error codes out of its output, and adds
//! them to the `disable=` list of the `[MESSAGES CONTROL]` section of a
//! pylintrc file, leaving the rest of the file as it was.
//!
//! # Example
//!
//! ```rust
//! use pylintrc_splice::extractor::collect_errors;
//! use pylintrc_splice::section::{merge_errors, MESSAGES_CONTROL_HEADER};
//!
//! let errors = collect_errors(&[
//!     "mod.py:1:0: C0114: Missing module docstring (missing-module-docstring)",
//! ]);
//! let merged = merge_errors(
//!     "[MESSAGES CONTROL]\ndisable=\n\n[REPORTS]\n",
//!     MESSAGES_CONTROL_HEADER,
//!     &errors,
//! )
//! .unwrap();
//! assert_eq!(
//!     merged,
//!     "[MESSAGES CONTROL]\n\ndisable=\n    missing-module-docstring,\n[REPORTS]\n"
//! );
//! ```

pub mod cli;
pub mod error;
pub mod extractor;
pub mod lines;
pub mod output;
pub mod runner;
pub mod section;

use crate::cli::Cli;
use crate::error::SpliceError;
use crate::extractor::collect_errors;
use crate::lines::read_lines;
use crate::output::{finalize_output, OutputMode};
use crate::runner::{shell_command, CommandRunner, ShellRunner};
use crate::section::merge_errors;
use clap::{CommandFactory, Parser};
use std::fs;
use std::io::{self, Write};

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let cli = Cli::parse();
    execute(cli, &ShellRunner, &mut io::stdout(), &mut io::stderr())
}

/// Runs the linter through `runner` and applies the result as requested by `cli`.
///
/// Normal output goes to `out`. The command line and the error count go to
/// `status`, except in write mode where `out` carries nothing else and gets
/// them too. Every failure is returned to the caller, which owns the exit
/// status.
pub fn execute<R, W, E>(cli: Cli, runner: &R, out: &mut W, status: &mut E) -> anyhow::Result<()>
where
    R: CommandRunner,
    W: Write,
    E: Write,
{
    let Some(command) = shell_command(&cli.command) else {
        writeln!(out, "{}", Cli::command().render_usage())?;
        return Err(SpliceError::Usage.into());
    };

    let payload_on_stdout = cli.list || cli.dry_run || cli.diff;
    let mut report = |line: String| -> io::Result<()> {
        if payload_on_stdout {
            writeln!(status, "{line}")
        } else {
            writeln!(out, "{line}")
        }
    };

    report(command.clone())?;
    log::info!("Running: {command}");
    let command_output = runner.run(&command)?;

    let output_lines = read_lines(&command_output);
    log::debug!("Parsing {} lines of linter output", output_lines.len());
    let errors = collect_errors(&output_lines);
    report(format!("Found {} errors", errors.len()))?;

    if cli.list {
        if cli.json {
            serde_json::to_writer(&mut *out, &errors)?;
            writeln!(out)?;
        } else {
            for code in &errors {
                writeln!(out, "{code}")?;
            }
        }
        return Ok(());
    }

    let input_content =
        fs::read_to_string(&cli.file).map_err(|source| SpliceError::ConfigNotFound {
            path: cli.file.clone(),
            source,
        })?;

    let merged = merge_errors(&input_content, &cli.header, &errors)?;

    finalize_output(
        OutputMode::from_flags(cli.dry_run, cli.diff),
        cli.output.as_deref(),
        &cli.file,
        &input_content,
        &merged,
        out,
    )
}
