//! Runs the linter command through the system shell.

use crate::error::SpliceError;
use std::process::{Command, Output};

/// Joins command-line words into a single shell command.
pub fn shell_command<S: AsRef<str>>(words: &[S]) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    Some(
        words
            .iter()
            .map(|word| word.as_ref())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Executes a command and hands back everything it printed.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<String, SpliceError>;
}

/// Runs commands with `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    fn spawn(command: &str) -> std::io::Result<Output> {
        if cfg!(windows) {
            Command::new("cmd").args(["/C", command]).output()
        } else {
            Command::new("sh").args(["-c", command]).output()
        }
    }
}

impl CommandRunner for ShellRunner {
    /// Returns stdout followed by stderr. A non-zero exit status is expected
    /// from linters that found problems, so it is logged but not an error.
    fn run(&self, command: &str) -> Result<String, SpliceError> {
        let output = Self::spawn(command).map_err(|source| SpliceError::CommandFailed {
            command: command.to_string(),
            source,
        })?;

        if output.status.success() {
            log::info!("Command exited successfully; the linter may have found nothing");
        } else {
            log::debug!("Command exited with {}", output.status);
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }
        Ok(text)
    }
}
