//! Defines the command-line interface for the application.

use crate::section::MESSAGES_CONTROL_HEADER;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pylintrc-splice",
    version,
    about = "Run a linter and add the error codes it reports to the disabled messages of a \
             pylintrc file."
)]
pub struct Cli {
    /// The config file to modify.
    #[arg(short, long, value_name = "FILE_PATH", default_value = ".pylintrc")]
    pub file: PathBuf,

    /// Write the output to a new file instead of modifying the original.
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Header of the section that receives the error codes.
    #[arg(long, value_name = "HEADER", default_value = MESSAGES_CONTROL_HEADER)]
    pub header: String,

    /// Print the resulting config file without writing it.
    #[arg(long, conflicts_with_all = ["diff", "list"])]
    pub dry_run: bool,

    /// Show a diff of the pending changes instead of writing the file.
    #[arg(long, conflicts_with = "list")]
    pub diff: bool,

    /// Print the error codes found in the command output and exit.
    #[arg(long)]
    pub list: bool,

    /// Print the --list output as a JSON array.
    #[arg(long, requires = "list")]
    pub json: bool,

    /// The linter command and its arguments, e.g. `pylint my_package`.
    #[arg(
        value_name = "COMMAND",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn trailing_words_keep_their_flags() {
        let cli = Cli::parse_from([
            "pylintrc-splice",
            "--file",
            "setup.cfg",
            "pylint",
            "--disable=all",
            "-j",
            "4",
            "pkg",
        ]);
        assert_eq!(cli.file, PathBuf::from("setup.cfg"));
        assert_eq!(cli.header, MESSAGES_CONTROL_HEADER);
        assert_eq!(cli.command, vec!["pylint", "--disable=all", "-j", "4", "pkg"]);
    }

    #[test]
    fn command_may_be_omitted() {
        let cli = Cli::parse_from(["pylintrc-splice"]);
        assert!(cli.command.is_empty());
        assert_eq!(cli.file, PathBuf::from(".pylintrc"));
    }

    #[test]
    fn json_requires_list() {
        assert!(Cli::try_parse_from(["pylintrc-splice", "--json", "pylint"]).is_err());
        assert!(Cli::try_parse_from(["pylintrc-splice", "--list", "--diff", "pylint"]).is_err());
    }
}
