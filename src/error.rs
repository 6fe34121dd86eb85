//! Defines custom error types for the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a config file cannot be spliced.
pub enum SpliceError {
    #[error("No linter command was provided.")]
    Usage,

    #[error("Could not open {}", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write {}", path.display())]
    ConfigUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No '{0}' section found in the config file. Add one by placing {0} in the file.")]
    SectionNotFound(String),

    #[error("Failed to run command: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: io::Error,
    },
}
