//! Errors reported by the command-line front end.

use std::path::PathBuf;

use thiserror::Error;
use unibeta::ConvertError;

/// Anything a command can fail with. Printed as `error: {self}`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value for {option}: '{value}'")]
    BadOption { option: &'static str, value: String },

    #[error("no input given (pass TEXT or -f FILE)")]
    MissingInput,

    #[error("TEXT and -f FILE cannot be combined")]
    MixedInput,

    #[error(transparent)]
    Convert(#[from] ConvertError),
}
