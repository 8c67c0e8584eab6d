//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: stack error (invalid layer params, bad dimensions, bad ranges)
//! - 11: I/O error (file read/write, PNG export)
//! - 12: input error (bad layer JSON, malformed settings)
//! - 13: serialization error

use std::fmt;
use strata_core::StackError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A stack-level error (invalid layer params, bad dimensions, bad ranges).
    Stack(StackError),
    /// An I/O error (file read/write, PNG export).
    Io(String),
    /// A user input error (bad layer JSON, malformed settings).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Stack(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Stack(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<StackError> for CliError {
    fn from(e: StackError) -> Self {
        match e {
            StackError::Io(msg) => CliError::Io(msg),
            other => CliError::Stack(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
