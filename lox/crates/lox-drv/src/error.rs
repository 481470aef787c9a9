//! Error types for the lox driver.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Fatal driver errors.
///
/// Lexical errors are not represented here; they go to the session's
/// diagnostic handler and only influence the exit status.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The script path does not name an existing file.
    #[error("file \"{}\" does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be found or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The line editor failed.
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
