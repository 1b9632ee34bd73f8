//! Error types for rtio operations.
//!
//! The silent console and file helpers never surface these; they are returned
//! by the `try_` variants and by the `rtio` binary.

use thiserror::Error;

/// Result type alias for rtio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Console (stdin/stdout) errors.
    #[error("console error: {0}")]
    Console(#[from] ConsoleError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors raised while reading tokens from or writing values to the console.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Input ended before a token was found.
    #[error("end of input")]
    EndOfInput,

    /// A token was read but could not be parsed as the requested type.
    #[error("cannot parse {token:?} as {type_name}: {reason}")]
    Parse {
        /// The raw token.
        token: String,
        /// Name of the requested type.
        type_name: &'static str,
        /// Parser message.
        reason: String,
    },

    /// The underlying input stream failed.
    #[error("failed to read input: {0}")]
    Read(String),

    /// The underlying output stream failed.
    #[error("failed to write output: {0}")]
    Write(String),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// File exists (or should be created) but could not be opened.
    #[error("Unable to open {path}: {reason}")]
    OpenFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// File content is not valid UTF-8.
    #[error("invalid UTF-8 in {path} at byte offset {offset}")]
    InvalidUtf8 {
        /// Path to the file.
        path: String,
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}
