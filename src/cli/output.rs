//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::{CommandError, ConsoleError, Error, IoError};
use crate::io::Scalar;
use serde::Serialize;
use serde_json::json;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raw text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Serialize)]
struct FileContent<'a> {
    path: &'a str,
    bytes: usize,
    content: &'a str,
}

/// Formats file content read by `cat`.
///
/// Text output is the content verbatim.
#[must_use]
pub fn format_file_content(path: &str, content: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => content.to_string(),
        OutputFormat::Json => format_json(&FileContent {
            path,
            bytes: content.len(),
            content,
        }),
    }
}

/// Formats the result of `put`.
///
/// Text output is empty so that a successful write prints nothing.
#[must_use]
pub fn format_write_result(path: &str, bytes: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => String::new(),
        OutputFormat::Json => format_json(&json!({ "path": path, "bytes": bytes })),
    }
}

/// Formats scalars read by `read`, one per line in text mode.
#[must_use]
pub fn format_scalars(values: &[Scalar], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => values.iter().map(|v| format!("{v}\n")).collect(),
        OutputFormat::Json => format_json(&values),
    }
}

/// Formats the line answered to `prompt`.
#[must_use]
pub fn format_answer(answer: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{answer}\n"),
        OutputFormat::Json => format_json(&json!({ "answer": answer })),
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => format_json(&json!({
            "error": {
                "kind": error_kind(error),
                "message": error.to_string(),
            }
        })),
    }
}

const fn error_kind(error: &Error) -> &'static str {
    match error {
        Error::Console(ConsoleError::EndOfInput) => "end_of_input",
        Error::Console(ConsoleError::Parse { .. }) => "parse",
        Error::Console(_) => "console",
        Error::Io(IoError::FileNotFound { .. }) => "not_found",
        Error::Io(IoError::OpenFailed { .. }) => "open_failed",
        Error::Io(_) => "io",
        Error::Command(CommandError::InvalidArgument(_)) => "invalid_argument",
        Error::Command(_) => "command",
    }
}

fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
