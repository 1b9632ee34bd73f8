//! CLI command implementations.
//!
//! Each command maps onto one library operation. Without `--strict` the
//! silent variant is used; with it, the `try_` variant and its error.

use crate::cli::output::{
    OutputFormat, format_answer, format_file_content, format_scalars, format_write_result,
};
use crate::cli::parser::{Cli, Commands};
use crate::error::{ConsoleError, Result};
use crate::io::{
    Scalar, ScalarKind, flush, has_token, prompt_from, read_file, skip_whitespace, try_read_file,
    try_write, try_write_file, write, write_file_reporting,
};
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

/// Executes the CLI command against the process's standard streams.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails under `--strict`.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        // Tokens go through the stdin-bound readers, which lock stdin per call
        Commands::Read { kind, count } => {
            cmd_read(*kind, *count, format, |k| next_from_stdin(k, cli.strict))
        }
        _ => execute_with(cli, &mut io::stdin().lock(), &mut io::stdout()),
    }
}

/// Executes the CLI command with explicit input and prompt output streams.
///
/// `input` supplies tokens, lines and `put` content; `prompt_out` receives the
/// prompt message. `cat` in text format writes the file straight to stdout;
/// every other result is returned rather than written.
///
/// # Errors
///
/// Returns an error if the command fails under `--strict`.
pub fn execute_with<R, W>(cli: &Cli, input: &mut R, prompt_out: &mut W) -> Result<String>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Cat { path } => cmd_cat(path, cli.strict, format),
        Commands::Put { path, content } => {
            cmd_put(path, content.as_deref(), input, cli.strict, format)
        }
        Commands::Read { kind, count } => cmd_read(*kind, *count, format, |k| {
            next_from_reader(input, k, cli.strict)
        }),
        Commands::Prompt { message } => cmd_prompt(message, input, prompt_out, cli.strict, format),
    }
}

fn cmd_cat(path: &Path, strict: bool, format: OutputFormat) -> Result<String> {
    let content = if strict {
        try_read_file(path)?
    } else {
        read_file(path)
    };

    match format {
        OutputFormat::Text => {
            if strict {
                try_write(content.as_str())?;
            } else {
                write(content.as_str());
            }
            flush();
            Ok(String::new())
        }
        OutputFormat::Json => Ok(format_file_content(
            &path.to_string_lossy(),
            &content,
            format,
        )),
    }
}

fn cmd_put<R: BufRead + ?Sized>(
    path: &Path,
    content: Option<&str>,
    input: &mut R,
    strict: bool,
    format: OutputFormat,
) -> Result<String> {
    let content = if let Some(c) = content {
        c.to_string()
    } else {
        let mut buffer = String::new();
        input
            .read_to_string(&mut buffer)
            .map_err(|e| ConsoleError::Read(e.to_string()))?;
        buffer
    };

    let written = if strict {
        try_write_file(path, &content)?;
        true
    } else {
        write_file_reporting(path, &content, &mut io::stderr().lock())
    };

    Ok(format_write_result(
        &path.to_string_lossy(),
        if written { content.len() } else { 0 },
        format,
    ))
}

/// Collects up to `count` values from `next`, stopping early when it reports
/// end of input.
fn cmd_read<F>(kind: ScalarKind, count: usize, format: OutputFormat, mut next: F) -> Result<String>
where
    F: FnMut(ScalarKind) -> Result<Option<Scalar>>,
{
    let mut values = Vec::new();
    for _ in 0..count {
        match next(kind)? {
            Some(value) => values.push(value),
            None => break,
        }
    }
    Ok(format_scalars(&values, format))
}

fn next_from_reader<R: BufRead + ?Sized>(
    input: &mut R,
    kind: ScalarKind,
    strict: bool,
) -> Result<Option<Scalar>> {
    if strict {
        return kind.read_from(input).map(Some);
    }
    if !skip_whitespace(input).unwrap_or(false) {
        return Ok(None);
    }
    Ok(Some(
        kind.read_from(input)
            .unwrap_or_else(|_| kind.default_value()),
    ))
}

fn next_from_stdin(kind: ScalarKind, strict: bool) -> Result<Option<Scalar>> {
    if strict {
        return kind.try_read_stdin().map(Some);
    }
    if !has_token() {
        return Ok(None);
    }
    Ok(Some(kind.read_stdin()))
}

fn cmd_prompt<R, W>(
    message: &str,
    input: &mut R,
    prompt_out: &mut W,
    strict: bool,
    format: OutputFormat,
) -> Result<String>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let answer = match prompt_from(input, prompt_out, message) {
        Ok(line) => line,
        Err(e) if strict => return Err(e),
        Err(_) => String::new(),
    };
    Ok(format_answer(&answer, format))
}
