//! Typed console input and output.
//!
//! Reads whitespace-delimited tokens from standard input and parses them with
//! [`FromStr`]; writes values to standard output through [`Display`] with no
//! separator or line terminator.
//!
//! The plain functions ([`read`], [`write`], [`prompt`]) never report failure:
//! a missing or malformed token yields `T::default()` and write errors are
//! dropped. The `try_` variants return the error instead.

use crate::error::{ConsoleError, Result};
use std::any::type_name;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Reads the next whitespace-delimited token from `reader`.
///
/// Leading ASCII whitespace is skipped. The delimiter that ends the token is
/// left in the reader, so nothing past the token is consumed.
///
/// Returns `Ok(None)` when the input ends before any token byte is seen.
///
/// # Examples
///
/// ```
/// use rtio::io::read_token;
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("  42\nnext");
/// assert_eq!(read_token(&mut input).unwrap().as_deref(), Some("42"));
/// assert_eq!(read_token(&mut input).unwrap().as_deref(), Some("next"));
/// assert_eq!(read_token(&mut input).unwrap(), None);
/// ```
pub fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> Result<Option<String>> {
    let mut token = Vec::new();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ConsoleError::Read(e.to_string()).into()),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut finished = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    finished = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        reader.consume(used);

        if finished {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
}

/// Skips leading ASCII whitespace and reports whether a token follows.
///
/// # Errors
///
/// Returns [`ConsoleError::Read`] if the reader fails.
pub fn skip_whitespace<R: BufRead + ?Sized>(reader: &mut R) -> Result<bool> {
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ConsoleError::Read(e.to_string()).into()),
        };
        if buf.is_empty() {
            return Ok(false);
        }

        let skipped = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let found = skipped < buf.len();
        reader.consume(skipped);
        if found {
            return Ok(true);
        }
    }
}

/// Reports whether another token is available on standard input.
///
/// Blocks until a non-whitespace byte arrives or input ends. Read failures
/// count as end of input.
pub fn has_token() -> bool {
    skip_whitespace(&mut io::stdin().lock()).unwrap_or(false)
}

/// Reads one token from `reader` and parses it as `T`.
///
/// # Errors
///
/// [`ConsoleError::EndOfInput`] if no token remains, [`ConsoleError::Parse`]
/// if the token is not valid for `T`. A malformed token is still consumed.
pub fn read_from<T, R>(reader: &mut R) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead + ?Sized,
{
    let token = read_token(reader)?.ok_or(ConsoleError::EndOfInput)?;
    token.parse::<T>().map_err(|e| {
        tracing::debug!(target: "rtio", token = %token, ty = type_name::<T>(), "token parse failed");
        ConsoleError::Parse {
            token,
            type_name: type_name::<T>(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Reads one token of type `T` from standard input.
///
/// Blocks until a token is available or input ends.
pub fn try_read<T>() -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    read_from(&mut io::stdin().lock())
}

/// Reads one token of type `T` from standard input, falling back to
/// `T::default()` on end of input or a malformed token.
///
/// ```no_run
/// let n: i64 = rtio::io::read();
/// let word: String = rtio::io::read();
/// ```
pub fn read<T>() -> T
where
    T: FromStr + Default,
    T::Err: Display,
{
    try_read().unwrap_or_default()
}

/// Renders `value` into `writer` with no added separator.
///
/// # Errors
///
/// Returns [`ConsoleError::Write`] if the writer fails.
pub fn write_to<W, T>(writer: &mut W, value: &T) -> Result<()>
where
    W: Write + ?Sized,
    T: Display + ?Sized,
{
    write!(writer, "{value}").map_err(|e| ConsoleError::Write(e.to_string()).into())
}

/// Writes `value` to standard output.
///
/// Output is buffered by the standard library; call [`flush`] when it must be
/// visible before the program exits.
pub fn try_write<T: Display + ?Sized>(value: &T) -> Result<()> {
    write_to(&mut io::stdout().lock(), value)
}

/// Writes `value` to standard output, ignoring write failures.
pub fn write<T: Display + ?Sized>(value: &T) {
    let _ = try_write(value);
}

/// Flushes standard output, ignoring failures.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Writes `message` to `writer`, then reads one line from `reader`.
///
/// The trailing `\n` or `\r\n` is stripped.
///
/// # Errors
///
/// [`ConsoleError::EndOfInput`] if `reader` is already exhausted.
pub fn prompt_from<R, W>(reader: &mut R, writer: &mut W, message: &str) -> Result<String>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write_to(writer, message)?;
    writer
        .flush()
        .map_err(|e| ConsoleError::Write(e.to_string()))?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| ConsoleError::Read(e.to_string()))?;
    if read == 0 {
        return Err(ConsoleError::EndOfInput.into());
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Shows `message` on standard output and reads a line from standard input.
pub fn try_prompt(message: &str) -> Result<String> {
    prompt_from(&mut io::stdin().lock(), &mut io::stdout().lock(), message)
}

/// Like [`try_prompt`], but returns an empty string on any failure.
pub fn prompt(message: &str) -> String {
    try_prompt(message).unwrap_or_default()
}
