//! Whole-file text reading and writing.
//!
//! Each call opens, transfers and closes its own handle; nothing is cached.

use crate::error::{Error, IoError, Result};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Reads the raw bytes of a file.
fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let path_str = display_path(path);

    let mut file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path_str.clone(),
            }
        } else {
            IoError::OpenFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            }
        }
    })?;

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| IoError::ReadFailed {
            path: path_str,
            reason: e.to_string(),
        })?;
    Ok(buffer)
}

/// Reads a whole file as UTF-8 text.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::OpenFailed`] if the file
/// cannot be opened, [`IoError::ReadFailed`] if reading fails and
/// [`IoError::InvalidUtf8`] if the content is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use rtio::io::try_read_file;
///
/// let content = try_read_file("example.txt").unwrap();
/// ```
pub fn try_read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    let bytes = read_bytes(path_ref)?;
    String::from_utf8(bytes).map_err(|e| {
        IoError::InvalidUtf8 {
            path: display_path(path_ref),
            offset: e.utf8_error().valid_up_to(),
        }
        .into()
    })
}

/// Reads a whole file as text.
///
/// A file that cannot be opened or read yields an empty string, so an empty
/// result does not distinguish "empty" from "missing". Invalid UTF-8
/// sequences are replaced with U+FFFD.
///
/// ```no_run
/// assert_eq!(rtio::io::read_file("missing.txt"), "");
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> String {
    let path_ref = path.as_ref();
    match read_bytes(path_ref) {
        Ok(bytes) => {
            tracing::debug!(target: "rtio", path = %path_ref.display(), bytes = bytes.len(), "read file");
            String::from_utf8_lossy(&bytes).into_owned()
        }
        Err(e) => {
            tracing::debug!(target: "rtio", error = %e, "read_file yielded empty content");
            String::new()
        }
    }
}

/// Writes `content` to a file, creating it or truncating prior content.
///
/// Parent directories are not created.
///
/// # Errors
///
/// Returns [`IoError::OpenFailed`] if the file cannot be created and
/// [`IoError::WriteFailed`] if the write itself fails. A failed write may
/// leave the file truncated.
pub fn try_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = display_path(path_ref);

    let mut file = File::create(path_ref).map_err(|e| IoError::OpenFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    file.write_all(content.as_bytes())
        .map_err(|e| IoError::WriteFailed {
            path: path_str,
            reason: e.to_string(),
        })?;

    tracing::debug!(target: "rtio", path = %path_ref.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Like [`write_file`], but sends the open-failure diagnostic to
/// `diagnostics` instead of standard error.
///
/// Returns `true` if the whole content was written.
pub fn write_file_reporting<P, W>(path: P, content: &str, diagnostics: &mut W) -> bool
where
    P: AsRef<Path>,
    W: Write + ?Sized,
{
    let path_ref = path.as_ref();
    match try_write_file(path_ref, content) {
        Ok(()) => true,
        Err(Error::Io(IoError::OpenFailed { path, .. })) => {
            let _ = writeln!(diagnostics, "Unable to open {path}");
            false
        }
        Err(e) => {
            tracing::debug!(target: "rtio", error = %e, "write_file failed after open");
            false
        }
    }
}

/// Writes `content` to a file, replacing whatever it held.
///
/// If the file cannot be opened, a single line `Unable to open <path>` is
/// written to standard error and nothing else happens.
///
/// ```no_run
/// rtio::io::write_file("a.txt", "hello");
/// assert_eq!(rtio::io::read_file("a.txt"), "hello");
/// ```
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) {
    let _ = write_file_reporting(path, content, &mut io::stderr().lock());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_small_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("small.txt");
        std::fs::write(&file_path, "Hello, world!").unwrap();

        assert_eq!(read_file(&file_path), "Hello, world!");
        assert_eq!(try_read_file(&file_path).unwrap(), "Hello, world!");
    }

    #[test]
    fn test_read_nonexistent_file() {
        assert_eq!(read_file("/nonexistent/path/file.txt"), "");

        let err = try_read_file("/nonexistent/path/file.txt").unwrap_err();
        assert!(matches!(err, Error::Io(IoError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(read_file(temp_dir.path()), "");
        assert!(try_read_file(temp_dir.path()).is_err());
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        std::fs::write(&file_path, "").unwrap();

        assert!(read_file(&file_path).is_empty());
        assert!(try_read_file(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_read_utf8_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("unicode.txt");
        std::fs::write(&file_path, "Hello, 世界! 🌍\n").unwrap();

        assert_eq!(read_file(&file_path), "Hello, 世界! 🌍\n");
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("invalid.bin");
        std::fs::write(&file_path, [b'o', b'k', 0xff, b'!']).unwrap();

        assert_eq!(read_file(&file_path), "ok\u{FFFD}!");

        let err = try_read_file(&file_path).unwrap_err();
        assert!(matches!(
            err,
            Error::Io(IoError::InvalidUtf8 { offset: 2, .. })
        ));
    }

    #[test]
    fn test_write_file_creates() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("output.txt");

        write_file(&file_path, "Test content");

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "Test content");
    }

    #[test]
    fn test_write_file_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a.txt");

        write_file(&file_path, "hello");
        assert_eq!(read_file(&file_path), "hello");

        write_file(&file_path, "hi");
        assert_eq!(read_file(&file_path), "hi");

        write_file(&file_path, "");
        assert_eq!(read_file(&file_path), "");
    }

    #[test]
    fn test_write_file_does_not_create_parents() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("no_such_dir/x.txt");

        let mut diagnostics = Vec::new();
        assert!(!write_file_reporting(&file_path, "data", &mut diagnostics));

        assert!(!file_path.exists());
        assert!(!temp_dir.path().join("no_such_dir").exists());

        let expected = format!("Unable to open {}\n", file_path.display());
        assert_eq!(String::from_utf8(diagnostics).unwrap(), expected);
    }

    #[test]
    fn test_write_file_reporting_success_is_quiet() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("quiet.txt");

        let mut diagnostics = Vec::new();
        assert!(write_file_reporting(&file_path, "data", &mut diagnostics));

        assert!(diagnostics.is_empty());
        assert_eq!(read_file(&file_path), "data");
    }

    #[test]
    fn test_try_write_file_open_failed() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing/out.txt");

        let err = try_write_file(&file_path, "data").unwrap_err();
        assert!(matches!(err, Error::Io(IoError::OpenFailed { .. })));
        assert!(err.to_string().contains("Unable to open"));
    }

    #[test]
    fn test_write_to_directory_path() {
        let temp_dir = TempDir::new().unwrap();

        let mut diagnostics = Vec::new();
        assert!(!write_file_reporting(temp_dir.path(), "data", &mut diagnostics));

        let text = String::from_utf8(diagnostics).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Unable to open "));
        assert!(temp_dir.path().is_dir());
    }
}
