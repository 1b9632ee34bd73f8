//! # rtio
//!
//! Console and text-file helpers for small language runtimes.
//!
//! Four stateless operations, generic over the value type where it matters:
//!
//! - [`io::read`]: one whitespace-delimited token from stdin, parsed as `T`
//! - [`io::write`]: a value's `Display` form to stdout, no separator
//! - [`io::read_file`]: a whole file as text
//! - [`io::write_file`]: replace a file's content
//!
//! The plain forms never signal failure: a bad token gives `T::default()`, a
//! missing file reads as `""`, and an unopenable write target produces one
//! `Unable to open <path>` line on stderr. Each has a `try_` sibling that
//! returns [`Error`] instead.
//!
//! ```no_run
//! let n: i64 = rtio::io::read();
//! rtio::io::write(&(n * 2));
//!
//! rtio::io::write_file("a.txt", "hello");
//! assert_eq!(rtio::io::read_file("a.txt"), "hello");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export the I/O operations
pub use io::{
    Scalar, ScalarKind, read, read_file, try_read, try_read_file, try_write, try_write_file, write,
    write_file,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
