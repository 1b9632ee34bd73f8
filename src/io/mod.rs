//! Console and file I/O helpers.
//!
//! Typed token reading and value writing over the standard streams, plus
//! whole-file text reads and writes. Each operation comes in a silent form
//! and a `try_` form that reports failures.

pub mod console;
pub mod file;
pub mod scalar;

pub use console::{
    flush, has_token, prompt, prompt_from, read, read_from, read_token, skip_whitespace,
    try_prompt, try_read, try_write, write, write_to,
};
pub use file::{read_file, try_read_file, try_write_file, write_file, write_file_reporting};
pub use scalar::{Scalar, ScalarKind};
