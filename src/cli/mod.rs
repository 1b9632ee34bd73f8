//! CLI layer for rtio.
//!
//! A thin driver over the library operations, using clap.

pub mod commands;
pub mod logging;
pub mod output;
pub mod parser;

pub use commands::{execute, execute_with};
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
