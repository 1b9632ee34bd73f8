//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::io::ScalarKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rtio: drive the console and file helpers from the shell.
#[derive(Parser, Debug)]
#[command(name = "rtio")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Report failures instead of falling back to empty or default values.
    #[arg(long, global = true, env = "RTIO_STRICT")]
    pub strict: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the whole content of a file.
    ///
    /// A missing file prints nothing unless `--strict` is set.
    Cat {
        /// Path to the file.
        path: PathBuf,
    },

    /// Replace the content of a file.
    Put {
        /// Path to the file.
        path: PathBuf,

        /// Content to write (reads all of stdin if not provided).
        content: Option<String>,
    },

    /// Read typed tokens from stdin and echo them.
    Read {
        /// Token kind (int, float, bool, char, word).
        #[arg(short, long, default_value = "word")]
        kind: ScalarKind,

        /// Number of tokens to read.
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Show a message and read one line from stdin.
    Prompt {
        /// Message shown before reading.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cat() {
        let cli = Cli::try_parse_from(["rtio", "cat", "a.txt"]).unwrap();
        assert!(!cli.strict);
        assert_eq!(cli.format, "text");
        assert!(matches!(cli.command, Commands::Cat { ref path } if path == &PathBuf::from("a.txt")));
    }

    #[test]
    fn test_parse_put_without_content() {
        let cli = Cli::try_parse_from(["rtio", "put", "out.txt"]).unwrap();
        match cli.command {
            Commands::Put { path, content } => {
                assert_eq!(path, PathBuf::from("out.txt"));
                assert!(content.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_read_defaults() {
        let cli = Cli::try_parse_from(["rtio", "read"]).unwrap();
        match cli.command {
            Commands::Read { kind, count } => {
                assert_eq!(kind, ScalarKind::Word);
                assert_eq!(count, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_read_kind_and_global_flags() {
        let cli =
            Cli::try_parse_from(["rtio", "read", "--kind", "int", "-n", "3", "--strict", "--format", "json"])
                .unwrap();
        assert!(cli.strict);
        assert_eq!(cli.format, "json");
        match cli.command {
            Commands::Read { kind, count } => {
                assert_eq!(kind, ScalarKind::Int);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_read_unknown_kind() {
        assert!(Cli::try_parse_from(["rtio", "read", "--kind", "decimal"]).is_err());
    }
}
