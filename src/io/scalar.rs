//! Scalar values whose type is chosen at run time.
//!
//! The generic console functions need the target type at compile time. A
//! driver that learns the type from its arguments uses [`ScalarKind`] to pick
//! the parser and gets back a [`Scalar`].

use crate::error::{CommandError, Result};
use crate::io::console::{read, read_from, try_read};
use serde::Serialize;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

/// Kind of scalar to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Signed 64-bit integer.
    Int,
    /// 64-bit float.
    Float,
    /// `true` or `false`.
    Bool,
    /// A single character token.
    Char,
    /// Any whitespace-free token.
    Word,
}

impl ScalarKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 5] = [Self::Int, Self::Float, Self::Bool, Self::Char, Self::Word];

    /// Lowercase name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Word => "word",
        }
    }

    /// The value a silent read falls back to.
    #[must_use]
    pub fn default_value(self) -> Scalar {
        match self {
            Self::Int => Scalar::Int(i64::default()),
            Self::Float => Scalar::Float(f64::default()),
            Self::Bool => Scalar::Bool(bool::default()),
            Self::Char => Scalar::Char(char::default()),
            Self::Word => Scalar::Word(String::new()),
        }
    }

    /// Reads one token of this kind from `reader`.
    pub fn read_from<R: BufRead + ?Sized>(self, reader: &mut R) -> Result<Scalar> {
        Ok(match self {
            Self::Int => Scalar::Int(read_from(reader)?),
            Self::Float => Scalar::Float(read_from(reader)?),
            Self::Bool => Scalar::Bool(read_from(reader)?),
            Self::Char => Scalar::Char(read_from(reader)?),
            Self::Word => Scalar::Word(read_from(reader)?),
        })
    }

    /// Reads one token of this kind from standard input.
    pub fn try_read_stdin(self) -> Result<Scalar> {
        Ok(match self {
            Self::Int => Scalar::Int(try_read()?),
            Self::Float => Scalar::Float(try_read()?),
            Self::Bool => Scalar::Bool(try_read()?),
            Self::Char => Scalar::Char(try_read()?),
            Self::Word => Scalar::Word(try_read()?),
        })
    }

    /// Reads one token of this kind from standard input, or the kind's
    /// default value if it is missing or malformed.
    pub fn read_stdin(self) -> Scalar {
        match self {
            Self::Int => Scalar::Int(read()),
            Self::Float => Scalar::Float(read()),
            Self::Bool => Scalar::Bool(read()),
            Self::Char => Scalar::Char(read()),
            Self::Word => Scalar::Word(read()),
        }
    }
}

impl FromStr for ScalarKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CommandError::InvalidArgument(format!(
                    "unknown scalar kind: {s} (expected one of: int, float, bool, char, word)"
                ))
                .into()
            })
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Character value.
    Char(char),
    /// Text token.
    Word(String),
}

impl Scalar {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Int(_) => ScalarKind::Int,
            Self::Float(_) => ScalarKind::Float,
            Self::Bool(_) => ScalarKind::Bool,
            Self::Char(_) => ScalarKind::Char,
            Self::Word(_) => ScalarKind::Word,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Word(v) => f.write_str(v),
        }
    }
}
