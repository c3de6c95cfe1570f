//! Error types for parsing, value access, and serialization.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! the single [`Error`] enum defined here.
//!
//! ## Error Categories
//!
//! - **Syntax errors**: malformed tokens or structure, with line/column information
//! - **Unexpected end of input**: the text stopped while a token was still expected
//! - **Type mismatches**: an accessor asked for a variant the value does not hold
//! - **Range/precision errors**: an integer accessor met a fractional or oversized number
//! - **Recursion limit**: nesting went deeper than [`ParseOptions::max_depth`](crate::ParseOptions)
//! - **I/O errors**: writer or reader failures in the convenience helpers
//!
//! ## Examples
//!
//! ```rust
//! use jsontree::{parse, ErrorKind};
//!
//! let err = parse("[1, 2,]").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Syntax);
//! assert!(err.to_string().contains("line 1"));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors produced by this crate.
///
/// Parser errors carry the 1-based line and column where the problem was found.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed token or structural violation
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// The input ended while a token or structure was still expected
    #[error("Unexpected end of input at line {line}, column {col}: expected {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// An accessor was called on a value of a different variant
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// An integer accessor was called on a fractional or out-of-range number
    #[error("Number {value} cannot be represented as {target}")]
    RangeOrPrecision { value: f64, target: String },

    /// Nesting exceeded the configured maximum depth
    #[error("Recursion limit of {limit} exceeded at line {line}, column {col}")]
    RecursionLimitExceeded {
        line: usize,
        col: usize,
        limit: usize,
    },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised through serde
    #[error("Error: {0}")]
    Custom(String),
}

/// The category of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    UnexpectedEof,
    TypeMismatch,
    RangeOrPrecision,
    RecursionLimitExceeded,
    Io,
    Custom,
}

impl Error {
    /// Creates a syntax error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::Error;
    ///
    /// let err = Error::syntax(10, 5, "unexpected character 'x'");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::Error;
    ///
    /// let err = Error::type_mismatch("string", "number");
    /// assert!(err.to_string().contains("expected string"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a range/precision error for a number that does not fit `target`.
    pub fn range_or_precision(value: f64, target: &str) -> Self {
        Error::RangeOrPrecision {
            value,
            target: target.to_string(),
        }
    }

    /// Creates a recursion limit error.
    pub fn recursion_limit(line: usize, col: usize, limit: usize) -> Self {
        Error::RecursionLimitExceeded { line, col, limit }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::RangeOrPrecision { .. } => ErrorKind::RangeOrPrecision,
            Error::RecursionLimitExceeded { .. } => ErrorKind::RecursionLimitExceeded,
            Error::Io(_) => ErrorKind::Io,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns the `(line, column)` the error points at, for parser errors.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Syntax { line, col, .. }
            | Error::UnexpectedEof { line, col, .. }
            | Error::RecursionLimitExceeded { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
