//! Error types for fnlang
//!
//! This module defines all error types used by the reader and the classifier.

use thiserror::Error;

use crate::syntax::RawInput;

/// The main error type for fnlang
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ========== Lexer Errors ==========
    #[error("Lexer error: unexpected character '{0}' at position {1}")]
    UnexpectedCharacter(char, usize),

    #[error("Lexer error: '{0}' is not a valid symbol")]
    InvalidSymbol(String),

    // ========== Reader Errors ==========
    #[error("Read error: unexpected token '{found}' at position {position}, expected {expected}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("Read error: unexpected end of input, expected {0}")]
    UnexpectedEof(String),

    #[error("Read error: '{open}' closed by '{close}' at position {position}")]
    MismatchedDelimiter {
        open: char,
        close: char,
        position: usize,
    },

    #[error("Read error: trailing input at position {0}")]
    TrailingInput(usize),

    // ========== Classifier Errors ==========
    #[error("Classify error: invalid expression {0}")]
    InvalidExpression(RawInput),

    #[error("Nesting error: input nested deeper than {0} levels")]
    NestingTooDeep(usize),

    // ========== Config Errors ==========
    #[error("Config error: {0}")]
    Config(String),

    // ========== I/O Errors ==========
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// True when more input could complete the form (used by the REPL)
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Error::UnexpectedEof(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type alias for fnlang operations
pub type Result<T> = std::result::Result<T, Error>;
