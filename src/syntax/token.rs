//! Token definitions
//!
//! This module defines the tokens of the surface syntax.

use std::fmt;

/// Surface syntax token types
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// (
    LParen,
    /// )
    RParen,
    /// [
    LBracket,
    /// ]
    RBracket,
    /// Any atom, including the `fn` marker
    Symbol(String),
    /// End of input
    Eof,
}

impl Token {
    /// Check if this token closes a sequence
    pub fn is_close(&self) -> bool {
        matches!(self, Token::RParen | Token::RBracket)
    }

    /// The delimiter character, if this is one
    pub fn delimiter_char(&self) -> Option<char> {
        match self {
            Token::LParen => Some('('),
            Token::RParen => Some(')'),
            Token::LBracket => Some('['),
            Token::RBracket => Some(']'),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Symbol(s) => write!(f, "{}", s),
            Token::Eof => write!(f, "EOF"),
        }
    }
}

/// A token together with its character offset in the input
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: usize,
}
