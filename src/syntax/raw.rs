//! Untyped nested input
//!
//! `RawInput` is what the reader produces: atoms and ordered sequences,
//! with no meaning attached yet.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lexer::is_symbol_char;
use crate::error::{Error, Result};

/// An atomic identifier, equal by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Unchecked constructor. A name the lexer would split (spaces,
    /// brackets, `;`) prints as something that reads back differently;
    /// use `try_new` for names that must survive printing.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build a symbol that reads back as itself
    pub fn try_new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || !name.chars().all(is_symbol_char) {
            return Err(Error::InvalidSymbol(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bracket kind of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// ( ... )
    Paren,
    /// [ ... ]
    Bracket,
}

impl Delimiter {
    pub fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
        }
    }

    pub fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
        }
    }
}

/// Untyped nested structure: an atom or an ordered sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RawInput {
    Atom {
        symbol: Symbol,
    },
    Seq {
        delimiter: Delimiter,
        items: Vec<RawInput>,
    },
}

impl RawInput {
    /// An atom
    pub fn atom(name: impl Into<Symbol>) -> Self {
        RawInput::Atom {
            symbol: name.into(),
        }
    }

    /// A parenthesized sequence
    pub fn list(items: Vec<RawInput>) -> Self {
        RawInput::Seq {
            delimiter: Delimiter::Paren,
            items,
        }
    }

    /// A bracketed sequence
    pub fn vector(items: Vec<RawInput>) -> Self {
        RawInput::Seq {
            delimiter: Delimiter::Bracket,
            items,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            RawInput::Atom { symbol } => Some(symbol),
            RawInput::Seq { .. } => None,
        }
    }

    pub fn as_items(&self) -> Option<&[RawInput]> {
        match self {
            RawInput::Atom { .. } => None,
            RawInput::Seq { items, .. } => Some(items),
        }
    }

    /// Check whether this is the atom `name`
    pub fn is_symbol(&self, name: &str) -> bool {
        self.as_symbol().map_or(false, |s| s.as_str() == name)
    }
}

impl fmt::Display for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawInput::Atom { symbol } => write!(f, "{}", symbol),
            RawInput::Seq { delimiter, items } => {
                write!(f, "{}", delimiter.open())?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "{}", delimiter.close())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_delimiters() {
        let raw = RawInput::list(vec![
            RawInput::atom("fn"),
            RawInput::vector(vec![RawInput::atom("x"), RawInput::atom("y")]),
            RawInput::atom("x"),
        ]);
        assert_eq!(raw.to_string(), "(fn [x y] x)");
        assert_eq!(RawInput::vector(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_checked_symbols() {
        assert_eq!(Symbol::try_new("x'").unwrap(), Symbol::new("x'"));
        assert_eq!(Symbol::try_new("a-b?").unwrap().as_str(), "a-b?");

        for bad in ["", "a b", "f(x)", "[x]", "a;b", "\"q\""] {
            assert_eq!(
                Symbol::try_new(bad).unwrap_err(),
                Error::InvalidSymbol(bad.to_string())
            );
        }
    }

    #[test]
    fn test_accessors() {
        let atom = RawInput::atom("fn");
        assert!(atom.is_symbol("fn"));
        assert!(!atom.is_symbol("x"));
        assert!(atom.as_items().is_none());

        let seq = RawInput::list(vec![atom.clone()]);
        assert_eq!(seq.as_items().map(|items| items.len()), Some(1));
        assert!(seq.as_symbol().is_none());
    }

    #[test]
    fn test_json_shape() {
        let raw = RawInput::list(vec![RawInput::atom("f"), RawInput::atom("a")]);
        let json = serde_json::to_value(&raw).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "seq",
                "delimiter": "paren",
                "items": [
                    { "kind": "atom", "symbol": "f" },
                    { "kind": "atom", "symbol": "a" }
                ]
            })
        );
    }
}
