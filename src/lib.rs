//! fnlang - a reader and classifier for a tiny expression language
//!
//! The language has three forms:
//! - `x` - a variable reference
//! - `(fn [x] body)` - a single-parameter function literal
//! - `(f a)` - an application
//!
//! Text is read into an untyped `RawInput` tree (`syntax`), then classified
//! into an `Expression` (`expr`).

pub mod config;
pub mod error;
pub mod expr;
pub mod syntax;

pub use config::Config;
pub use error::{Error, Result};
pub use expr::{classify, Classifier, Expression};
pub use syntax::{read_str, RawInput, Reader, Symbol};

/// Read and classify exactly one form with default limits
pub fn parse(text: &str) -> Result<Expression> {
    parse_with(text, &Config::default())
}

/// Read and classify exactly one form, honouring `config.max_depth`
pub fn parse_with(text: &str, config: &Config) -> Result<Expression> {
    let raw = Reader::new(text)?.max_depth(config.max_depth).read_one()?;
    Classifier::with_config(config).classify(&raw)
}
