//! Reader
//!
//! This module turns tokens into `RawInput` forms.

use tracing::trace;

use super::lexer::Lexer;
use super::raw::{Delimiter, RawInput};
use super::token::{SpannedToken, Token};
use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::{Error, Result};

/// Surface syntax reader
pub struct Reader {
    tokens: Vec<SpannedToken>,
    position: usize,
    max_depth: usize,
}

impl Reader {
    /// Create a new reader from source text
    pub fn new(text: &str) -> Result<Self> {
        let mut lexer = Lexer::new(text);
        let tokens = lexer.tokenize()?;

        Ok(Self {
            tokens,
            position: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    /// Limit how deeply sequences may nest (at least 1)
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Read the next form, or `None` at end of input
    pub fn read(&mut self) -> Result<Option<RawInput>> {
        if self.is_at_end() {
            return Ok(None);
        }
        self.read_form(0).map(Some)
    }

    /// Read every remaining form
    pub fn read_all(&mut self) -> Result<Vec<RawInput>> {
        let mut forms = Vec::new();

        while let Some(form) = self.read()? {
            forms.push(form);
        }

        Ok(forms)
    }

    /// Read exactly one form; anything after it is an error
    pub fn read_one(&mut self) -> Result<RawInput> {
        let form = self
            .read()?
            .ok_or_else(|| Error::UnexpectedEof("a form".to_string()))?;

        if !self.is_at_end() {
            return Err(Error::TrailingInput(self.current().position));
        }

        Ok(form)
    }

    fn read_form(&mut self, depth: usize) -> Result<RawInput> {
        let SpannedToken { token, position } = self.current().clone();

        match token {
            Token::Symbol(name) => {
                self.advance();
                Ok(RawInput::atom(name))
            }
            Token::LParen => self.read_seq(Delimiter::Paren, depth),
            Token::LBracket => self.read_seq(Delimiter::Bracket, depth),
            Token::Eof => Err(Error::UnexpectedEof("a form".to_string())),
            Token::RParen | Token::RBracket => Err(Error::UnexpectedToken {
                expected: "a form".to_string(),
                found: token.to_string(),
                position,
            }),
        }
    }

    fn read_seq(&mut self, delimiter: Delimiter, depth: usize) -> Result<RawInput> {
        if depth >= self.max_depth {
            return Err(Error::NestingTooDeep(self.max_depth));
        }
        self.advance(); // consume opener

        let mut items = Vec::new();

        loop {
            let SpannedToken { token, position } = self.current().clone();

            if token.is_close() {
                let close = token.delimiter_char().unwrap_or(delimiter.close());
                if close != delimiter.close() {
                    return Err(Error::MismatchedDelimiter {
                        open: delimiter.open(),
                        close,
                        position,
                    });
                }
                self.advance();
                break;
            }

            if token == Token::Eof {
                return Err(Error::UnexpectedEof(format!("'{}'", delimiter.close())));
            }

            items.push(self.read_form(depth + 1)?);
        }

        trace!(depth, len = items.len(), "read sequence");
        Ok(RawInput::Seq { delimiter, items })
    }

    fn current(&self) -> &SpannedToken {
        // the token list always ends with Eof
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current().token, Token::Eof)
    }
}

/// Read exactly one form from `text`
pub fn read_str(text: &str) -> Result<RawInput> {
    Reader::new(text)?.read_one()
}
