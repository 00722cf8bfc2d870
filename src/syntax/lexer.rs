//! Lexer (Tokenizer)
//!
//! This module converts surface text into a stream of tokens.

use super::token::{SpannedToken, Token};
use crate::error::{Error, Result};

/// Characters allowed inside a symbol besides alphanumerics
const SYMBOL_PUNCTUATION: &str = "_-+*/<>=!?.:&%$^~'";

/// Surface syntax lexer
pub struct Lexer {
    /// Input characters
    input: Vec<char>,
    /// Current position in input
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given input
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input. The last token is always `Eof`.
    pub fn tokenize(&mut self) -> Result<Vec<SpannedToken>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = token.token == Token::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        Ok(tokens)
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Result<SpannedToken> {
        self.skip_trivia();

        let position = self.position;
        if self.is_at_end() {
            return Ok(SpannedToken {
                token: Token::Eof,
                position,
            });
        }

        let ch = self.current_char();
        let token = match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            _ if is_symbol_char(ch) => {
                return Ok(SpannedToken {
                    token: self.read_symbol(),
                    position,
                });
            }
            _ => return Err(Error::UnexpectedCharacter(ch, position)),
        };
        self.advance();

        Ok(SpannedToken { token, position })
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Skip whitespace, commas and `;` line comments
    fn skip_trivia(&mut self) {
        while !self.is_at_end() {
            let ch = self.current_char();
            if ch.is_whitespace() || ch == ',' {
                self.advance();
            } else if ch == ';' {
                while !self.is_at_end() && self.current_char() != '\n' {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_symbol(&mut self) -> Token {
        let mut value = String::new();

        while !self.is_at_end() && is_symbol_char(self.current_char()) {
            value.push(self.current_char());
            self.advance();
        }

        Token::Symbol(value)
    }
}

/// Check if `ch` may appear in a symbol
pub(crate) fn is_symbol_char(ch: char) -> bool {
    ch.is_alphanumeric() || SYMBOL_PUNCTUATION.contains(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_function_literal() {
        assert_eq!(
            tokens("(fn [x] x)"),
            vec![
                Token::LParen,
                Token::Symbol("fn".to_string()),
                Token::LBracket,
                Token::Symbol("x".to_string()),
                Token::RBracket,
                Token::Symbol("x".to_string()),
                Token::RParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_positions() {
        let spanned = Lexer::new("  (ab c)").tokenize().unwrap();
        let positions: Vec<usize> = spanned.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![2, 3, 6, 7, 8]);
    }

    #[test]
    fn test_symbol_punctuation() {
        assert_eq!(
            tokens("x' <=? a-b"),
            vec![
                Token::Symbol("x'".to_string()),
                Token::Symbol("<=?".to_string()),
                Token::Symbol("a-b".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_and_commas() {
        assert_eq!(
            tokens("; identity\n(f, a) ; trailing"),
            vec![
                Token::LParen,
                Token::Symbol("f".to_string()),
                Token::Symbol("a".to_string()),
                Token::RParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("(f \"a\")").tokenize().unwrap_err();
        assert_eq!(err, Error::UnexpectedCharacter('"', 3));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokens("   "), vec![Token::Eof]);
    }
}
