//! Tokenizer for arithmetic expressions.
//!
//! A single-pass cursor over the input bytes. Numbers are parsed eagerly
//! into [`Number`] values; every token records the byte offset it started
//! at so parse errors can point back into the source expression.

use std::fmt;

use crate::error::EvalError;
use crate::eval::value::Number;

/// A lexical token of the arithmetic grammar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal (integer or decimal)
    Number(Number),
    /// Addition operator (+)
    Plus,
    /// Subtraction operator (-)
    Minus,
    /// Multiplication operator (*)
    Star,
    /// True-division operator (/)
    Slash,
    /// Floor-division operator (//)
    SlashSlash,
    /// Modulo operator (%)
    Percent,
    /// Exponentiation operator (**)
    StarStar,
    /// Opening parenthesis
    LeftParen,
    /// Closing parenthesis
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::SlashSlash => f.write_str("//"),
            Token::Percent => f.write_str("%"),
            Token::StarStar => f.write_str("**"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// A token together with the byte offset where it started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    /// The token itself
    pub token: Token,
    /// Byte offset into the source expression
    pub offset: usize,
}

/// Streaming tokenizer over a source expression.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given expression.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Consumes the tokenizer and returns all tokens in source order.
    pub fn tokenize(mut self) -> Result<Vec<Spanned>, EvalError> {
        let mut tokens = Vec::new();
        while let Some(spanned) = self.next_token()? {
            tokens.push(spanned);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Spanned>, EvalError> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(&byte) = self.input.as_bytes().get(self.pos) else {
            return Ok(None);
        };

        let token = match byte {
            b'+' => {
                self.pos += 1;
                Token::Plus
            }
            b'-' => {
                self.pos += 1;
                Token::Minus
            }
            b'*' => {
                if self.peek_byte(1) == Some(b'*') {
                    self.pos += 2;
                    Token::StarStar
                } else {
                    self.pos += 1;
                    Token::Star
                }
            }
            b'/' => {
                if self.peek_byte(1) == Some(b'/') {
                    self.pos += 2;
                    Token::SlashSlash
                } else {
                    self.pos += 1;
                    Token::Slash
                }
            }
            b'%' => {
                self.pos += 1;
                Token::Percent
            }
            b'(' => {
                self.pos += 1;
                Token::LeftParen
            }
            b')' => {
                self.pos += 1;
                Token::RightParen
            }
            b'0'..=b'9' => return self.number(start).map(Some),
            _ => {
                // Report the whole character, not the leading byte.
                let ch = self.input[start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(EvalError::syntax(
                    format!("unexpected character '{ch}'"),
                    start,
                ));
            }
        };

        Ok(Some(Spanned {
            token,
            offset: start,
        }))
    }

    fn number(&mut self, start: usize) -> Result<Spanned, EvalError> {
        let mut is_float = false;
        self.consume_digits();

        if self.peek_byte(0) == Some(b'.') {
            is_float = true;
            self.pos += 1;
            self.consume_digits();
        }

        if matches!(self.peek_byte(0), Some(b'e' | b'E')) {
            is_float = true;
            self.pos += 1;
            if matches!(self.peek_byte(0), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if !matches!(self.peek_byte(0), Some(b'0'..=b'9')) {
                return Err(EvalError::syntax("malformed exponent", self.pos));
            }
            self.consume_digits();
        }

        let text = &self.input[start..self.pos];
        let number = if is_float {
            text.parse::<f64>()
                .map(Number::Float)
                .map_err(|_| EvalError::syntax("invalid numeric literal", start))?
        } else {
            // Integer literals wider than 64 bits have no representation
            // in the value model.
            text.parse::<i64>()
                .map(Number::Int)
                .map_err(|_| EvalError::IntegerOverflow)?
        };

        Ok(Spanned {
            token: Token::Number(number),
            offset: start,
        })
    }

    fn consume_digits(&mut self) {
        while matches!(self.peek_byte(0), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek_byte(0), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek_byte(&self, ahead: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + ahead).copied()
    }
}
