//! Number literal lexing.
//!
//! This module handles the Integer and Float states. Both end on the same
//! terminators and both turn adjacency with a name or `(` into an implicit
//! multiplication.

use rpnc_util::{Result, SyntaxError};

use crate::chars::{ends_number, is_digit, starts_implicit_operand};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer whose first digit has been read.
    ///
    /// A `.` hands over to the Float state with the digits read so far.
    pub(crate) fn lex_integer(&mut self, first: char) -> Result<Token> {
        let mut lexeme = String::from(first);

        loop {
            match self.cursor.read() {
                c if is_digit(c) => lexeme.push(c),
                '.' => {
                    lexeme.push('.');
                    return self.lex_float(lexeme);
                },
                c => {
                    return self.end_operand(
                        c,
                        Token::new(TokenKind::Integer, lexeme),
                        ends_number,
                        starts_implicit_operand,
                    )
                },
            }
        }
    }

    /// Lexes a float starting with `.`, which has been read.
    ///
    /// The `.` must be followed by a digit; it is reported otherwise.
    pub(crate) fn lex_fraction_start(&mut self) -> Result<Token> {
        let dot = self.cursor.last_position();

        match self.cursor.read() {
            c if is_digit(c) => {
                let mut lexeme = String::from('.');
                lexeme.push(c);
                self.lex_float(lexeme)
            },
            _ => Err(SyntaxError::illegal_character('.', dot)),
        }
    }

    /// Lexes the remaining digits of a float whose `.` is already in `lexeme`.
    fn lex_float(&mut self, mut lexeme: String) -> Result<Token> {
        loop {
            match self.cursor.read() {
                c if is_digit(c) => lexeme.push(c),
                c => {
                    return self.end_operand(
                        c,
                        Token::new(TokenKind::Float, lexeme),
                        ends_float,
                        starts_implicit_operand,
                    )
                },
            }
        }
    }
}

/// A float ends where an integer does, and also on a second `.`.
fn ends_float(c: char) -> bool {
    ends_number(c) || c == '.'
}
