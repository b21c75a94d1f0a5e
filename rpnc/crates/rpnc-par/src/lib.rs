//! rpnc-par - Parser for calculator statements
//!
//! This crate translates one statement into its postfix (RPN) form. The
//! statement forms are told apart by their first token or two; expressions
//! are parsed by a table-free push-down automaton over grammar symbols.
//!
//! # Overview
//!
//! Precedence, lowest first:
//!
//! 1. binary `+`, `-` (left-associative)
//! 2. binary `*`, `/` (left-associative)
//! 3. prefix `+`, `-`, emitted as `u+`, `u-`
//! 4. `^` (right-associative, exponent may carry a prefix sign)
//! 5. postfix `!`, `%`
//! 6. literals, names, calls and parenthesized groups
//!
//! # Example Usage
//!
//! ```
//! use rpnc_par::{parse, render};
//!
//! let record = parse("x = log(2, 1) + -y!").unwrap();
//! assert_eq!(render(&record), "x log 2 put_arg 1 put_arg invoke y ! u- + =");
//!
//! let err = parse("(1").unwrap_err();
//! assert_eq!(err.to_string(), "expected ')', got end of line");
//! ```
//!
//! # Errors
//!
//! The first mismatch aborts the statement. No partial record is returned
//! and there is no recovery; the caller reports and moves on.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[cfg(test)]
mod edge_cases;

mod expr;
mod grammar;
pub mod postfix;
mod stmt;

use rpnc_lex::{Lexer, Token, TokenKind};
use rpnc_util::{Expected, Found, Position, Result, SyntaxError};
use tracing::debug;

pub use postfix::{render, PostfixItem, PostfixKind, PostfixRecord};

/// Translates one statement into its postfix record.
///
/// # Errors
///
/// Returns the first lexical or syntax error met.
pub fn parse(input: &str) -> Result<PostfixRecord> {
    Parser::new(Lexer::new(input)).parse()
}

/// Statement parser.
///
/// A parser is single-use: [`parse`](Parser::parse) consumes it together
/// with its lexer.
pub struct Parser<'a> {
    /// Token source
    lexer: Lexer<'a>,

    /// Lookahead token, never whitespace
    current: Token,

    /// Where the lookahead starts
    current_start: Position,

    /// Record built so far
    output: PostfixRecord,
}

impl<'a> Parser<'a> {
    /// Creates a parser reading from `lexer`.
    ///
    /// # Example
    ///
    /// ```
    /// use rpnc_lex::Lexer;
    /// use rpnc_par::{render, Parser};
    ///
    /// let lexer = Lexer::with_tab_width("\t-5", 8);
    /// let record = Parser::new(lexer).parse().unwrap();
    /// assert_eq!(render(&record), "5 u-");
    /// ```
    pub fn new(lexer: Lexer<'a>) -> Self {
        let current_start = lexer.position();
        Self {
            lexer,
            current: Token::end_of_input(),
            current_start,
            output: Vec::new(),
        }
    }

    /// Parses one statement.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntax error met.
    pub fn parse(mut self) -> Result<PostfixRecord> {
        self.parse_stmt()?;
        debug!(items = self.output.len(), "statement translated");
        Ok(self.output)
    }

    // ========================================================================
    // TOKEN NAVIGATION
    // ========================================================================

    /// Reads the next token that is not whitespace.
    fn read(&mut self) -> Result<Token> {
        loop {
            let token = self.lexer.next_token()?;
            if token.kind != TokenKind::Whitespace {
                self.current_start = self.lexer.token_start();
                return Ok(token);
            }
        }
    }

    /// Reads the next token inside an expression.
    ///
    /// A command met here is really a division: `/name` is returned as the
    /// operator `/` and the name is pushed back as an identifier.
    fn read_in_expr(&mut self) -> Result<Token> {
        let token = self.read()?;
        if token.kind != TokenKind::Command {
            return Ok(token);
        }

        let name = token.lexeme.strip_prefix('/').unwrap_or(&token.lexeme);
        let name_start = Position::new(self.current_start.line, self.current_start.column + 1);
        self.lexer.push_back_at(Token::identifier(name), name_start);
        Ok(Token::operator('/'))
    }

    /// Moves to the next token of an expression.
    fn advance(&mut self) -> Result<()> {
        self.current = self.read_in_expr()?;
        Ok(())
    }

    /// Consumes the current token if it equals `expected`.
    fn expect(&mut self, expected: &Token) -> Result<()> {
        if self.current == *expected {
            self.advance()
        } else {
            Err(self.unexpected(Expected::Token(expected.lexeme.clone())))
        }
    }

    /// Requires the statement to end at the current token.
    fn expect_end(&self) -> Result<()> {
        if self.current.is_end() {
            Ok(())
        } else {
            Err(self.unexpected(Expected::EndOfLine))
        }
    }

    /// Builds the error for an unexpected current token.
    fn unexpected(&self, expected: Expected) -> SyntaxError {
        let found = if self.current.is_end() {
            Found::EndOfLine
        } else {
            Found::Lexeme(self.current.lexeme.clone())
        };
        SyntaxError::unexpected(expected, found, self.current_start)
    }
}
