//! rpnc-lex - Lexical Analyzer for calculator statements
//!
//! This crate turns one line of calculator input into a stream of tokens
//! that the parser consumes. The scanner is a finite-state machine driven by
//! a [`Cursor`] with two characters of pushback.
//!
//! # Example Usage
//!
//! ```
//! use rpnc_lex::{Lexer, Token, TokenKind};
//!
//! let tokens: Vec<Token> = Lexer::new("x = 2y")
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(tokens[0], Token::identifier("x"));
//! assert_eq!(tokens[2], Token::new(TokenKind::Assign, "="));
//! assert_eq!(tokens[4], Token::new(TokenKind::Integer, "2"));
//! assert_eq!(tokens[5], Token::operator("*"));
//! assert_eq!(tokens.last(), Some(&Token::end_of_input()));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Scanner states
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes the states dispatch on
//!
//! # Token Categories
//!
//! - **Literals**: `42`, `1.5`, `.5`, `1.`
//! - **Identifiers**: `[a-zA-Z_][a-zA-Z0-9_]*`
//! - **Operators**: `+`, `-`, `*`, `/`, `^`, `!`, `%`
//! - **Punctuation**: `,`, `=`, `(`, `)`
//! - **Commands**: `/name`
//! - **Layout**: whitespace runs, end of line, end of input
//!
//! # Implicit Multiplication
//!
//! A number or `)` directly followed by another operand gets a `*` token
//! inserted: `2x`, `2(x)`, `(a)(b)` and `(a)2` are all products. A name
//! followed by `(` is left alone; the parser reads it as a call.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
