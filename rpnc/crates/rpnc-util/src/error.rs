//! Core error types shared by the lexer and the parser.
//!
//! Every failure aborts the statement being translated. A lexical failure
//! names the offending character; a syntax failure names what the grammar
//! expected and what it actually found.

use std::fmt;

use thiserror::Error;

use crate::span::Position;

/// Coarse classification of a [`SyntaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The scanner met a character no token can start or continue with.
    Lexical,
    /// The token stream does not match the grammar.
    Syntax,
}

/// What a grammar production was waiting for when it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// Any operand: literal, identifier, call, unary operator or group.
    Expression,
    /// The first token of a statement.
    ExpressionOrCommand,
    /// The end of the statement.
    EndOfLine,
    /// One specific token, by lexeme.
    Token(String),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Expression => write!(f, "expression"),
            Expected::ExpressionOrCommand => write!(f, "expression or command"),
            Expected::EndOfLine => write!(f, "end of line"),
            Expected::Token(lexeme) => write!(f, "'{}'", lexeme),
        }
    }
}

/// What the parser actually saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    /// A token, by lexeme.
    Lexeme(String),
    /// End of line or end of input; both read the same to the user.
    EndOfLine,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Lexeme(lexeme) => write!(f, "'{}'", lexeme),
            Found::EndOfLine => write!(f, "end of line"),
        }
    }
}

/// The single error kind raised while translating a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A character that cannot appear where it was read.
    #[error("illegal character '{character}'")]
    IllegalCharacter {
        /// The offending character
        character: char,
        /// Where it was read
        position: Position,
    },

    /// A grammar mismatch between the expected and the actual lookahead.
    #[error("expected {expected}, got {found}")]
    UnexpectedToken {
        /// Description of the acceptable input
        expected: Expected,
        /// Description of the token actually found
        found: Found,
        /// Where the found token starts
        position: Position,
    },
}

impl SyntaxError {
    /// Shorthand for [`SyntaxError::IllegalCharacter`].
    pub fn illegal_character(character: char, position: Position) -> Self {
        SyntaxError::IllegalCharacter {
            character,
            position,
        }
    }

    /// Shorthand for [`SyntaxError::UnexpectedToken`].
    pub fn unexpected(expected: Expected, found: Found, position: Position) -> Self {
        SyntaxError::UnexpectedToken {
            expected,
            found,
            position,
        }
    }

    /// Where the error was detected.
    pub fn position(&self) -> Position {
        match self {
            SyntaxError::IllegalCharacter { position, .. }
            | SyntaxError::UnexpectedToken { position, .. } => *position,
        }
    }

    /// Whether the error came from the scanner or from the grammar.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyntaxError::IllegalCharacter { .. } => ErrorKind::Lexical,
            SyntaxError::UnexpectedToken { .. } => ErrorKind::Syntax,
        }
    }
}

/// Result type alias for translation operations
pub type Result<T> = std::result::Result<T, SyntaxError>;
