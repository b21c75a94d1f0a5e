//! Token definitions.
//!
//! A token is a `(kind, lexeme)` pair. Two tokens are equal when both parts
//! are equal, which is what the parser relies on when it matches a grammar
//! terminal such as `)` against the lookahead.

use std::fmt;

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input; the lexeme is empty.
    EndOfInput,
    /// `\n` or `\r`; the lexeme is always `"\n"`.
    EndOfLine,
    /// Decimal digits, e.g. `42`.
    Integer,
    /// Digits with a decimal point, e.g. `1.5`, `.5`, `1.`.
    Float,
    /// A name, e.g. `x1` or `log`.
    Identifier,
    /// One of `+ - * / ^ ! %`.
    Operator,
    /// `,`
    Comma,
    /// `=`
    Assign,
    /// A run of tabs, vertical tabs, form feeds and spaces.
    Whitespace,
    /// `(` or `)`.
    Parenthesis,
    /// `/` immediately followed by a name, e.g. `/help`.
    Command,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::EndOfLine => "EndOfLine",
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::Identifier => "Identifier",
            TokenKind::Operator => "Operator",
            TokenKind::Comma => "Comma",
            TokenKind::Assign => "Assign",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Parenthesis => "Parenthesis",
            TokenKind::Command => "Command",
        };
        f.write_str(name)
    }
}

/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What the token is
    pub kind: TokenKind,
    /// The text it stands for
    pub lexeme: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The end-of-input token.
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    /// The end-of-line token.
    pub fn end_of_line() -> Self {
        Self::new(TokenKind::EndOfLine, "\n")
    }

    /// An operator token.
    pub fn operator(op: impl Into<String>) -> Self {
        Self::new(TokenKind::Operator, op)
    }

    /// An identifier token.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, name)
    }

    /// The `(` token.
    pub fn open_paren() -> Self {
        Self::new(TokenKind::Parenthesis, "(")
    }

    /// The `)` token.
    pub fn close_paren() -> Self {
        Self::new(TokenKind::Parenthesis, ")")
    }

    /// Returns true if this token ends the statement.
    pub fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput | TokenKind::EndOfLine)
    }

    /// Returns true if this is the operator `op`.
    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.lexeme == op
    }

    /// Returns true if this is the parenthesis `paren`.
    pub fn is_paren(&self, paren: &str) -> bool {
        self.kind == TokenKind::Parenthesis && self.lexeme == paren
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)
    }
}
