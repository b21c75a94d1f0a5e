//! Postfix record definitions.
//!
//! A statement translates into a flat list of [`PostfixItem`]s in
//! operator-after-operands order, ready for a stack-based evaluator.

use std::fmt;

use rpnc_lex::{Token, TokenKind};

/// Classification of a postfix item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostfixKind {
    /// Integer literal
    Integer,
    /// Float literal
    Float,
    /// Variable or function name
    Identifier,
    /// Binary, unary (`u+`, `u-`) or postfix operator
    Operator,
    /// Assignment to the leading identifier
    Assign,
    /// Call protocol marker: `invoke` or `put_arg`
    Action,
    /// Command name, without the leading `/`
    Command,
}

/// One element of a postfix record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostfixItem {
    /// What the item is
    pub kind: PostfixKind,
    /// Its canonical text
    pub lexeme: String,
}

/// A translated statement.
pub type PostfixRecord = Vec<PostfixItem>;

/// Lexeme of the action that ends a call.
pub const INVOKE: &str = "invoke";

/// Lexeme of the action that follows each call argument.
pub const PUT_ARG: &str = "put_arg";

impl PostfixItem {
    /// Creates an item.
    pub fn new(kind: PostfixKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Converts a literal or identifier token into an operand item.
    ///
    /// Returns `None` for any other token kind.
    pub fn operand(token: &Token) -> Option<Self> {
        let kind = match token.kind {
            TokenKind::Integer => PostfixKind::Integer,
            TokenKind::Float => PostfixKind::Float,
            TokenKind::Identifier => PostfixKind::Identifier,
            _ => return None,
        };
        Some(Self::new(kind, token.lexeme.as_str()))
    }

    /// A binary or postfix operator, as written.
    pub fn operator(op: impl Into<String>) -> Self {
        Self::new(PostfixKind::Operator, op)
    }

    /// A prefix `+` or `-`, rendered `u+` or `u-`.
    pub fn unary(op: &str) -> Self {
        Self::new(PostfixKind::Operator, format!("u{}", op))
    }

    /// The assignment item.
    pub fn assign() -> Self {
        Self::new(PostfixKind::Assign, "=")
    }

    /// The `invoke` action.
    pub fn invoke() -> Self {
        Self::new(PostfixKind::Action, INVOKE)
    }

    /// The `put_arg` action.
    pub fn put_arg() -> Self {
        Self::new(PostfixKind::Action, PUT_ARG)
    }

    /// A command, from its `/name` token lexeme or bare name.
    pub fn command(lexeme: &str) -> Self {
        let name = lexeme.strip_prefix('/').unwrap_or(lexeme);
        Self::new(PostfixKind::Command, name)
    }
}

impl fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}

/// Renders a record as its lexemes joined by single spaces.
///
/// ```
/// use rpnc_par::{parse, render};
///
/// assert_eq!(render(&parse("a = 2^3^9").unwrap()), "a 2 3 9 ^ ^ =");
/// ```
pub fn render(items: &[PostfixItem]) -> String {
    items
        .iter()
        .map(|item| item.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
