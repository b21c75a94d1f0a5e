//! Grammar symbols for the expression driver.
//!
//! The expression grammar runs as a push-down automaton: the driver pops one
//! [`Symbol`] at a time and, depending on the lookahead, replaces a rule with
//! the symbols of one of its alternatives. Symbols are pushed in reverse, so
//! the leftmost one is expanded first.

use rpnc_lex::Token;

use crate::postfix::PostfixItem;

/// A grammar symbol on the parser stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Symbol {
    /// A token the lookahead must equal, consumed on match.
    Terminal(Token),
    /// A rule still to be expanded.
    Rule(Rule),
    /// An item appended to the record once everything before it is done.
    Emit(PostfixItem),
}

/// Expression rules, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    /// `Term SumRest`
    Sum,
    /// `('+' | '-') Term SumRest | ε`
    SumRest,
    /// `Unary TermRest`
    Term,
    /// `('*' | '/') Unary TermRest | ε`
    TermRest,
    /// `('+' | '-') Unary | Power`
    Unary,
    /// `Postfix PowerRest`
    Power,
    /// `'^' Unary | ε`
    PowerRest,
    /// `Primary PostfixRest`
    Postfix,
    /// `('!' | '%') PostfixRest | ε`
    PostfixRest,
    /// Literal, `Identifier CallSuffix` or `'(' Sum ')'`
    Primary,
    /// `'(' ')' | '(' ArgList ')' | ε`
    CallSuffix,
    /// `Sum put_arg ArgListRest`
    ArgList,
    /// `',' ArgList | ε`
    ArgListRest,
}
