//! Expression parsing.
//!
//! Expressions are parsed without recursion: a stack of grammar symbols
//! replaces the call stack, so nesting depth is limited by memory only.

use rpnc_lex::{Token, TokenKind};
use rpnc_util::{Expected, Result};

use crate::grammar::{Rule, Symbol};
use crate::postfix::PostfixItem;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses one expression starting at the current token and appends its
    /// postfix form to the record.
    ///
    /// On return the current token is the first one after the expression.
    pub(crate) fn parse_expr(&mut self) -> Result<()> {
        let mut stack = vec![Symbol::Rule(Rule::Sum)];

        while let Some(symbol) = stack.pop() {
            match symbol {
                Symbol::Terminal(token) => self.expect(&token)?,
                Symbol::Emit(item) => self.output.push(item),
                Symbol::Rule(rule) => self.expand(rule, &mut stack)?,
            }
        }

        Ok(())
    }

    /// Expands `rule` against the current token.
    ///
    /// Symbols are pushed right to left. Tokens a rule decides on are
    /// consumed here rather than matched as terminals later.
    fn expand(&mut self, rule: Rule, stack: &mut Vec<Symbol>) -> Result<()> {
        match rule {
            Rule::Sum => {
                stack.push(Symbol::Rule(Rule::SumRest));
                stack.push(Symbol::Rule(Rule::Term));
            },
            Rule::SumRest => {
                if let Some(op) = self.take_operator(&["+", "-"])? {
                    stack.push(Symbol::Rule(Rule::SumRest));
                    stack.push(Symbol::Emit(PostfixItem::operator(op)));
                    stack.push(Symbol::Rule(Rule::Term));
                }
            },
            Rule::Term => {
                stack.push(Symbol::Rule(Rule::TermRest));
                stack.push(Symbol::Rule(Rule::Unary));
            },
            Rule::TermRest => {
                if let Some(op) = self.take_operator(&["*", "/"])? {
                    stack.push(Symbol::Rule(Rule::TermRest));
                    stack.push(Symbol::Emit(PostfixItem::operator(op)));
                    stack.push(Symbol::Rule(Rule::Unary));
                }
            },
            Rule::Unary => match self.take_operator(&["+", "-"])? {
                Some(op) => {
                    stack.push(Symbol::Emit(PostfixItem::unary(&op)));
                    stack.push(Symbol::Rule(Rule::Unary));
                },
                None => stack.push(Symbol::Rule(Rule::Power)),
            },
            Rule::Power => {
                stack.push(Symbol::Rule(Rule::PowerRest));
                stack.push(Symbol::Rule(Rule::Postfix));
            },
            Rule::PowerRest => {
                // The exponent is a whole unary operand, which already takes
                // every further `^`: `2^3^9` groups right to left.
                if let Some(op) = self.take_operator(&["^"])? {
                    stack.push(Symbol::Emit(PostfixItem::operator(op)));
                    stack.push(Symbol::Rule(Rule::Unary));
                }
            },
            Rule::Postfix => {
                stack.push(Symbol::Rule(Rule::PostfixRest));
                stack.push(Symbol::Rule(Rule::Primary));
            },
            Rule::PostfixRest => {
                while let Some(op) = self.take_operator(&["!", "%"])? {
                    self.output.push(PostfixItem::operator(op));
                }
            },
            Rule::Primary => self.expand_primary(stack)?,
            Rule::CallSuffix => {
                if self.current.is_paren("(") {
                    self.advance()?;
                    if self.current.is_paren(")") {
                        self.advance()?;
                        self.output.push(PostfixItem::invoke());
                    } else {
                        stack.push(Symbol::Emit(PostfixItem::invoke()));
                        stack.push(Symbol::Terminal(Token::close_paren()));
                        stack.push(Symbol::Rule(Rule::ArgList));
                    }
                }
            },
            Rule::ArgList => {
                stack.push(Symbol::Rule(Rule::ArgListRest));
                stack.push(Symbol::Emit(PostfixItem::put_arg()));
                stack.push(Symbol::Rule(Rule::Sum));
            },
            Rule::ArgListRest => {
                if self.current.kind == TokenKind::Comma {
                    self.advance()?;
                    stack.push(Symbol::Rule(Rule::ArgList));
                }
            },
        }

        Ok(())
    }

    fn expand_primary(&mut self, stack: &mut Vec<Symbol>) -> Result<()> {
        match self.current.kind {
            TokenKind::Integer | TokenKind::Float => {
                self.emit_operand();
                self.advance()?;
            },
            TokenKind::Identifier => {
                self.emit_operand();
                self.advance()?;
                stack.push(Symbol::Rule(Rule::CallSuffix));
            },
            TokenKind::Parenthesis if self.current.is_paren("(") => {
                self.advance()?;
                stack.push(Symbol::Terminal(Token::close_paren()));
                stack.push(Symbol::Rule(Rule::Sum));
            },
            _ => return Err(self.unexpected(Expected::Expression)),
        }

        Ok(())
    }

    /// Consumes the current token if it is one of `ops`, returning its lexeme.
    fn take_operator(&mut self, ops: &[&str]) -> Result<Option<String>> {
        if self.current.kind != TokenKind::Operator
            || !ops.contains(&self.current.lexeme.as_str())
        {
            return Ok(None);
        }

        let op = self.current.lexeme.clone();
        self.advance()?;
        Ok(Some(op))
    }

    fn emit_operand(&mut self) {
        if let Some(item) = PostfixItem::operand(&self.current) {
            self.output.push(item);
        }
    }
}
