//! Statement parsing - empty, expression, assignment and command forms.

use rpnc_lex::TokenKind;
use rpnc_util::{Expected, Result};
use tracing::trace;

use crate::postfix::PostfixItem;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses the statement form chosen by the first token.
    pub(crate) fn parse_stmt(&mut self) -> Result<()> {
        self.current = self.read()?;

        match self.current.kind {
            TokenKind::EndOfInput | TokenKind::EndOfLine => {
                trace!("empty statement");
                Ok(())
            },
            TokenKind::Integer | TokenKind::Float | TokenKind::Parenthesis
                if !self.current.is_paren(")") =>
            {
                self.parse_expr_stmt()
            },
            TokenKind::Operator
                if self.current.is_operator("+") || self.current.is_operator("-") =>
            {
                self.parse_expr_stmt()
            },
            TokenKind::Identifier => self.parse_identifier_stmt(),
            TokenKind::Command => self.parse_command_stmt(),
            _ => Err(self.unexpected(Expected::ExpressionOrCommand)),
        }
    }

    fn parse_expr_stmt(&mut self) -> Result<()> {
        trace!("expression statement");
        self.parse_expr()?;
        self.expect_end()
    }

    /// Parses an assignment, or an expression starting with a name.
    ///
    /// One token of lookahead past the name decides; it is read without
    /// splitting commands so that `a /b` stays a division once pushed back.
    fn parse_identifier_stmt(&mut self) -> Result<()> {
        let name = self.current.clone();
        let name_start = self.current_start;
        let next = self.read()?;

        if next.kind != TokenKind::Assign {
            self.lexer.push_back(next);
            self.current_start = name_start;
            return self.parse_expr_stmt();
        }

        trace!(target = %name.lexeme, "assignment statement");
        if let Some(item) = PostfixItem::operand(&name) {
            self.output.push(item);
        }
        self.advance()?;
        self.parse_expr()?;
        self.output.push(PostfixItem::assign());
        self.expect_end()
    }

    fn parse_command_stmt(&mut self) -> Result<()> {
        trace!(command = %self.current.lexeme, "command statement");
        self.output.push(PostfixItem::command(&self.current.lexeme));
        self.current = self.read()?;
        self.expect_end()
    }
}
