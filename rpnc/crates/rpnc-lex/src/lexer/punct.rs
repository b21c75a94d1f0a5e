//! Whitespace and close-parenthesis lexing.

use rpnc_util::Result;

use crate::chars::{ends_blanks, ends_number, is_blank, is_digit, starts_implicit_operand};
use crate::cursor::EOF;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of blanks whose first character has been read.
    pub(crate) fn lex_whitespace(&mut self, first: char) -> Result<Token> {
        let mut lexeme = String::from(first);

        loop {
            match self.cursor.read() {
                EOF => return Ok(Token::new(TokenKind::Whitespace, lexeme)),
                c if is_blank(c) => lexeme.push(c),
                c if ends_blanks(c) => {
                    self.cursor.unread(c);
                    return Ok(Token::new(TokenKind::Whitespace, lexeme));
                },
                c => return Err(self.illegal(c)),
            }
        }
    }

    /// Lexes what follows a `)`.
    ///
    /// A value or `(` right after it makes the group a factor: `(a)(b)`
    /// and `(a)2` are products.
    pub(crate) fn lex_close_paren(&mut self) -> Result<Token> {
        let c = self.cursor.read();
        self.end_operand(c, Token::close_paren(), ends_group, follows_group)
    }
}

fn ends_group(c: char) -> bool {
    ends_number(c) || c == '.'
}

fn follows_group(c: char) -> bool {
    is_digit(c) || starts_implicit_operand(c)
}
