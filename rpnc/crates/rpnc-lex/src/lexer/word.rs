//! Identifier and command lexing.
//!
//! Names never trigger implicit multiplication: a name followed by `(` is a
//! function call, which the parser decides.

use rpnc_util::Result;

use crate::chars::{ends_slash, ends_word, is_ident_continue, is_ident_start};
use crate::cursor::EOF;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier whose first character has been read.
    pub(crate) fn lex_identifier(&mut self, first: char) -> Result<Token> {
        self.lex_word(String::from(first), TokenKind::Identifier)
    }

    /// Lexes what follows a `/`: a command when a name starts right after
    /// it, the division operator otherwise.
    pub(crate) fn lex_slash(&mut self) -> Result<Token> {
        match self.cursor.read() {
            EOF => Ok(Token::operator('/')),
            c if is_ident_start(c) => {
                let mut lexeme = String::from('/');
                lexeme.push(c);
                self.lex_word(lexeme, TokenKind::Command)
            },
            c if ends_slash(c) => {
                self.cursor.unread(c);
                Ok(Token::operator('/'))
            },
            c => Err(self.illegal(c)),
        }
    }

    fn lex_word(&mut self, mut lexeme: String, kind: TokenKind) -> Result<Token> {
        loop {
            match self.cursor.read() {
                EOF => return Ok(Token::new(kind, lexeme)),
                c if is_ident_continue(c) => lexeme.push(c),
                c if ends_word(c) => {
                    self.cursor.unread(c);
                    return Ok(Token::new(kind, lexeme));
                },
                c => return Err(self.illegal(c)),
            }
        }
    }
}
