//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the start state of the scanner and
//! the one-token pushback used by the parser for lookahead.

use rpnc_util::{Position, Result, SyntaxError};

use crate::chars::{
    is_blank, is_digit, is_ident_start, is_single_operator, CR, IMPLICIT_MUL, LF,
};
use crate::cursor::{Cursor, EOF};
use crate::token::{Token, TokenKind};

/// Lexer for calculator statements.
///
/// Every call to [`next_token`](Lexer::next_token) consumes the longest run
/// of characters forming one token and puts back the character that ended
/// it. Adjacent operands such as `2x` or `(a)(b)` come out with a `*`
/// operator token between them.
///
/// # Example
///
/// ```
/// use rpnc_lex::{Lexer, Token, TokenKind};
///
/// let mut lexer = Lexer::new("24a");
/// assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Integer, "24"));
/// assert_eq!(lexer.next_token().unwrap(), Token::operator("*"));
/// assert_eq!(lexer.next_token().unwrap(), Token::identifier("a"));
/// assert_eq!(lexer.next_token().unwrap(), Token::end_of_input());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Token put back by the caller, with the position it started at.
    pending: Option<(Token, Position)>,

    /// Position where the most recently returned token starts.
    token_start: Position,

    /// Set once the iterator has yielded end of input or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source line.
    pub fn new(source: &'a str) -> Self {
        Self::from_cursor(Cursor::new(source))
    }

    /// Creates a lexer whose positions expand tabs to `tab_width` columns.
    pub fn with_tab_width(source: &'a str, tab_width: u32) -> Self {
        Self::from_cursor(Cursor::with_tab_width(source, tab_width))
    }

    /// Creates a lexer reading from an existing cursor.
    pub fn from_cursor(cursor: Cursor<'a>) -> Self {
        Self {
            token_start: cursor.position(),
            cursor,
            pending: None,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// A token previously handed to [`push_back`](Lexer::push_back) is
    /// returned first.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::IllegalCharacter`] when a character cannot
    /// start or continue a token.
    pub fn next_token(&mut self) -> Result<Token> {
        if let Some((token, start)) = self.pending.take() {
            self.token_start = start;
            return Ok(token);
        }

        self.token_start = self.cursor.position();

        match self.cursor.read() {
            EOF => Ok(Token::end_of_input()),
            LF => Ok(Token::end_of_line()),
            CR => {
                self.skip_line_feed();
                Ok(Token::end_of_line())
            },
            c if is_digit(c) => self.lex_integer(c),
            '.' => self.lex_fraction_start(),
            c if is_ident_start(c) => self.lex_identifier(c),
            c if is_single_operator(c) => Ok(Token::operator(c)),
            '/' => self.lex_slash(),
            ',' => Ok(Token::new(TokenKind::Comma, ",")),
            '=' => Ok(Token::new(TokenKind::Assign, "=")),
            c if is_blank(c) => self.lex_whitespace(c),
            '(' => Ok(Token::open_paren()),
            ')' => self.lex_close_paren(),
            c => Err(self.illegal(c)),
        }
    }

    /// Puts `token` back so that the next call to
    /// [`next_token`](Lexer::next_token) returns it.
    ///
    /// # Panics
    ///
    /// Panics if a token is already pending; lookahead is one token deep.
    pub fn push_back(&mut self, token: Token) {
        self.push_back_at(token, self.token_start);
    }

    /// Like [`push_back`](Lexer::push_back), but the token reports `start`
    /// as its position when read again.
    ///
    /// # Panics
    ///
    /// Panics if a token is already pending.
    pub fn push_back_at(&mut self, token: Token, start: Position) {
        assert!(
            self.pending.is_none(),
            "token pushback buffer overflow: only one token may be pushed back"
        );
        self.pending = Some((token, start));
    }

    /// Returns true if the next token is anything but end of input.
    ///
    /// The token is read and pushed back, so it is still the next one
    /// returned.
    pub fn has_next(&mut self) -> Result<bool> {
        let token = self.next_token()?;
        let more = token.kind != TokenKind::EndOfInput;
        self.push_back(token);
        Ok(more)
    }

    /// Returns the position where the most recently returned token starts.
    pub fn token_start(&self) -> Position {
        self.token_start
    }

    /// Returns the position of the next character to be scanned.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Builds the error for the character just read.
    pub(crate) fn illegal(&self, c: char) -> SyntaxError {
        SyntaxError::illegal_character(c, self.cursor.last_position())
    }

    /// Ends an operand token (number or `)`) on the character `c`.
    ///
    /// Terminators are put back as they are. A character starting another
    /// operand is put back behind a synthesized `*`, which turns adjacency
    /// into multiplication.
    pub(crate) fn end_operand(
        &mut self,
        c: char,
        token: Token,
        terminates: fn(char) -> bool,
        implies_product: fn(char) -> bool,
    ) -> Result<Token> {
        if c == EOF {
            Ok(token)
        } else if terminates(c) {
            self.cursor.unread(c);
            Ok(token)
        } else if implies_product(c) {
            self.cursor.unread(c);
            self.cursor.unread(IMPLICIT_MUL);
            Ok(token)
        } else {
            Err(self.illegal(c))
        }
    }

    /// Consumes the `\n` of a `\r\n` pair.
    fn skip_line_feed(&mut self) {
        let c = self.cursor.read();
        if c != LF && c != EOF {
            self.cursor.unread(c);
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    /// Yields tokens up to and including end of input, or up to the first
    /// error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.kind == TokenKind::EndOfInput,
            Err(_) => true,
        };
        Some(result)
    }
}
