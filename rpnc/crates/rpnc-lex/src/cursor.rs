//! Character cursor over one line of input.
//!
//! The `Cursor` is the character source the lexer reads from. It hands out
//! one character at a time, keeps line/column information for error
//! reporting and lets the lexer put back up to two characters: the one that
//! ended a token and, for implicit multiplication, a synthesized `*` in
//! front of it.

use std::str::Chars;

use rpnc_util::{Position, DEFAULT_TAB_WIDTH};

/// Character returned by [`Cursor::read`] once the input is exhausted.
pub const EOF: char = '\0';

/// How many characters may be pushed back before one is read again.
pub const PUSHBACK_CAPACITY: usize = 2;

/// A cursor for reading source text character by character.
///
/// # Example
///
/// ```
/// use rpnc_lex::cursor::{Cursor, EOF};
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.read(), 'a');
/// cursor.unread('a');
/// assert_eq!(cursor.read(), 'a');
/// assert_eq!(cursor.read(), 'b');
/// assert_eq!(cursor.read(), EOF);
/// ```
pub struct Cursor<'a> {
    /// Remaining characters of the source.
    chars: Chars<'a>,

    /// Pushed-back characters with the position each one starts at.
    /// The last occupied slot is read first.
    pushback: [(char, Position); PUSHBACK_CAPACITY],

    /// Number of occupied slots in `pushback`.
    pushed: usize,

    /// Position of the next character to be read.
    position: Position,

    /// Position at which the most recently read character started.
    last_start: Position,

    /// Width of a tab stop, in columns.
    tab_width: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor with the default tab width.
    pub fn new(source: &'a str) -> Self {
        Self::with_tab_width(source, DEFAULT_TAB_WIDTH)
    }

    /// Creates a cursor that expands tabs to multiples of `tab_width`.
    ///
    /// # Panics
    ///
    /// Panics if `tab_width` is zero.
    pub fn with_tab_width(source: &'a str, tab_width: u32) -> Self {
        assert!(tab_width > 0, "tab width must be at least 1");

        Self {
            chars: source.chars(),
            pushback: [(EOF, Position::START); PUSHBACK_CAPACITY],
            pushed: 0,
            position: Position::START,
            last_start: Position::START,
            tab_width,
        }
    }

    /// Reads the next character, or [`EOF`] at end of input.
    ///
    /// Reading at end of input does not move the position. While pushed-back
    /// characters remain, the position is that of the next one.
    pub fn read(&mut self) -> char {
        let (ch, start) = if self.pushed > 0 {
            self.pushed -= 1;
            self.pushback[self.pushed]
        } else {
            match self.chars.next() {
                Some(ch) => (ch, self.position),
                None => {
                    self.last_start = self.position;
                    return EOF;
                },
            }
        };

        self.last_start = start;
        self.position = if self.pushed > 0 {
            self.pushback[self.pushed - 1].1
        } else if ch == EOF {
            start
        } else {
            start.advance(ch, self.tab_width)
        };
        ch
    }

    /// Pushes `ch` back so that the next [`read`](Self::read) returns it.
    ///
    /// The position is rewound to where the most recently read character
    /// started, so a synthesized character shares the position of the
    /// character it is placed in front of.
    ///
    /// # Panics
    ///
    /// Panics if [`PUSHBACK_CAPACITY`] characters are already pending.
    pub fn unread(&mut self, ch: char) {
        assert!(
            self.pushed < PUSHBACK_CAPACITY,
            "pushback buffer overflow: at most {} characters may be unread",
            PUSHBACK_CAPACITY
        );

        self.pushback[self.pushed] = (ch, self.last_start);
        self.pushed += 1;
        self.position = self.last_start;
    }

    /// Returns the position of the next character to be read.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the position at which the most recently read character started.
    pub fn last_position(&self) -> Position {
        self.last_start
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Returns the current column number (1-based, tabs expanded).
    pub fn column(&self) -> u32 {
        self.position.column
    }
}
