//! Span module - Source location tracking.
//!
//! A statement is a single line, so a location is just a line and a column.
//! Columns are measured in display cells: a tab advances to the next tab
//! stop rather than by one.
//!
//! # Examples
//!
//! ```
//! use rpnc_util::span::Position;
//!
//! let pos = Position::START.advance('\t', 4).advance('x', 4);
//! assert_eq!(pos.column, 6);
//! ```

use std::fmt;

/// Tab width used when no configuration says otherwise.
pub const DEFAULT_TAB_WIDTH: u32 = 4;

/// Location of a character in the input (both fields 1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, tabs expanded)
    pub column: u32,
}

impl Position {
    /// The location of the first character of any input.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position
    ///
    /// # Examples
    ///
    /// ```
    /// use rpnc_util::span::Position;
    ///
    /// let pos = Position::new(2, 7);
    /// assert_eq!(pos.line, 2);
    /// ```
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the position that follows `ch` when `ch` starts at `self`.
    ///
    /// A line feed moves to column 1 of the next line, a tab moves to the
    /// next multiple of `tab_width` (plus one, columns being 1-based) and
    /// every other character moves one column right.
    ///
    /// # Panics
    ///
    /// Panics if `tab_width` is zero.
    #[must_use]
    pub fn advance(self, ch: char, tab_width: u32) -> Self {
        assert!(tab_width > 0, "tab width must be at least 1");

        match ch {
            '\n' => Self::new(self.line + 1, 1),
            '\t' => Self::new(
                self.line,
                self.column + (tab_width - (self.column - 1) % tab_width),
            ),
            _ => Self::new(self.line, self.column + 1),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
