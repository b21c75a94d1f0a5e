//! Diagnostic module - rendering errors for people.
//!
//! A [`Diagnostic`] pairs a [`SyntaxError`] with the line it was raised on
//! and formats it the way compilers usually do:
//!
//! ```text
//! error: expected end of line, got '*'
//!  --> 1:4
//!  |
//! 1 | /go*1
//!  |    ^
//! ```
//!
//! # Examples
//!
//! ```
//! use rpnc_util::{Diagnostic, Position, SyntaxError};
//!
//! let err = SyntaxError::illegal_character('@', Position::new(1, 3));
//! let text = Diagnostic::from_error(&err, "1+@").format();
//! assert!(text.starts_with("error: illegal character '@'"));
//! ```

use std::fmt;

use crate::error::SyntaxError;
use crate::span::Position;

/// A source code snippet for display in diagnostics
///
/// Holds one source line and the column range to underline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content, without its terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: u32,
    /// Column where the issue starts (1-based)
    pub start_column: u32,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: u32,
}

impl SourceSnippet {
    /// Create a snippet that points at a single column.
    ///
    /// Tabs in `line` are expanded with `tab_width` so the caret lines up
    /// with columns computed by the lexer.
    pub fn point(line: &str, line_number: u32, column: u32, tab_width: u32) -> Self {
        Self {
            line: expand_tabs(line.trim_end_matches(['\n', '\r']), tab_width),
            line_number,
            start_column: column,
            end_column: column + 1,
        }
    }

    /// Format the snippet with a gutter and a caret line.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len();
        let underline_start = self.start_column.saturating_sub(1) as usize;
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1) as usize;

        let mut result = String::new();
        result.push_str(&format!("{:>width$} |\n", "", width = width));
        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = width
        ));
        result.push_str(&format!(
            "{:>width$} | {}{}",
            "",
            " ".repeat(underline_start),
            "^".repeat(underline_len),
            width = width
        ));
        result
    }
}

/// An error message with its location and, optionally, the offending line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub position: Position,
    /// Source snippet for display
    pub snippet: Option<SourceSnippet>,
}

impl Diagnostic {
    /// Build a diagnostic for `error` raised while reading `source`.
    ///
    /// Uses the default tab width; see [`Diagnostic::from_error_with_tab_width`].
    pub fn from_error(error: &SyntaxError, source: &str) -> Self {
        Self::from_error_with_tab_width(error, source, crate::DEFAULT_TAB_WIDTH)
    }

    /// Build a diagnostic, expanding tabs in the snippet with `tab_width`.
    pub fn from_error_with_tab_width(error: &SyntaxError, source: &str, tab_width: u32) -> Self {
        let position = error.position();
        let snippet = source
            .split('\n')
            .nth(position.line.saturating_sub(1) as usize)
            .map(|line| SourceSnippet::point(line, position.line, position.column, tab_width));

        Self {
            message: error.to_string(),
            position,
            snippet,
        }
    }

    /// Renumber the diagnostic for a source translated one line at a time.
    ///
    /// `line_number` is the 1-based number of the line within the whole input.
    pub fn at_line(mut self, line_number: u32) -> Self {
        self.position.line = line_number;
        if let Some(snippet) = &mut self.snippet {
            snippet.line_number = line_number;
        }
        self
    }

    /// Format the `error: <message>` line alone.
    pub fn headline(&self) -> String {
        format!("error: {}", self.message)
    }

    /// Format the complete diagnostic.
    pub fn format(&self) -> String {
        let mut result = format!("{}\n --> {}", self.headline(), self.position);
        if let Some(snippet) = &self.snippet {
            result.push('\n');
            result.push_str(&snippet.format());
        }
        result
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

fn expand_tabs(line: &str, tab_width: u32) -> String {
    let mut expanded = String::with_capacity(line.len());
    let mut position = Position::START;
    for ch in line.chars() {
        let next = position.advance(ch, tab_width);
        if ch == '\t' {
            expanded.push_str(&" ".repeat((next.column - position.column) as usize));
        } else {
            expanded.push(ch);
        }
        position = next;
    }
    expanded
}
