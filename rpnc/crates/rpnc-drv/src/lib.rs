//! rpnc-drv - Translation Driver
//!
//! Coordinates the lexer and the parser over an input made of independent
//! statements, one per line, and reports each result.
//!
//! # Example
//!
//! ```
//! use rpnc_drv::{Config, Session};
//!
//! let session = Session::new(Config::default());
//! let mut out = Vec::new();
//! let mut diagnostics = Vec::new();
//!
//! let summary = session
//!     .run_lines("a = 24b\n/go*1\n".as_bytes(), &mut out, &mut diagnostics)
//!     .unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "a 24 b * =\n");
//! assert_eq!(summary.lines, 2);
//! assert_eq!(summary.failures, 1);
//! ```

pub mod config;
pub mod error;

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use rpnc_lex::{Lexer, Token};
use rpnc_par::{render, Parser, PostfixRecord};
use rpnc_util::{Diagnostic, SyntaxError};

pub use config::{Config, Emit};
pub use error::{DriverError, Result};

/// Totals of a multi-line run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines read
    pub lines: usize,
    /// Lines that failed to translate
    pub failures: usize,
}

impl Summary {
    /// Returns true if every line translated.
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }
}

/// A translation session.
///
/// Each statement gets a fresh lexer and parser; the session only carries
/// the configuration.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
}

impl Session {
    /// Creates a session with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translates one statement into its postfix record.
    pub fn translate(&self, line: &str) -> std::result::Result<PostfixRecord, SyntaxError> {
        Parser::new(self.lexer(line)).parse()
    }

    /// Lexes one statement, whitespace included, up to end of input.
    pub fn tokens(&self, line: &str) -> std::result::Result<Vec<Token>, SyntaxError> {
        self.lexer(line).collect()
    }

    /// Translates `line` and writes the result.
    ///
    /// The rendered output goes to `out`; a failure is written to
    /// `diagnostics` as a diagnostic numbered `line_number`. Returns whether
    /// the line translated.
    pub fn run_line<W, E>(
        &self,
        line: &str,
        line_number: u32,
        out: &mut W,
        diagnostics: &mut E,
    ) -> Result<bool>
    where
        W: Write,
        E: Write,
    {
        let rendered = match self.config.emit {
            Emit::Postfix => self.translate(line).map(|record| render(&record)),
            Emit::Tokens => self.tokens(line).map(|tokens| dump_tokens(&tokens)),
        };

        match rendered {
            Ok(text) => {
                trace!(line = line_number, "translated");
                writeln!(out, "{}", text)?;
                Ok(true)
            },
            Err(err) => {
                debug!(line = line_number, error = %err, "translation failed");
                writeln!(diagnostics, "{}", self.diagnostic(&err, line, line_number))?;
                Ok(false)
            },
        }
    }

    /// Translates every line of `input`, continuing past failures.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, which the
    /// lexer reports as an illegal character on that line.
    pub fn run_lines<R, W, E>(
        &self,
        mut input: R,
        out: &mut W,
        diagnostics: &mut E,
    ) -> Result<Summary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = Summary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let chunk = String::from_utf8_lossy(&buf);
            for line in split_lines(&chunk) {
                self.run_counted(line, &mut summary, out, diagnostics)?;
            }
        }

        debug!(lines = summary.lines, failures = summary.failures, "input finished");
        Ok(summary)
    }

    /// Translates each statement of `statements`.
    ///
    /// A statement containing line terminators counts as one line per
    /// terminated piece.
    pub fn run_statements<S, W, E>(
        &self,
        statements: &[S],
        out: &mut W,
        diagnostics: &mut E,
    ) -> Result<Summary>
    where
        S: AsRef<str>,
        W: Write,
        E: Write,
    {
        let mut summary = Summary::default();

        for statement in statements {
            for line in split_lines(statement.as_ref()) {
                self.run_counted(line, &mut summary, out, diagnostics)?;
            }
        }

        Ok(summary)
    }

    fn run_counted<W, E>(
        &self,
        line: &str,
        summary: &mut Summary,
        out: &mut W,
        diagnostics: &mut E,
    ) -> Result<()>
    where
        W: Write,
        E: Write,
    {
        summary.lines += 1;
        let line_number = u32::try_from(summary.lines).unwrap_or(u32::MAX);
        if !self.run_line(line, line_number, out, diagnostics)? {
            summary.failures += 1;
        }
        Ok(())
    }

    fn lexer<'a>(&self, line: &'a str) -> Lexer<'a> {
        Lexer::with_tab_width(line, self.config.tab_width)
    }

    fn diagnostic(&self, err: &SyntaxError, line: &str, line_number: u32) -> String {
        let diagnostic = Diagnostic::from_error_with_tab_width(err, line, self.config.tab_width)
            .at_line(line_number);

        if self.config.show_positions {
            diagnostic.format()
        } else {
            diagnostic.headline()
        }
    }
}

/// Splits `text` into statements at `\n`, `\r\n` and `\r`.
///
/// A final terminator does not start another statement, but empty text is
/// one empty statement.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .flat_map(|line| line.split('\r'))
}

/// Formats tokens as `Kind 'lexeme'`, separated by spaces.
pub fn dump_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{} '{}'", token.kind, token.lexeme.escape_debug()))
        .collect::<Vec<_>>()
        .join(" ")
}
