//! Character classes used by the scanner states.
//!
//! Each lexer state decides what to do with the next character by asking
//! which class it falls into. The classes overlap on purpose: a digit starts
//! a number but also ends a command.

/// Horizontal tab
pub const TAB: char = '\t';
/// Line feed
pub const LF: char = '\n';
/// Vertical tab
pub const VT: char = '\u{000b}';
/// Form feed
pub const FF: char = '\u{000c}';
/// Carriage return
pub const CR: char = '\r';
/// Space
pub const SPACE: char = ' ';

/// Operator character inserted between two adjacent operands.
pub const IMPLICIT_MUL: char = '*';

/// Returns true for `0`-`9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true if `c` can start an identifier: an ASCII letter or `_`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true for the blanks that form whitespace tokens.
///
/// Line terminators are not blanks; they form their own token.
#[inline]
pub fn is_blank(c: char) -> bool {
    matches!(c, TAB | VT | FF | SPACE)
}

/// Returns true for `\n` and `\r`.
#[inline]
pub fn is_line_end(c: char) -> bool {
    c == LF || c == CR
}

/// Returns true for operator characters that always form a token alone.
#[inline]
pub fn is_single_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '^' | '!' | '%')
}

/// Returns true for every operator character, including `/`.
#[inline]
pub fn is_operator(c: char) -> bool {
    is_single_operator(c) || c == '/'
}

/// Returns true if `c` ends a number and must be read again as a new token.
#[inline]
pub fn ends_number(c: char) -> bool {
    is_line_end(c) || is_operator(c) || is_blank(c) || matches!(c, ',' | '=' | ')')
}

/// Returns true if `c` after an operand implies a multiplication.
///
/// `2x`, `2(x)` and `(x)(y)` all read as products.
#[inline]
pub fn starts_implicit_operand(c: char) -> bool {
    is_ident_start(c) || c == '('
}

/// Returns true if `c` ends an identifier or a command.
#[inline]
pub fn ends_word(c: char) -> bool {
    ends_number(c) || matches!(c, '.' | '(')
}

/// Returns true if `c` after a `/` keeps it a division operator.
#[inline]
pub fn ends_slash(c: char) -> bool {
    ends_word(c) || is_digit(c)
}

/// Returns true if `c` ends a run of blanks.
#[inline]
pub fn ends_blanks(c: char) -> bool {
    is_line_end(c)
        || is_digit(c)
        || is_ident_start(c)
        || is_operator(c)
        || matches!(c, '.' | ',' | '=' | '(' | ')')
}
