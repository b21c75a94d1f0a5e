//! Lexer module.
//!
//! The scanner is a finite-state machine; each state lives next to the
//! states it hands over to:
//! - `core` - Lexer struct, start state, token pushback
//! - `number` - integer and float states
//! - `word` - identifier, division-or-command and command states
//! - `punct` - whitespace and close-parenthesis states

mod core;
mod number;
mod punct;
mod word;

pub use self::core::Lexer;
