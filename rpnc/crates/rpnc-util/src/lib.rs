//! rpnc-util - Core Utilities and Foundation Types
//!
//! This crate holds the types shared by every phase of the translator:
//!
//! - [`span`] - line/column tracking with tab expansion
//! - [`error`] - the single error surface of the core ([`SyntaxError`])
//! - [`diagnostic`] - human-readable rendering of errors against the source line
//!
//! # Example
//!
//! ```
//! use rpnc_util::{Expected, Found, Position, SyntaxError};
//!
//! let err = SyntaxError::unexpected(Expected::Expression, Found::EndOfLine, Position::new(1, 3));
//! assert_eq!(err.to_string(), "expected expression, got end of line");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, SourceSnippet};
pub use error::{ErrorKind, Expected, Found, Result, SyntaxError};
pub use span::{Position, DEFAULT_TAB_WIDTH};
