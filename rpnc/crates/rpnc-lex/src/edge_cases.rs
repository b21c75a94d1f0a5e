//! Edge case tests for rpnc-lex
