//! End-to-End Tests for the rpnc binary
//!
//! These tests run the compiled binary the way a user would: statements on
//! the command line, on standard input or in a file, with and without a
//! configuration file.

mod cli_tests;
