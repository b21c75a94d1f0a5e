//! Error handling module for the rpnc driver.
//!
//! Translation errors of single statements are not driver errors: they are
//! reported as diagnostics and the driver moves on to the next line. The
//! types here cover what stops the driver itself.

use thiserror::Error;

/// Main error type for the rpnc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Error when the configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading input or writing output fails.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a configuration file is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Error when the logging system cannot be initialized.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
