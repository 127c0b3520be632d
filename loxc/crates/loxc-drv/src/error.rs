//! Error handling for the loxc driver.
//!
//! Lexical errors are not driver errors: they are reported as diagnostics
//! and only change the exit status. The variants here cover everything that
//! stops the driver itself.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a command-line usage error.
pub const EX_USAGE: u8 = 64;

/// Exit status for input that failed to scan.
pub const EX_DATAERR: u8 = 65;

/// Exit status for a script that could not be read.
pub const EX_IOERR: u8 = 74;

/// Main error type for the loxc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The command line was not understood.
    #[error("Usage: {0}")]
    Usage(String),

    /// The script file could not be read.
    #[error("Could not read {}: {source}", .path.display())]
    ReadScript {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Writing output or reading the prompt failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Token serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriverError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Usage(_) => EX_USAGE,
            DriverError::ReadScript { .. } => EX_IOERR,
            DriverError::Config(_) | DriverError::Io(_) | DriverError::Json(_) => 1,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
