//! Error types for the acknowledgement pipeline
//!
//! Chunk extraction itself never fails; these cover the mail source,
//! the processed-ID log, the CSV sink and configuration.

use thiserror::Error;

/// Errors that can occur while reading mail or persisting records
#[derive(Error, Debug)]
pub enum AckError {
    /// Failed to parse the email structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Missing required header
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// Invalid header format
    #[error("Invalid header format for {header}: {details}")]
    InvalidHeader { header: String, details: String },

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the CSV log failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, AckError>;
