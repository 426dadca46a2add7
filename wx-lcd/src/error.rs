//! Error types for the LCD library.

use thiserror::Error;

/// Main error type for LCD data operations
#[derive(Error, Debug)]
pub enum LcdError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is missing from the CSV header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Date parsing failed
    #[error("Failed to parse date: {0}")]
    DateParse(String),
}

/// Type alias for Results using LcdError
pub type Result<T> = std::result::Result<T, LcdError>;
