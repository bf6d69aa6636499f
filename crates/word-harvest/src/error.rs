use thiserror::Error;

/// Errors that can occur while harvesting words from a PDF
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("PDF extraction failed: {0}")]
    ExtractionError(String),

    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("Password-protected PDF")]
    PasswordProtected,

    #[error("Invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Serialization failed: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
