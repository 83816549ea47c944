//! Error handling for the resume forge application
//!
//! The heuristic core never fails; these errors belong to the callers around it
//! (file ingestion, configuration, rendering and input gating).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeForgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeForgeError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeForgeError {
    fn from(err: anyhow::Error) -> Self {
        ResumeForgeError::InvalidInput(err.to_string())
    }
}

impl From<zip::result::ZipError> for ResumeForgeError {
    fn from(err: zip::result::ZipError) -> Self {
        ResumeForgeError::DocxExtraction(err.to_string())
    }
}
