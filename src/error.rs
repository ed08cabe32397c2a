//! Error handling for the resume ATS matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Similarity input the scorer cannot vectorize; handled by the keyword-only fallback.
    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeAtsError>;

impl From<askama::Error> for ResumeAtsError {
    fn from(err: askama::Error) -> Self {
        ResumeAtsError::OutputFormatting(err.to_string())
    }
}
