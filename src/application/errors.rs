//! Application layer error types

use std::path::PathBuf;
use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Generation error: {0}")]
    GenerationError(#[from] crate::generation::GenerationError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl ApplicationError {
    /// True when the run failed only because the input document is absent
    pub fn is_input_not_found(&self) -> bool {
        matches!(
            self,
            ApplicationError::ValidationError(ValidationError::InputNotFound(_))
        )
    }
}

/// Validation errors for requests
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Output directory path cannot be empty: {0}")]
    EmptyOutputDir(&'static str),
}
