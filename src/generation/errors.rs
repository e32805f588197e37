//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Document parse error: {0}")]
    DocumentParse(String),

    #[error("{location}: missing required field '{field}'")]
    FieldMissing {
        location: String,
        field: &'static str,
    },

    #[error(
        "Controller name collision: '{first_path}' and '{second_path}' both map to {controller}"
    )]
    ControllerCollision {
        controller: String,
        first_path: String,
        second_path: String,
    },

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
