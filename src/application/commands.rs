//! Request and response types for the application layer

use std::path::PathBuf;

use crate::application::ValidationError;
use crate::generation::{CollisionPolicy, Diagnostic};

/// Default input document
pub const DEFAULT_INPUT_PATH: &str = "openapi.json";
/// Default controller output directory
pub const DEFAULT_CONTROLLER_DIR: &str = "GeneratedControllers";
/// Default DTO output directory
pub const DEFAULT_DTO_DIR: &str = "GeneratedDtos";

/// Request to generate controllers and DTOs
#[derive(Debug, Clone)]
pub struct GenerateServerRequest {
    pub input_path: PathBuf,
    pub controller_dir: PathBuf,
    pub dto_dir: PathBuf,
    pub collision_policy: CollisionPolicy,
}

impl Default for GenerateServerRequest {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            controller_dir: PathBuf::from(DEFAULT_CONTROLLER_DIR),
            dto_dir: PathBuf::from(DEFAULT_DTO_DIR),
            collision_policy: CollisionPolicy::default(),
        }
    }
}

impl GenerateServerRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.input_path.is_file() {
            return Err(ValidationError::InputNotFound(self.input_path.clone()));
        }
        if self.controller_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyOutputDir("controller"));
        }
        if self.dto_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyOutputDir("dto"));
        }
        Ok(())
    }
}

/// Response from server generation
#[derive(Debug, Clone)]
pub struct GenerateServerResponse {
    pub controllers_written: usize,
    pub dtos_written: usize,
    pub controller_dir: PathBuf,
    pub dto_dir: PathBuf,
    /// Items skipped while reading or synthesizing, in the order found
    pub diagnostics: Vec<Diagnostic>,
}
