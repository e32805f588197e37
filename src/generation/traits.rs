//! Port interfaces for the generation domain

use std::path::Path;

use crate::generation::{GeneratedController, GeneratedDto, GenerationError, ParsedDocument};

/// Turns synthesized controllers and DTOs into source text
pub trait TemplateRenderer: Send + Sync {
    fn render_controller(&self, controller: &GeneratedController)
    -> Result<String, GenerationError>;

    fn render_dto(&self, dto: &GeneratedDto) -> Result<String, GenerationError>;

    /// Extension of generated files, without the dot
    fn file_extension(&self) -> &'static str;
}

/// Loads OpenAPI specifications
pub trait OpenApiLoader: Send + Sync {
    /// Load an OpenAPI spec from a source
    fn load(&self, source: &Path) -> Result<ParsedDocument, GenerationError>;
}
