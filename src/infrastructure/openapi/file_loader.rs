//! File-based OpenAPI spec loader
//!
//! This loader handles only file I/O. The actual parsing is done by the OpenApiParser.

use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

use super::parser::OpenApiParser;
use crate::generation::{GenerationError, OpenApiLoader, ParsedDocument};

/// Loads OpenAPI specifications from local files
pub struct FileOpenApiLoader;

impl FileOpenApiLoader {
    pub fn new() -> Self {
        Self
    }
}

impl OpenApiLoader for FileOpenApiLoader {
    fn load(&self, source: &Path) -> Result<ParsedDocument, GenerationError> {
        let content = fs::read_to_string(source)?;

        // YAML by extension, JSON otherwise
        let is_yaml = source
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let spec_value: JsonValue = if is_yaml {
            serde_yaml::from_str(&content)
                .map_err(|e| GenerationError::DocumentParse(format!("Failed to parse YAML: {e}")))?
        } else {
            serde_json::from_str(&content)
                .map_err(|e| GenerationError::DocumentParse(format!("Failed to parse JSON: {e}")))?
        };

        tracing::debug!("Loaded OpenAPI document from {}", source.display());
        OpenApiParser::new(spec_value).parse()
    }
}

impl Default for FileOpenApiLoader {
    fn default() -> Self {
        Self::new()
    }
}
