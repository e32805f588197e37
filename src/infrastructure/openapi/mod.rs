//! OpenAPI loading implementations

pub mod file_loader;
pub mod parser;
pub mod types;

pub use file_loader::FileOpenApiLoader;
pub use parser::OpenApiParser;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{GenerationError, OpenApiLoader};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_spec(suffix: &str, content: &str) -> NamedTempFile {
        let mut temp_file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("Failed to create temp file");
        temp_file
            .write_all(content.as_bytes())
            .expect("Failed to write temp file");
        temp_file.flush().expect("Failed to flush temp file");
        temp_file
    }

    #[test]
    fn test_file_openapi_loader_json() {
        let loader = FileOpenApiLoader::new();
        let temp_file = temp_spec(
            ".json",
            r#"{
                "openapi": "3.0.0",
                "paths": {
                    "/users": { "get": {} }
                }
            }"#,
        );

        let parsed = loader.load(temp_file.path()).unwrap();
        assert!(parsed.document.paths.contains_key("/users"));
    }

    #[test]
    fn test_file_openapi_loader_yaml() {
        let loader = FileOpenApiLoader::new();
        let temp_file = temp_spec(
            ".yaml",
            r#"openapi: 3.0.0
paths:
  /pets:
    get:
      parameters:
        - name: limit
          in: query
          schema:
            type: integer
  /owners:
    post: {}
"#,
        );

        let parsed = loader.load(temp_file.path()).unwrap();
        let paths: Vec<_> = parsed.document.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, ["/pets", "/owners"]);

        let limit = &parsed.document.paths["/pets"].operations["get"].parameters[0];
        assert_eq!(limit.location, ParameterLocation::Query);
    }

    #[test]
    fn test_file_openapi_loader_malformed_json() {
        let loader = FileOpenApiLoader::new();
        let temp_file = temp_spec(".json", "{ \"paths\": ");

        let result = loader.load(temp_file.path());
        assert!(matches!(result, Err(GenerationError::DocumentParse(_))));
    }

    #[test]
    fn test_file_openapi_loader_not_found() {
        let loader = FileOpenApiLoader::new();

        let result = loader.load(std::path::Path::new("/nonexistent/openapi.json"));
        assert!(matches!(result, Err(GenerationError::IoError(_))));
    }
}
