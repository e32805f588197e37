//! OpenAPI document parser
//!
//! Reads only the fields the generator uses. Structural problems in a single
//! item (a parameter that is not an object, a property schema that is a bare
//! boolean, ...) are recorded as diagnostics and the item is dropped; only a
//! document whose root or `paths` is unusable is rejected outright.

use indexmap::IndexMap;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::generation::{
    Diagnostic, Document, GenerationError, MediaType, Operation, Parameter, ParameterLocation,
    ParsedDocument, PathItem, RequestBody, Response, Schema, SchemaType,
};

/// Keys under a path item carrying this prefix are extensions, not operations
const VENDOR_EXTENSION_PREFIX: &str = "x-";

/// OpenAPI specification parser
pub struct OpenApiParser {
    /// The raw JSON value of the OpenAPI spec
    pub json: JsonValue,
}

impl OpenApiParser {
    /// Create a new parser from JSON content
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Parse the specification into the document model
    pub fn parse(&self) -> Result<ParsedDocument, GenerationError> {
        let root = self.json.as_object().ok_or_else(|| {
            GenerationError::DocumentParse("document root must be an object".to_string())
        })?;

        let Some(paths) = root.get("paths") else {
            tracing::warn!("Document has no 'paths' object, nothing to generate");
            return Ok(ParsedDocument::default());
        };
        let paths = paths.as_object().ok_or_else(|| {
            GenerationError::DocumentParse("'paths' must be an object".to_string())
        })?;

        let mut reader = DocumentReader::default();
        let document = reader.read_paths(paths);
        tracing::debug!("OpenAPI parser found {} paths", document.paths.len());

        Ok(ParsedDocument {
            document,
            diagnostics: reader.diagnostics,
        })
    }
}

#[derive(Default)]
struct DocumentReader {
    diagnostics: Vec<Diagnostic>,
}

impl DocumentReader {
    fn report(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(location, message));
    }

    fn read_paths(&mut self, paths: &JsonMap<String, JsonValue>) -> Document {
        let mut document = Document::default();

        for (path, item) in paths {
            let Some(item) = item.as_object() else {
                self.report(path, "path item is not an object, skipped");
                continue;
            };

            let mut path_item = PathItem::default();
            for (method, operation) in item {
                if method.starts_with(VENDOR_EXTENSION_PREFIX) {
                    tracing::debug!("Ignoring extension '{}' under {}", method, path);
                    continue;
                }
                // Path-level `parameters`, `summary`, `servers` etc. are not objects
                let Some(operation) = operation.as_object() else {
                    tracing::debug!("Ignoring non-operation key '{}' under {}", method, path);
                    continue;
                };
                let location = format!("{} {}", method.to_uppercase(), path);
                let operation = self.read_operation(operation, &location);
                path_item.operations.insert(method.clone(), operation);
            }
            document.paths.insert(path.clone(), path_item);
        }

        document
    }

    fn read_operation(&mut self, operation: &JsonMap<String, JsonValue>, location: &str) -> Operation {
        let parameters = operation
            .get("parameters")
            .and_then(JsonValue::as_array)
            .map(|parameters| {
                parameters
                    .iter()
                    .enumerate()
                    .filter_map(|(index, parameter)| {
                        self.read_parameter(parameter, &format!("{location} parameter #{index}"))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let request_body = operation
            .get("requestBody")
            .and_then(JsonValue::as_object)
            .map(|body| RequestBody {
                content: self.read_content(body, &format!("{location} requestBody")),
            });

        let responses = operation
            .get("responses")
            .and_then(JsonValue::as_object)
            .map(|responses| {
                responses
                    .iter()
                    .filter_map(|(status, response)| {
                        let response = response.as_object()?;
                        let content =
                            self.read_content(response, &format!("{location} response {status}"));
                        Some((status.clone(), Response { content }))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Operation {
            parameters,
            request_body,
            responses,
        }
    }

    fn read_parameter(&mut self, parameter: &JsonValue, location: &str) -> Option<Parameter> {
        let Some(parameter) = parameter.as_object() else {
            self.report(location, "parameter is not an object, skipped");
            return None;
        };

        let name = parameter
            .get("name")
            .and_then(JsonValue::as_str)
            .map(str::to_string);
        let schema_location = match &name {
            Some(name) => format!("{location} '{name}'"),
            None => location.to_string(),
        };

        Some(Parameter {
            location: ParameterLocation::from_tag(parameter.get("in").and_then(JsonValue::as_str)),
            schema: parameter
                .get("schema")
                .and_then(|schema| self.read_schema(schema, &schema_location)),
            name,
        })
    }

    fn read_content(
        &mut self,
        owner: &JsonMap<String, JsonValue>,
        location: &str,
    ) -> IndexMap<String, MediaType> {
        let Some(content) = owner.get("content").and_then(JsonValue::as_object) else {
            return IndexMap::new();
        };

        content
            .iter()
            .filter_map(|(media_type, media)| {
                let media = media.as_object()?;
                let schema = media
                    .get("schema")
                    .and_then(|schema| self.read_schema(schema, &format!("{location} {media_type}")));
                Some((media_type.clone(), MediaType { schema }))
            })
            .collect()
    }

    /// `None` (with a diagnostic) when the value is not a schema object
    fn read_schema(&mut self, value: &JsonValue, location: &str) -> Option<Schema> {
        let Some(schema) = value.as_object() else {
            self.report(location, "schema is not an object, skipped");
            return None;
        };

        let mut properties = IndexMap::new();
        if let Some(declared) = schema.get("properties").and_then(JsonValue::as_object) {
            for (name, property) in declared {
                let property_location = format!("{location} property '{name}'");
                if let Some(property) = self.read_schema(property, &property_location) {
                    properties.insert(name.clone(), property);
                }
            }
        }

        let items = schema
            .get("items")
            .and_then(|items| self.read_schema(items, &format!("{location} items")))
            .map(Box::new);

        let required = schema
            .get("required")
            .and_then(JsonValue::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(JsonValue::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Schema {
            schema_type: schema_type(schema.get("type")),
            format: schema
                .get("format")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            max_length: schema.get("maxLength").and_then(JsonValue::as_u64),
            properties,
            items,
            required,
        })
    }
}

/// Accepts both `"type": "string"` and the 3.1 form `"type": ["string", "null"]`
fn schema_type(value: Option<&JsonValue>) -> Option<SchemaType> {
    match value? {
        JsonValue::String(tag) => Some(SchemaType::from_tag(tag)),
        JsonValue::Array(tags) => tags
            .iter()
            .filter_map(JsonValue::as_str)
            .find(|tag| *tag != "null")
            .map(SchemaType::from_tag),
        _ => None,
    }
}
