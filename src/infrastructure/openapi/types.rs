//! Typed view of the parts of an OpenAPI document the generator reads
//!
//! Every field that may be absent in the source document is modeled as an
//! `Option` (or an empty collection) so that synthesis can skip a single
//! malformed item instead of failing the whole run.

use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// Media type key for multipart form bodies
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
/// Media type key for JSON bodies and responses
pub const APPLICATION_JSON: &str = "application/json";
/// Format marking a string schema as raw file content
pub const BINARY_FORMAT: &str = "binary";
/// Format marking a string schema as an email address
pub const EMAIL_FORMAT: &str = "email";

/// Ordered mapping of path template to path item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub paths: IndexMap<String, PathItem>,
}

/// Ordered mapping of HTTP method (as written in the document) to operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    pub operations: IndexMap<String, Operation>,
}

/// A single HTTP-method handler under a path template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    /// Keyed by status code, in document order
    pub responses: IndexMap<String, Response>,
}

/// Operation parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Option<String>,
    pub location: ParameterLocation,
    pub schema: Option<Schema>,
}

/// Where a parameter is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    /// Cookie, unknown, or missing `in` value
    Other(Option<String>),
}

impl ParameterLocation {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("query") => ParameterLocation::Query,
            Some("path") => ParameterLocation::Path,
            Some("header") => ParameterLocation::Header,
            other => ParameterLocation::Other(other.map(str::to_string)),
        }
    }
}

/// Request body content keyed by media type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    /// Schema declared for the given media type, if any
    pub fn schema_for(&self, media_type: &str) -> Option<&Schema> {
        self.content.get(media_type)?.schema.as_ref()
    }
}

/// Response content keyed by media type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    pub fn schema_for(&self, media_type: &str) -> Option<&Schema> {
        self.content.get(media_type)?.schema.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaType {
    pub schema: Option<Schema>,
}

/// Closed set of schema type tags
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Integer,
    Number,
    Boolean,
    String,
    Object,
    Array,
    Unknown(String),
}

impl SchemaType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "integer" => SchemaType::Integer,
            "number" => SchemaType::Number,
            "boolean" => SchemaType::Boolean,
            "string" => SchemaType::String,
            "object" => SchemaType::Object,
            "array" => SchemaType::Array,
            other => SchemaType::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::String => "string",
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Schema representation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub schema_type: Option<SchemaType>,
    pub format: Option<String>,
    pub max_length: Option<u64>,
    /// Object properties in declaration order
    pub properties: IndexMap<String, Schema>,
    pub items: Option<Box<Schema>>,
    pub required: IndexSet<String>,
}

impl Schema {
    pub fn with_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    pub fn has_format(&self, format: &str) -> bool {
        self.format.as_deref() == Some(format)
    }

    /// `type: string, format: binary`
    pub fn is_binary_string(&self) -> bool {
        self.schema_type == Some(SchemaType::String) && self.has_format(BINARY_FORMAT)
    }

    /// `type: array` whose items are binary strings
    pub fn is_binary_array(&self) -> bool {
        self.schema_type == Some(SchemaType::Array)
            && self
                .items
                .as_deref()
                .is_some_and(Schema::is_binary_string)
    }
}
