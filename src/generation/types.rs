//! Core types for the generation domain

use std::fmt;
use std::path::PathBuf;

use crate::generation::utils::sanitize_identifier;

/// Where an action parameter's value is bound from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Query,
    Route,
    Header,
    Form,
    Body,
    /// Declared on the action without a binding attribute
    Unbound,
}

impl BindingKind {
    /// ASP.NET Core binding attribute name, `None` for unbound parameters
    pub fn attribute_name(&self) -> Option<&'static str> {
        match self {
            BindingKind::Query => Some("FromQuery"),
            BindingKind::Route => Some("FromRoute"),
            BindingKind::Header => Some("FromHeader"),
            BindingKind::Form => Some("FromForm"),
            BindingKind::Body => Some("FromBody"),
            BindingKind::Unbound => None,
        }
    }
}

/// A method parameter of a generated action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundParameter {
    pub binding: BindingKind,
    pub type_name: String,
    /// C# identifier used in the signature
    pub name: String,
    /// Name as declared in the document, kept when it is not a valid identifier
    pub wire_name: Option<String>,
}

impl BoundParameter {
    /// `name` is sanitized into an identifier; the declared name is kept for binding.
    pub fn new(binding: BindingKind, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        let declared = name.into();
        let identifier = sanitize_identifier(&declared);
        Self {
            binding,
            type_name: type_name.into(),
            wire_name: (identifier != declared).then_some(declared),
            name: identifier,
        }
    }

    /// Parameter declaration as it appears in the action signature
    pub fn declaration(&self) -> String {
        match (self.binding.attribute_name(), &self.wire_name) {
            (Some(attribute), Some(wire)) => {
                format!("[{attribute}(Name = \"{wire}\")] {} {}", self.type_name, self.name)
            }
            (Some(attribute), None) => format!("[{attribute}] {} {}", self.type_name, self.name),
            (None, _) => format!("{} {}", self.type_name, self.name),
        }
    }
}

/// Validation marker attached to a DTO field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldConstraint {
    Required,
    MaxLength(u64),
    EmailAddress,
}

impl FieldConstraint {
    pub fn attribute(&self) -> String {
        match self {
            FieldConstraint::Required => "[Required]".to_string(),
            FieldConstraint::MaxLength(length) => format!("[StringLength({length})]"),
            FieldConstraint::EmailAddress => "[EmailAddress]".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtoField {
    pub name: String,
    pub type_name: String,
    pub constraints: Vec<FieldConstraint>,
    /// Property name as declared, kept when the C# name cannot round-trip it
    pub json_name: Option<String>,
}

impl DtoField {
    pub fn has_constraint(&self, constraint: FieldConstraint) -> bool {
        self.constraints.contains(&constraint)
    }

    pub fn is_required(&self) -> bool {
        self.has_constraint(FieldConstraint::Required)
    }
}

/// A data-transfer type synthesized from a body or response schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDto {
    pub name: String,
    pub fields: Vec<DtoField>,
}

impl GeneratedDto {
    pub fn field(&self, name: &str) -> Option<&DtoField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// What an action returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    /// Plain success with no payload
    Success,
    /// Success wrapping the named DTO
    Wrapped(String),
}

impl ReturnType {
    pub fn type_name(&self) -> String {
        match self {
            ReturnType::Success => "IActionResult".to_string(),
            ReturnType::Wrapped(dto) => format!("ActionResult<{dto}>"),
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            ReturnType::Success => None,
            ReturnType::Wrapped(dto) => Some(dto),
        }
    }
}

/// One generated handler method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub name: String,
    /// HTTP method as written in the document
    pub method: String,
    /// Path template the action was generated from
    pub path: String,
    pub parameters: Vec<BoundParameter>,
    pub body_type: Option<String>,
    pub return_type: ReturnType,
}

impl Action {
    /// Route template relative to the controller route
    pub fn route(&self) -> &str {
        self.path.trim_start_matches('/')
    }

    pub fn http_attribute(&self) -> String {
        match self.method.to_uppercase().as_str() {
            "GET" => "[HttpGet]".to_string(),
            "POST" => "[HttpPost]".to_string(),
            "PUT" => "[HttpPut]".to_string(),
            "DELETE" => "[HttpDelete]".to_string(),
            other => format!("[Http{other}]"),
        }
    }
}

/// A controller grouping all actions of one leading path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedController {
    pub name: String,
    /// Path templates whose actions were folded into this controller
    pub paths: Vec<String>,
    pub actions: Vec<Action>,
}

impl GeneratedController {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paths: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.name == name)
    }
}

/// A recoverable problem found while reading or synthesizing one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Controller,
    Dto,
}

/// Generated artifact
#[derive(Debug, Clone)]
pub struct Artifact {
    pub kind: ArtifactKind,
    /// Path relative to the output directory for its kind
    pub path: PathBuf,
    pub content: String,
}

/// A loaded document together with the items the parser had to drop
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of synthesis, before rendering
#[derive(Debug, Clone, Default)]
pub struct SynthesisResult {
    pub controllers: Vec<GeneratedController>,
    pub dtos: Vec<GeneratedDto>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of generation
#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    pub artifacts: Vec<Artifact>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationResult {
    pub fn artifacts_of(&self, kind: ArtifactKind) -> impl Iterator<Item = &Artifact> {
        self.artifacts
            .iter()
            .filter(move |artifact| artifact.kind == kind)
    }
}

// Re-export OpenAPI types from infrastructure module
pub use crate::infrastructure::openapi::{
    Document, MediaType, Operation, Parameter, ParameterLocation, PathItem, RequestBody, Response,
    Schema, SchemaType,
};
