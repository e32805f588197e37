//! Request body resolution: multipart form fields, JSON DTO, or nothing

use crate::generation::dto::DtoCache;
use crate::generation::type_mapper::{UNTYPED_PROPERTY_TYPE, map_optional_type};
use crate::generation::{BindingKind, BoundParameter, RequestBody, Schema};
use crate::infrastructure::openapi::{APPLICATION_JSON, MULTIPART_FORM_DATA};

/// Type bound to a single uploaded file
pub const FILE_TYPE: &str = "IFormFile";
/// Type bound to several uploaded files
pub const FILE_LIST_TYPE: &str = "List<IFormFile>";
/// Identifier of the JSON body parameter
pub const BODY_PARAMETER: &str = "body";

/// How an operation's request body reaches the action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBodyBinding {
    /// Multipart form, one parameter per declared property
    Form(Vec<BoundParameter>),
    /// JSON body bound to a synthesized DTO
    Json {
        parameter: BoundParameter,
        dto: String,
    },
    None,
}

impl RequestBodyBinding {
    pub fn body_type(&self) -> Option<&str> {
        match self {
            RequestBodyBinding::Json { dto, .. } => Some(dto),
            RequestBodyBinding::Form(_) | RequestBodyBinding::None => None,
        }
    }

    pub fn into_parameters(self) -> Vec<BoundParameter> {
        match self {
            RequestBodyBinding::Form(parameters) => parameters,
            RequestBodyBinding::Json { parameter, .. } => vec![parameter],
            RequestBodyBinding::None => Vec::new(),
        }
    }
}

/// DTO name used for an action's JSON request body
pub fn request_dto_name(action_name: &str) -> String {
    format!("{action_name}Request")
}

/// Multipart is checked first; when an operation declares both multipart and
/// JSON content, the JSON schema is never looked at.
pub fn resolve_request_body(
    body: Option<&RequestBody>,
    action_name: &str,
    dtos: &mut DtoCache,
) -> RequestBodyBinding {
    let Some(body) = body else {
        return RequestBodyBinding::None;
    };

    if let Some(schema) = body.schema_for(MULTIPART_FORM_DATA) {
        return RequestBodyBinding::Form(form_parameters(schema));
    }

    if let Some(schema) = body.schema_for(APPLICATION_JSON) {
        let dto = dtos.synthesize(schema, &request_dto_name(action_name)).name.clone();
        return RequestBodyBinding::Json {
            parameter: BoundParameter::new(BindingKind::Body, dto.clone(), BODY_PARAMETER),
            dto,
        };
    }

    RequestBodyBinding::None
}

fn form_parameters(schema: &Schema) -> Vec<BoundParameter> {
    schema
        .properties
        .iter()
        .map(|(name, property)| {
            let type_name = if property.is_binary_string() {
                FILE_TYPE
            } else if property.is_binary_array() {
                FILE_LIST_TYPE
            } else {
                map_optional_type(property.schema_type.as_ref(), UNTYPED_PROPERTY_TYPE)
            };
            BoundParameter::new(BindingKind::Form, type_name, name.as_str())
        })
        .collect()
}
