//! Operation parameter binding

use crate::generation::type_mapper::map_schema_type;
use crate::generation::{BindingKind, BoundParameter, GenerationError, Parameter, ParameterLocation};

impl From<&ParameterLocation> for BindingKind {
    fn from(location: &ParameterLocation) -> Self {
        match location {
            ParameterLocation::Query => BindingKind::Query,
            ParameterLocation::Path => BindingKind::Route,
            ParameterLocation::Header => BindingKind::Header,
            ParameterLocation::Other(_) => BindingKind::Unbound,
        }
    }
}

/// Binds one declared parameter. `location` only feeds error messages.
///
/// Fails with [`GenerationError::FieldMissing`] when the name, the schema or
/// the schema's type is absent; callers skip the parameter and continue.
pub fn bind_parameter(
    parameter: &Parameter,
    location: &str,
) -> Result<BoundParameter, GenerationError> {
    let missing = |field| GenerationError::FieldMissing {
        location: location.to_string(),
        field,
    };

    let name = parameter.name.as_deref().ok_or_else(|| missing("name"))?;
    let schema_type = parameter
        .schema
        .as_ref()
        .ok_or_else(|| missing("schema"))?
        .schema_type
        .as_ref()
        .ok_or_else(|| missing("schema.type"))?;

    Ok(BoundParameter::new(
        BindingKind::from(&parameter.location),
        map_schema_type(schema_type),
        name,
    ))
}
