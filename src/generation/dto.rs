//! DTO synthesis and the run-scoped deduplication cache

use indexmap::IndexMap;

use crate::generation::type_mapper::{UNTYPED_PROPERTY_TYPE, map_optional_type};
use crate::generation::utils::{capitalize, sanitize_identifier};
use crate::generation::{DtoField, FieldConstraint, GeneratedDto, Schema};
use crate::infrastructure::openapi::EMAIL_FORMAT;

/// DTOs synthesized during one generation run, keyed by name.
///
/// First write wins: once a name is registered, later requests for it return
/// the cached DTO without looking at their schema. Iteration follows
/// registration order, which is also the emission order.
#[derive(Debug, Default)]
pub struct DtoCache {
    dtos: IndexMap<String, GeneratedDto>,
}

impl DtoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dtos.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.dtos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dtos.is_empty()
    }

    pub fn into_dtos(self) -> Vec<GeneratedDto> {
        self.dtos.into_values().collect()
    }

    /// Returns the DTO registered under `name`, walking `schema` only when
    /// the name has not been seen in this run.
    pub fn synthesize(&mut self, schema: &Schema, name: &str) -> &GeneratedDto {
        if !self.dtos.contains_key(name) {
            tracing::debug!("Synthesizing DTO {} with {} properties", name, schema.properties.len());
            let dto = build_dto(schema, name);
            self.dtos.insert(name.to_string(), dto);
        } else {
            tracing::debug!("DTO {} already synthesized in this run, reusing it", name);
        }
        &self.dtos[name]
    }
}

fn build_dto(schema: &Schema, name: &str) -> GeneratedDto {
    let fields = schema
        .properties
        .iter()
        .map(|(property, property_schema)| {
            let identifier = sanitize_identifier(property);
            DtoField {
                name: capitalize(&identifier),
                type_name: map_optional_type(
                    property_schema.schema_type.as_ref(),
                    UNTYPED_PROPERTY_TYPE,
                )
                .to_string(),
                constraints: field_constraints(schema, property, property_schema),
                json_name: (identifier != *property).then(|| property.clone()),
            }
        })
        .collect();

    GeneratedDto {
        name: name.to_string(),
        fields,
    }
}

fn field_constraints(parent: &Schema, property: &str, schema: &Schema) -> Vec<FieldConstraint> {
    let mut constraints = Vec::new();
    if parent.required.contains(property) {
        constraints.push(FieldConstraint::Required);
    }
    if let Some(length) = schema.max_length {
        constraints.push(FieldConstraint::MaxLength(length));
    }
    if schema.has_format(EMAIL_FORMAT) {
        constraints.push(FieldConstraint::EmailAddress);
    }
    constraints
}
