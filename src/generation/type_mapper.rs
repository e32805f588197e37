//! Schema primitive type to C# type mapping

use crate::generation::SchemaType;

/// Type used for any tag outside the primitive table
pub const FALLBACK_TYPE: &str = "object";

/// Type used when a form field or DTO property declares no type at all
pub const UNTYPED_PROPERTY_TYPE: &str = "string";

/// Maps a schema type tag to its C# primitive. Total: unmapped tags yield
/// [`FALLBACK_TYPE`].
pub fn map_schema_type(schema_type: &SchemaType) -> &'static str {
    match schema_type {
        SchemaType::Integer => "int",
        SchemaType::Number => "double",
        SchemaType::Boolean => "bool",
        SchemaType::String => "string",
        SchemaType::Object | SchemaType::Array | SchemaType::Unknown(_) => FALLBACK_TYPE,
    }
}

/// Like [`map_schema_type`], with `default` for an absent type tag
pub fn map_optional_type(schema_type: Option<&SchemaType>, default: &'static str) -> &'static str {
    schema_type.map_or(default, map_schema_type)
}
