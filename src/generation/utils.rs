//! String transformation utilities for code generation
//!
//! These utilities belong in the generation domain as they are used
//! for transforming identifiers during code generation.

/// Upper-cases the first character and leaves the rest untouched.
///
/// # Examples
/// ```
/// use openapi_scaffold::generation::utils::capitalize;
///
/// assert_eq!(capitalize("users"), "Users");
/// assert_eq!(capitalize("firstName"), "FirstName");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Makes a path-derived string usable inside a C# identifier.
///
/// Template braces are dropped and every other character that is not
/// alphanumeric or `_` becomes `_`.
///
/// # Examples
/// ```
/// use openapi_scaffold::generation::utils::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("orders_{id}"), "orders_id");
/// assert_eq!(sanitize_identifier("user-profiles"), "user_profiles");
/// ```
pub fn sanitize_identifier(s: &str) -> String {
    s.chars()
        .filter(|ch| !matches!(ch, '{' | '}'))
        .map(|ch| if ch.is_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("get"), "Get");
        assert_eq!(capitalize("Users"), "Users");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize("a"), "A");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("users"), "users");
        assert_eq!(sanitize_identifier("orders_{id}_items"), "orders_id_items");
        assert_eq!(sanitize_identifier("v1.2_files"), "v1_2_files");
        assert_eq!(sanitize_identifier(""), "");
    }
}
