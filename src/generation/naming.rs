//! Controller and action identifiers derived from path templates

use once_cell::sync::Lazy;
use regex::Regex;

use crate::generation::utils::{capitalize, sanitize_identifier};

/// Suffix appended to every controller name
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// Controller used for paths without a leading word segment
pub const DEFAULT_CONTROLLER: &str = "DefaultController";

static LEADING_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/?(\w+)").unwrap());

/// `/users/{id}` → `UsersController`, `/` → `DefaultController`.
///
/// Only the first segment participates, so distinct paths sharing it
/// resolve to the same controller; see [`crate::generation::CollisionPolicy`].
pub fn controller_name(path: &str) -> String {
    LEADING_SEGMENT
        .captures(path)
        .and_then(|captures| captures.get(1))
        .map(|segment| format!("{}{CONTROLLER_SUFFIX}", capitalize(segment.as_str())))
        .unwrap_or_else(|| DEFAULT_CONTROLLER.to_string())
}

/// `get` + `/orders/{id}` → `GetOrders_id`
pub fn action_name(method: &str, path: &str) -> String {
    let route = path.trim_matches('/').replace('/', "_");
    format!(
        "{}{}",
        capitalize(&method.to_lowercase()),
        capitalize(&sanitize_identifier(&route))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_name() {
        assert_eq!(controller_name("/users"), "UsersController");
        assert_eq!(controller_name("users"), "UsersController");
        assert_eq!(controller_name("/orders/{id}"), "OrdersController");
        assert_eq!(controller_name("/user_accounts/me"), "User_accountsController");
    }

    #[test]
    fn test_controller_name_default() {
        assert_eq!(controller_name("/"), DEFAULT_CONTROLLER);
        assert_eq!(controller_name(""), DEFAULT_CONTROLLER);
        assert_eq!(controller_name("/{id}"), DEFAULT_CONTROLLER);
    }

    #[test]
    fn test_shared_first_segment_collides() {
        assert_eq!(controller_name("/orders"), controller_name("/orders/{id}"));
    }

    #[test]
    fn test_action_name() {
        assert_eq!(action_name("get", "/users"), "GetUsers");
        assert_eq!(action_name("POST", "/users/"), "PostUsers");
        assert_eq!(action_name("get", "/orders/{id}"), "GetOrders_id");
        assert_eq!(action_name("delete", "/orders/{id}/items"), "DeleteOrders_id_items");
        assert_eq!(action_name("get", "/"), "Get");
    }

    #[test]
    fn test_action_name_replaces_invalid_characters() {
        assert_eq!(action_name("get", "/user-profiles"), "GetUser_profiles");
        assert_eq!(action_name("get", "/v1.2/files"), "GetV1_2_files");
    }
}
