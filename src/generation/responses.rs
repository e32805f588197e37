//! Success response resolution

use indexmap::IndexMap;

use crate::generation::dto::DtoCache;
use crate::generation::{Response, ReturnType};
use crate::infrastructure::openapi::APPLICATION_JSON;

/// The only status code that produces a typed return value
pub const SUCCESS_STATUS: &str = "200";

pub fn response_dto_name(action_name: &str) -> String {
    format!("{action_name}Response")
}

/// A `200` response with a JSON schema becomes `ActionResult<<Action>Response>`;
/// anything else is a plain success.
pub fn resolve_response(
    responses: &IndexMap<String, Response>,
    action_name: &str,
    dtos: &mut DtoCache,
) -> ReturnType {
    let schema = responses
        .get(SUCCESS_STATUS)
        .and_then(|response| response.schema_for(APPLICATION_JSON));

    match schema {
        Some(schema) => {
            let dto = dtos.synthesize(schema, &response_dto_name(action_name));
            ReturnType::Wrapped(dto.name.clone())
        }
        None => ReturnType::Success,
    }
}
