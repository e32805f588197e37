//! Controller synthesis: paths and operations into controllers and actions

use indexmap::IndexMap;

use crate::generation::naming::{action_name, controller_name};
use crate::generation::parameters::bind_parameter;
use crate::generation::request_body::resolve_request_body;
use crate::generation::responses::resolve_response;
use crate::generation::{
    Action, CollisionPolicy, Diagnostic, Document, GeneratedController, GenerationContext,
    GenerationError, Operation,
};

/// Walks paths and methods in document order and groups the resulting actions
/// by controller name.
///
/// Paths that derive an already-seen controller name are handled according to
/// the context's [`CollisionPolicy`]. Each controller appears exactly once in
/// the output, in order of first appearance.
pub fn synthesize_controllers(
    document: &Document,
    context: &mut GenerationContext,
) -> Result<Vec<GeneratedController>, GenerationError> {
    let mut controllers: IndexMap<String, GeneratedController> = IndexMap::new();

    for (path, path_item) in &document.paths {
        let name = controller_name(path);

        if let Some(existing) = controllers.get(&name) {
            let earlier = existing.paths.join(", ");
            match context.collision_policy {
                CollisionPolicy::Reject => {
                    return Err(GenerationError::ControllerCollision {
                        controller: name,
                        first_path: existing.paths.first().cloned().unwrap_or_default(),
                        second_path: path.clone(),
                    });
                }
                CollisionPolicy::Merge => {
                    tracing::info!("Merging actions of '{}' into {} (from {})", path, name, earlier);
                }
            }
        }

        let controller = controllers
            .entry(name.clone())
            .or_insert_with(|| GeneratedController::new(name));
        controller.paths.push(path.clone());

        for (method, operation) in &path_item.operations {
            // Checked before building so a skipped operation registers no DTOs
            let name = action_name(method, path);
            if controller.action(&name).is_some() {
                context.report(Diagnostic::new(
                    operation_location(method, path),
                    format!(
                        "action {} already exists in {}, operation skipped",
                        name, controller.name
                    ),
                ));
                continue;
            }
            let action = build_action(name, path, method, operation, context);
            controller.actions.push(action);
        }
    }

    Ok(controllers.into_values().collect())
}

fn operation_location(method: &str, path: &str) -> String {
    format!("{} {}", method.to_uppercase(), path)
}

fn build_action(
    name: String,
    path: &str,
    method: &str,
    operation: &Operation,
    context: &mut GenerationContext,
) -> Action {
    let location = operation_location(method, path);
    tracing::debug!("Building action {} for {}", name, location);

    let mut parameters = Vec::with_capacity(operation.parameters.len());
    for (index, parameter) in operation.parameters.iter().enumerate() {
        let parameter_location = match &parameter.name {
            Some(parameter_name) => format!("{location} parameter '{parameter_name}'"),
            None => format!("{location} parameter #{index}"),
        };
        match bind_parameter(parameter, &parameter_location) {
            Ok(bound) => parameters.push(bound),
            Err(GenerationError::FieldMissing { location, field }) => context.report(
                Diagnostic::new(location, format!("missing '{field}', parameter skipped")),
            ),
            Err(error) => context.report(Diagnostic::new(parameter_location, error.to_string())),
        }
    }

    let body = resolve_request_body(operation.request_body.as_ref(), &name, &mut context.dtos);
    let body_type = body.body_type().map(str::to_string);
    parameters.extend(body.into_parameters());

    let return_type = resolve_response(&operation.responses, &name, &mut context.dtos);

    Action {
        name,
        method: method.to_string(),
        path: path.to_string(),
        parameters,
        body_type,
        return_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{
        BindingKind, Parameter, ParameterLocation, PathItem, ReturnType, Schema, SchemaType,
    };
    use tracing_test::traced_test;

    fn document(paths: Vec<(&str, Vec<(&str, Operation)>)>) -> Document {
        Document {
            paths: paths
                .into_iter()
                .map(|(path, operations)| {
                    (
                        path.to_string(),
                        PathItem {
                            operations: operations
                                .into_iter()
                                .map(|(method, operation)| (method.to_string(), operation))
                                .collect(),
                        },
                    )
                })
                .collect(),
        }
    }

    fn id_parameter(schema: Option<Schema>) -> Parameter {
        Parameter {
            name: Some("id".to_string()),
            location: ParameterLocation::Path,
            schema,
        }
    }

    #[test]
    fn test_controllers_follow_document_order() {
        let doc = document(vec![
            ("/users", vec![("get", Operation::default()), ("post", Operation::default())]),
            ("/accounts", vec![("get", Operation::default())]),
        ]);
        let mut context = GenerationContext::default();

        let controllers = synthesize_controllers(&doc, &mut context).unwrap();
        let names: Vec<_> = controllers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["UsersController", "AccountsController"]);

        let actions: Vec<_> = controllers[0].actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(actions, ["GetUsers", "PostUsers"]);
        assert_eq!(controllers[0].actions[0].return_type, ReturnType::Success);
    }

    #[test]
    fn test_merge_policy_folds_paths() {
        let doc = document(vec![
            ("/orders", vec![("get", Operation::default())]),
            ("/orders/{id}", vec![("get", Operation::default()), ("delete", Operation::default())]),
        ]);
        let mut context = GenerationContext::new(CollisionPolicy::Merge);

        let controllers = synthesize_controllers(&doc, &mut context).unwrap();
        assert_eq!(controllers.len(), 1);

        let orders = &controllers[0];
        assert_eq!(orders.name, "OrdersController");
        assert_eq!(orders.paths, ["/orders", "/orders/{id}"]);
        let actions: Vec<_> = orders.actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(actions, ["GetOrders", "GetOrders_id", "DeleteOrders_id"]);
    }

    #[test]
    #[traced_test]
    fn test_merge_is_logged() {
        let doc = document(vec![
            ("/orders", vec![("get", Operation::default())]),
            ("/orders/{id}", vec![("delete", Operation::default())]),
        ]);
        let mut context = GenerationContext::new(CollisionPolicy::Merge);

        synthesize_controllers(&doc, &mut context).unwrap();
        assert!(logs_contain("Merging actions of '/orders/{id}' into OrdersController"));
    }

    #[test]
    fn test_reject_policy_fails() {
        let doc = document(vec![
            ("/orders", vec![("get", Operation::default())]),
            ("/orders/{id}", vec![("get", Operation::default())]),
        ]);
        let mut context = GenerationContext::new(CollisionPolicy::Reject);

        let error = synthesize_controllers(&doc, &mut context).unwrap_err();
        match error {
            GenerationError::ControllerCollision {
                controller,
                first_path,
                second_path,
            } => {
                assert_eq!(controller, "OrdersController");
                assert_eq!(first_path, "/orders");
                assert_eq!(second_path, "/orders/{id}");
            }
            other => panic!("Expected ControllerCollision, got {other:?}"),
        }
    }

    #[test]
    fn test_parameter_without_schema_is_skipped() {
        let operation = Operation {
            parameters: vec![
                id_parameter(None),
                Parameter {
                    name: Some("verbose".to_string()),
                    location: ParameterLocation::Query,
                    schema: Some(Schema::with_type(SchemaType::Boolean)),
                },
            ],
            ..Default::default()
        };
        let doc = document(vec![("/users/{id}", vec![("get", operation)])]);
        let mut context = GenerationContext::default();

        let controllers = synthesize_controllers(&doc, &mut context).unwrap();
        let action = &controllers[0].actions[0];
        assert_eq!(action.parameters.len(), 1);
        assert_eq!(action.parameters[0].name, "verbose");
        assert_eq!(action.parameters[0].binding, BindingKind::Query);

        assert_eq!(context.diagnostics.len(), 1);
        assert_eq!(context.diagnostics[0].location, "GET /users/{id} parameter 'id'");
        assert!(context.diagnostics[0].message.contains("'schema'"));
    }

    #[test]
    fn test_duplicate_action_is_reported() {
        let doc = document(vec![
            ("/users", vec![("get", Operation::default())]),
            ("/users/", vec![("get", Operation::default())]),
        ]);
        let mut context = GenerationContext::default();

        let controllers = synthesize_controllers(&doc, &mut context).unwrap();
        assert_eq!(controllers[0].actions.len(), 1);
        assert_eq!(context.diagnostics.len(), 1);
        assert_eq!(context.diagnostics[0].location, "GET /users/");
    }

    #[test]
    fn test_skipped_duplicate_registers_no_dto() {
        let mut body_schema = Schema::with_type(SchemaType::Object);
        body_schema
            .properties
            .insert("a".to_string(), Schema::with_type(SchemaType::String));
        let with_body = Operation {
            request_body: Some(crate::generation::RequestBody {
                content: IndexMap::from([(
                    "application/json".to_string(),
                    crate::generation::MediaType {
                        schema: Some(body_schema),
                    },
                )]),
            }),
            parameters: vec![id_parameter(None)],
            ..Default::default()
        };
        let doc = document(vec![
            ("/users", vec![("post", Operation::default())]),
            ("/users/", vec![("post", with_body)]),
        ]);
        let mut context = GenerationContext::default();

        let controllers = synthesize_controllers(&doc, &mut context).unwrap();
        assert_eq!(controllers[0].actions.len(), 1);
        assert_eq!(controllers[0].actions[0].body_type, None);
        assert!(context.dtos.is_empty());

        // Only the skip itself is reported, not the dropped operation's parameters
        assert_eq!(context.diagnostics.len(), 1);
        assert_eq!(context.diagnostics[0].location, "POST /users/");
    }

    #[test]
    fn test_shared_dto_names_are_synthesized_once() {
        let mut schema = Schema::with_type(SchemaType::Object);
        schema
            .properties
            .insert("id".to_string(), Schema::with_type(SchemaType::Integer));
        let response = crate::generation::Response {
            content: IndexMap::from([(
                "application/json".to_string(),
                crate::generation::MediaType {
                    schema: Some(schema),
                },
            )]),
        };
        let operation = Operation {
            responses: IndexMap::from([("200".to_string(), response)]),
            ..Default::default()
        };
        let doc = document(vec![("/users", vec![("get", operation.clone()), ("GET", operation)])]);
        let mut context = GenerationContext::default();

        synthesize_controllers(&doc, &mut context).unwrap();
        assert_eq!(context.dtos.len(), 1);
        assert!(context.dtos.contains("GetUsersResponse"));
    }
}
