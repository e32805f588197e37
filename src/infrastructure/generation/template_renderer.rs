//! Tera-based template renderer implementation

use serde::Serialize;
use tera::{Context, Tera};

use crate::generation::{
    Action, DtoField, GeneratedController, GeneratedDto, GenerationError, ReturnType,
    TemplateRenderer,
};

const CONTROLLER_TEMPLATE: &str = "controller.cs";
const DTO_TEMPLATE: &str = "dto.cs";

/// Extension of generated C# sources
pub const CSHARP_EXTENSION: &str = "cs";

#[derive(Debug, Serialize)]
struct ControllerView {
    name: String,
    actions: Vec<ActionView>,
}

#[derive(Debug, Serialize)]
struct ActionView {
    name: String,
    http_attribute: String,
    route: String,
    return_type: String,
    parameters: String,
    return_statement: String,
}

#[derive(Debug, Serialize)]
struct DtoView {
    name: String,
    fields: Vec<FieldView>,
}

#[derive(Debug, Serialize)]
struct FieldView {
    name: String,
    type_name: String,
    attributes: Vec<String>,
}

impl From<&Action> for ActionView {
    fn from(action: &Action) -> Self {
        let return_statement = match &action.return_type {
            ReturnType::Wrapped(dto) => format!("return Ok(new {dto}());"),
            ReturnType::Success => "return Ok();".to_string(),
        };

        Self {
            name: action.name.clone(),
            http_attribute: action.http_attribute(),
            route: action.route().to_string(),
            return_type: action.return_type.type_name(),
            parameters: action
                .parameters
                .iter()
                .map(|parameter| parameter.declaration())
                .collect::<Vec<_>>()
                .join(", "),
            return_statement,
        }
    }
}

impl From<&DtoField> for FieldView {
    fn from(field: &DtoField) -> Self {
        Self {
            name: field.name.clone(),
            type_name: field.type_name.clone(),
            attributes: field
                .json_name
                .iter()
                .map(|json_name| format!("[JsonPropertyName(\"{json_name}\")]"))
                .chain(field.constraints.iter().map(|constraint| constraint.attribute()))
                .collect(),
        }
    }
}

/// Renders ASP.NET Core controllers and DTO classes from embedded templates
pub struct TeraTemplateRenderer {
    tera: Tera,
}

impl TeraTemplateRenderer {
    pub fn new() -> Result<Self, GenerationError> {
        let mut tera = Tera::default();
        // Generated C# must not be HTML-escaped (`ActionResult<T>`)
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            (
                CONTROLLER_TEMPLATE,
                include_str!("../../../templates/csharp/controller.cs.tera"),
            ),
            (
                DTO_TEMPLATE,
                include_str!("../../../templates/csharp/dto.cs.tera"),
            ),
        ])
        .map_err(|e| GenerationError::RenderError(format!("Failed to add template: {e}")))?;

        Ok(Self { tera })
    }

    fn render_view<T: Serialize>(&self, template: &str, view: &T) -> Result<String, GenerationError> {
        let context = Context::from_serialize(view).map_err(|e| {
            GenerationError::RenderError(format!("Failed to build context for {template}: {e}"))
        })?;

        self.tera.render(template, &context).map_err(|e| {
            GenerationError::RenderError(format!("Failed to render template {template}: {e}"))
        })
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    fn render_controller(
        &self,
        controller: &GeneratedController,
    ) -> Result<String, GenerationError> {
        let view = ControllerView {
            name: controller.name.clone(),
            actions: controller.actions.iter().map(ActionView::from).collect(),
        };
        self.render_view(CONTROLLER_TEMPLATE, &view)
    }

    fn render_dto(&self, dto: &GeneratedDto) -> Result<String, GenerationError> {
        let view = DtoView {
            name: dto.name.clone(),
            fields: dto.fields.iter().map(FieldView::from).collect(),
        };
        self.render_view(DTO_TEMPLATE, &view)
    }

    fn file_extension(&self) -> &'static str {
        CSHARP_EXTENSION
    }
}
