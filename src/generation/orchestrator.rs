//! Generation orchestration - coordinates the generation workflow

use std::path::PathBuf;
use std::sync::Arc;

use crate::generation::controllers::synthesize_controllers;
use crate::generation::{
    Artifact, ArtifactKind, CollisionPolicy, Document, GenerationContext, GenerationError,
    GenerationResult, SynthesisResult, TemplateRenderer,
};

/// Orchestrates the code generation workflow
pub struct GenerationOrchestrator {
    renderer: Arc<dyn TemplateRenderer>,
}

impl GenerationOrchestrator {
    /// Create a new generation orchestrator
    pub fn new(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }

    /// Run synthesis with a fresh context, so no DTO state leaks between runs
    pub fn synthesize(
        document: &Document,
        collision_policy: CollisionPolicy,
    ) -> Result<SynthesisResult, GenerationError> {
        let mut context = GenerationContext::new(collision_policy);
        let controllers = synthesize_controllers(document, &mut context)?;

        Ok(SynthesisResult {
            controllers,
            dtos: context.dtos.into_dtos(),
            diagnostics: context.diagnostics,
        })
    }

    /// Execute the generation workflow.
    ///
    /// Every artifact is rendered before this returns, so a render failure
    /// never leaves a partially written output behind.
    pub fn generate(
        &self,
        document: &Document,
        collision_policy: CollisionPolicy,
    ) -> Result<GenerationResult, GenerationError> {
        tracing::debug!(
            "Orchestrator starting generation with {} paths",
            document.paths.len()
        );

        let synthesis = Self::synthesize(document, collision_policy)?;
        let extension = self.renderer.file_extension();

        let mut artifacts = Vec::with_capacity(synthesis.controllers.len() + synthesis.dtos.len());
        for controller in &synthesis.controllers {
            artifacts.push(Artifact {
                kind: ArtifactKind::Controller,
                path: PathBuf::from(format!("{}.{extension}", controller.name)),
                content: self.renderer.render_controller(controller)?,
            });
        }
        for dto in &synthesis.dtos {
            artifacts.push(Artifact {
                kind: ArtifactKind::Dto,
                path: PathBuf::from(format!("{}.{extension}", dto.name)),
                content: self.renderer.render_dto(dto)?,
            });
        }

        tracing::debug!(
            "Rendered {} controllers and {} DTOs",
            synthesis.controllers.len(),
            synthesis.dtos.len()
        );

        Ok(GenerationResult {
            artifacts,
            diagnostics: synthesis.diagnostics,
        })
    }
}
