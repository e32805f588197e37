//! Use case for generating controllers and DTOs from an OpenAPI document

use crate::application::{
    ApplicationError, GenerateServerRequest, GenerateServerResponse, OutputService,
};
use crate::generation::{ArtifactKind, GenerationOrchestrator, OpenApiLoader};
use std::sync::Arc;

/// Use case for generating server scaffolding
pub struct GenerateServerUseCase {
    openapi_loader: Arc<dyn OpenApiLoader>,
    generation_orchestrator: Arc<GenerationOrchestrator>,
    output_service: Arc<dyn OutputService>,
}

impl GenerateServerUseCase {
    pub fn new(
        openapi_loader: Arc<dyn OpenApiLoader>,
        generation_orchestrator: Arc<GenerationOrchestrator>,
        output_service: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            openapi_loader,
            generation_orchestrator,
            output_service,
        }
    }

    pub fn execute(
        &self,
        request: GenerateServerRequest,
    ) -> Result<GenerateServerResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        // 2. Load OpenAPI
        let parsed = self.openapi_loader.load(&request.input_path)?;

        // 3. Synthesize and render everything up front
        let result = self
            .generation_orchestrator
            .generate(&parsed.document, request.collision_policy)?;

        let mut diagnostics = parsed.diagnostics;
        diagnostics.extend(result.diagnostics);
        for diagnostic in &diagnostics {
            tracing::warn!("Skipped {}", diagnostic);
        }

        // 4. Ensure output directories exist
        self.output_service
            .ensure_directory(&request.controller_dir)?;
        self.output_service.ensure_directory(&request.dto_dir)?;

        // 5. Prepend output directory to artifact paths and write
        let mut output_artifacts = result.artifacts;
        for artifact in &mut output_artifacts {
            let dir = match artifact.kind {
                ArtifactKind::Controller => &request.controller_dir,
                ArtifactKind::Dto => &request.dto_dir,
            };
            artifact.path = dir.join(&artifact.path);
        }

        let controllers_written = output_artifacts
            .iter()
            .filter(|a| a.kind == ArtifactKind::Controller)
            .count();
        let dtos_written = output_artifacts.len() - controllers_written;

        self.output_service.write_artifacts(&output_artifacts)?;

        tracing::debug!(
            "Wrote {} controllers to {} and {} DTOs to {}",
            controllers_written,
            request.controller_dir.display(),
            dtos_written,
            request.dto_dir.display()
        );

        Ok(GenerateServerResponse {
            controllers_written,
            dtos_written,
            controller_dir: request.controller_dir,
            dto_dir: request.dto_dir,
            diagnostics,
        })
    }
}
