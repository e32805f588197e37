//! Port interfaces for the application layer

use std::path::Path;

/// Service for writing generated artifacts to the output destination
pub trait OutputService: Send + Sync {
    /// Write all artifacts to the output destination
    fn write_artifacts(
        &self,
        artifacts: &[crate::generation::Artifact],
    ) -> Result<(), crate::application::ApplicationError>;

    /// Ensure a directory exists
    fn ensure_directory(&self, path: &Path) -> Result<(), crate::application::ApplicationError>;
}
