//! Output service implementations

pub mod filesystem_output;

pub use filesystem_output::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::OutputService;
    use crate::generation::{Artifact, ArtifactKind};
    use tempfile::TempDir;

    fn artifact(path: std::path::PathBuf, content: &str) -> Artifact {
        Artifact {
            kind: ArtifactKind::Controller,
            path,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_filesystem_output_write_artifacts() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        let artifacts = vec![
            artifact(
                temp_dir.path().join("Controllers/UsersController.cs"),
                "public class UsersController {}",
            ),
            artifact(temp_dir.path().join("UserDto.cs"), "public class UserDto {}"),
        ];

        let result = output_service.write_artifacts(&artifacts);
        assert!(result.is_ok());

        let content = std::fs::read_to_string(temp_dir.path().join("Controllers/UsersController.cs"))
            .expect("Failed to read controller");
        assert_eq!(content, "public class UsersController {}");
        assert!(temp_dir.path().join("UserDto.cs").exists());
    }

    #[test]
    fn test_filesystem_output_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();
        let path = temp_dir.path().join("UserDto.cs");

        std::fs::write(&path, "a much longer previous body that must disappear").unwrap();
        output_service
            .write_artifacts(&[artifact(path.clone(), "new")])
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_filesystem_output_ensure_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        let nested_path = temp_dir.path().join("deeply/nested/directory");

        let result = output_service.ensure_directory(&nested_path);
        assert!(result.is_ok());
        assert!(nested_path.is_dir());
    }
}
