//! Companion POM resolution.
//!
//! Every manifest-listed artifact is exported together with its POM so the
//! output directory is a usable repository. Resolution sits behind
//! [`PomResolver`] so callers that already know where the POM lives can
//! supply it directly.

use super::descriptor::ArtifactDescriptor;
use crate::error::{ExportError, Result};

/// Resolves the POM that accompanies an artifact.
pub trait PomResolver {
    /// Return a descriptor for the POM of `artifact`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::PomResolution`] when the POM cannot be found.
    fn resolve_pom(&self, artifact: &ArtifactDescriptor) -> Result<ArtifactDescriptor>;
}

/// Looks for `{artifactId}-{version}.pom` beside the artifact file.
///
/// This is where a local Maven repository keeps it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiblingPomResolver;

impl PomResolver for SiblingPomResolver {
    fn resolve_pom(&self, artifact: &ArtifactDescriptor) -> Result<ArtifactDescriptor> {
        let Some(dir) = artifact.file().parent() else {
            return Err(ExportError::PomResolution {
                coordinates: artifact.to_string(),
                reason: format!("{} has no parent directory", artifact.file()),
            });
        };
        let pom_path = dir.join(format!(
            "{}-{}.pom",
            artifact.artifact_id(),
            artifact.version()
        ));
        if !pom_path.is_file() {
            return Err(ExportError::PomResolution {
                coordinates: artifact.to_string(),
                reason: format!("{pom_path} not found"),
            });
        }
        Ok(artifact.pom_descriptor(pom_path))
    }
}
