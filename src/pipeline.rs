//! Dependency step of NAR packaging.
//!
//! The packaging pipeline hands over the resolved dependency set once; the
//! [`ArchiveBundlingMode`] in [`PackagingSettings`] decides whether the
//! artifacts are embedded in the archive's dependency directory or replaced
//! by a `dependencies.mvn` manifest.

use crate::artifact::{ArtifactDescriptor, Layout};
use crate::config::{ArchiveBundlingMode, PackagingSettings};
use crate::error::ExportError;
use crate::exporter::{ExportReport, ManifestExporter};
use crate::stager::ArtifactStager;
use camino::Utf8PathBuf;
use log::{info, trace};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised by the dependency packaging step.
#[derive(Debug, Error)]
pub enum PackagingError {
    /// Writing the manifest or copying artifacts failed.
    #[error("failed to generate the dependencies file")]
    Export(#[from] ExportError),

    /// A dependency requested with a classifier could not be resolved.
    #[error("classifier artifact {coordinates} could not be resolved")]
    MissingClassifierArtifact {
        /// Maven id of the unresolved artifact.
        coordinates: String,
    },
}

/// Result type alias using [`PackagingError`].
pub type Result<T> = std::result::Result<T, PackagingError>;

/// Dependencies handed over by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    /// Artifacts resolved for the runtime scope.
    pub resolved: BTreeSet<ArtifactDescriptor>,
    /// Artifacts the resolver skipped.
    pub skipped: Vec<ArtifactDescriptor>,
}

impl DependencySet {
    /// Set containing `resolved` and nothing skipped.
    #[must_use]
    pub fn resolved(resolved: impl IntoIterator<Item = ArtifactDescriptor>) -> Self {
        Self {
            resolved: resolved.into_iter().collect(),
            skipped: Vec::new(),
        }
    }

    /// Add a skipped artifact.
    #[must_use]
    pub fn with_skipped(mut self, artifact: ArtifactDescriptor) -> Self {
        self.skipped.push(artifact);
        self
    }
}

/// Outcome of the dependency step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackagingReport {
    /// Artifacts were copied into the dependency directory.
    Embedded {
        /// Destination of every embedded file.
        files: Vec<Utf8PathBuf>,
    },
    /// A manifest was written instead.
    ManifestOnly(ExportReport),
}

/// Runs the dependency step with settings resolved up front.
#[derive(Debug, Clone)]
pub struct DependencyPackager {
    settings: PackagingSettings,
}

impl DependencyPackager {
    /// Create a packager for `settings`.
    #[must_use]
    pub fn new(settings: PackagingSettings) -> Self {
        Self { settings }
    }

    /// Settings in use.
    #[must_use]
    pub fn settings(&self) -> &PackagingSettings {
        &self.settings
    }

    /// Stage `dependencies` according to the bundling mode.
    ///
    /// # Errors
    ///
    /// Returns [`PackagingError::MissingClassifierArtifact`] when a skipped
    /// dependency carries a classifier and the settings require it, or
    /// [`PackagingError::Export`] when any file operation fails.
    pub fn package(&self, dependencies: &DependencySet) -> Result<PackagingReport> {
        self.check_skipped(&dependencies.skipped)?;

        match self.settings.bundling {
            ArchiveBundlingMode::Embed => {
                let files = self.embed(&dependencies.resolved)?;
                info!(
                    "embedded {} dependencies in {}",
                    files.len(),
                    self.settings.dependencies_directory
                );
                Ok(PackagingReport::Embedded { files })
            }
            ArchiveBundlingMode::ManifestOnly => {
                let exporter = ManifestExporter::new(self.settings.export.clone());
                let report = exporter.export_dependencies(
                    &dependencies.resolved,
                    &self.settings.dependencies_directory,
                )?;
                Ok(PackagingReport::ManifestOnly(report))
            }
        }
    }

    fn check_skipped(&self, skipped: &[ArtifactDescriptor]) -> Result<()> {
        for artifact in skipped {
            trace!("skipped {artifact}");
            if self.settings.fail_on_missing_classifier_artifact && artifact.classifier().is_some()
            {
                return Err(PackagingError::MissingClassifierArtifact {
                    coordinates: artifact.to_string(),
                });
            }
        }
        Ok(())
    }

    fn embed(
        &self,
        resolved: &BTreeSet<ArtifactDescriptor>,
    ) -> std::result::Result<Vec<Utf8PathBuf>, ExportError> {
        let stager = ArtifactStager::new(
            self.settings.dependencies_directory.clone(),
            Layout::Flat {
                strip_version: self.settings.strip_version,
            },
        );
        resolved.iter().map(|a| stager.stage(a)).collect()
    }
}
