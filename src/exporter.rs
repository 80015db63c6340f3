//! Dependency manifest generation and artifact export.
//!
//! [`ManifestExporter`] turns a resolved dependency set into a
//! `dependencies.mvn` file listing `mvn:` URIs and, when an output
//! repository is configured, copies the artifacts into a Maven
//! repository-layout directory. Artifacts are processed in their natural
//! order so the manifest is stable across runs.
//!
//! Which artifacts are listed and which are only copied:
//!
//! | artifact                     | manifest line | copy | POM copy |
//! |------------------------------|---------------|------|----------|
//! | non-jar type                 | no            | yes  | no       |
//! | snapshot jar, listed         | yes           | yes  | yes      |
//! | snapshot jar, not listed     | no            | yes  | no       |
//! | release jar                  | yes           | yes  | yes      |
//!
//! Copies are skipped entirely when no output repository is configured.

use crate::artifact::{ArtifactDescriptor, PomResolver, SiblingPomResolver};
use crate::config::{ExportConfiguration, MANIFEST_FILE_NAME};
use crate::error::{ExportError, Result};
use crate::manifest::{ManifestWriter, WriteMode};
use crate::stager::ArtifactStager;
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use std::fs;

/// What an export run does with one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportAction {
    /// Write a manifest line, then copy the artifact and its POM.
    ListAndCopy,
    /// Copy the artifact only.
    CopyOnly,
}

impl ExportAction {
    /// Decide the action for `artifact` under `config`.
    #[must_use]
    pub fn for_artifact(artifact: &ArtifactDescriptor, config: &ExportConfiguration) -> Self {
        if !artifact.is_jar() {
            return Self::CopyOnly;
        }
        if artifact.is_snapshot() && !config.include_snapshot_in_file {
            return Self::CopyOnly;
        }
        Self::ListAndCopy
    }
}

/// Outcome of an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Path of the manifest file.
    pub manifest_path: Utf8PathBuf,
    /// Lines written in this run, in order.
    pub manifest_lines: Vec<String>,
    /// Destination of every file copied, in order.
    pub copied: Vec<Utf8PathBuf>,
}

/// Writes the dependency manifest and exports artifacts.
#[derive(Debug, Clone)]
pub struct ManifestExporter<R = SiblingPomResolver> {
    config: ExportConfiguration,
    stager: Option<ArtifactStager>,
    pom_resolver: R,
}

impl ManifestExporter {
    /// Create an exporter that finds POMs beside their artifacts.
    #[must_use]
    pub fn new(config: ExportConfiguration) -> Self {
        Self::with_pom_resolver(config, SiblingPomResolver)
    }
}

impl<R: PomResolver> ManifestExporter<R> {
    /// Create an exporter with a custom POM resolver.
    #[must_use]
    pub fn with_pom_resolver(config: ExportConfiguration, pom_resolver: R) -> Self {
        let stager = config
            .output_repository_location
            .clone()
            .map(ArtifactStager::repository);
        Self {
            config,
            stager,
            pom_resolver,
        }
    }

    /// Write `dependencies.mvn` into `manifest_directory` and export the
    /// artifacts.
    ///
    /// The directory is created if missing. Duplicate descriptors are
    /// processed once. On failure, lines and copies already made are left
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExportError`] raised by directory creation,
    /// manifest I/O, POM resolution or copying.
    pub fn export_dependencies<'a, I>(
        &self,
        artifacts: I,
        manifest_directory: &Utf8Path,
    ) -> Result<ExportReport>
    where
        I: IntoIterator<Item = &'a ArtifactDescriptor>,
    {
        fs::create_dir_all(manifest_directory).map_err(|source| {
            ExportError::DirectoryCreation {
                path: manifest_directory.to_path_buf(),
                source,
            }
        })?;

        let manifest_path = manifest_directory.join(MANIFEST_FILE_NAME);
        let mut writer = ManifestWriter::open(
            &manifest_path,
            WriteMode::from_append(self.config.file_append),
        )?;
        let mut report = ExportReport {
            manifest_path,
            ..ExportReport::default()
        };

        for artifact in sorted(artifacts) {
            match ExportAction::for_artifact(artifact, &self.config) {
                ExportAction::ListAndCopy => {
                    let uri = artifact.mvn_uri();
                    writer.write_line(&uri)?;
                    debug!("listed {artifact} as {uri}");
                    report.manifest_lines.push(uri);
                    self.copy_with_pom(artifact, &mut report)?;
                }
                ExportAction::CopyOnly => {
                    debug!("{artifact} kept out of {MANIFEST_FILE_NAME}");
                    self.copy(artifact, &mut report)?;
                }
            }
        }

        writer.finish()?;
        info!(
            "wrote {} entries to {}, exported {} files",
            report.manifest_lines.len(),
            report.manifest_path,
            report.copied.len()
        );
        Ok(report)
    }

    fn copy(&self, artifact: &ArtifactDescriptor, report: &mut ExportReport) -> Result<()> {
        if let Some(stager) = &self.stager {
            report.copied.push(stager.stage(artifact)?);
        }
        Ok(())
    }

    fn copy_with_pom(&self, artifact: &ArtifactDescriptor, report: &mut ExportReport) -> Result<()> {
        let Some(stager) = &self.stager else {
            return Ok(());
        };
        report.copied.push(stager.stage(artifact)?);
        let pom = self.pom_resolver.resolve_pom(artifact)?;
        report.copied.push(stager.stage(&pom)?);
        Ok(())
    }
}

/// Export `artifacts` with `config`, writing the manifest into
/// `manifest_directory`.
///
/// # Errors
///
/// See [`ManifestExporter::export_dependencies`].
pub fn export_dependencies<'a, I>(
    artifacts: I,
    config: &ExportConfiguration,
    manifest_directory: &Utf8Path,
) -> Result<ExportReport>
where
    I: IntoIterator<Item = &'a ArtifactDescriptor>,
{
    ManifestExporter::new(config.clone()).export_dependencies(artifacts, manifest_directory)
}

/// Natural order, duplicates removed.
fn sorted<'a, I>(artifacts: I) -> Vec<&'a ArtifactDescriptor>
where
    I: IntoIterator<Item = &'a ArtifactDescriptor>,
{
    let mut ordered: Vec<&ArtifactDescriptor> = artifacts.into_iter().collect();
    ordered.sort();
    ordered.dedup();
    ordered
}

#[cfg(test)]
#[path = "exporter_tests.rs"]
mod tests;
