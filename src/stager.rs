//! File staging into a destination tree.
//!
//! This module copies resolved artifact files below a root directory, using
//! either the Maven repository layout or the flat layout of the archive's
//! dependency directory.

use crate::artifact::{ArtifactDescriptor, Layout};
use crate::error::{ExportError, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use log::debug;
use std::fs;

/// Copies artifacts below a root directory.
#[derive(Debug, Clone)]
pub struct ArtifactStager {
    root: Utf8PathBuf,
    layout: Layout,
}

impl ArtifactStager {
    /// Create a stager writing below `root` with the given layout.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>, layout: Layout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// Stager for a Maven repository-layout directory.
    #[must_use]
    pub fn repository(root: impl Into<Utf8PathBuf>) -> Self {
        Self::new(root, Layout::Repository)
    }

    /// Copy the file of `artifact` to its destination.
    ///
    /// Parent directories are created as needed and an existing destination
    /// is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingArtifactFile`] when the source does not
    /// exist, [`ExportError::UnsafeDestination`] when the type or classifier
    /// would place the file outside the root, [`ExportError::DirectoryCreation`]
    /// when the destination directory cannot be created, or
    /// [`ExportError::Copy`] when the copy fails.
    pub fn stage(&self, artifact: &ArtifactDescriptor) -> Result<Utf8PathBuf> {
        let source = artifact.file();
        if !source.is_file() {
            return Err(ExportError::MissingArtifactFile {
                coordinates: artifact.to_string(),
                path: source.to_path_buf(),
            });
        }

        let dest_dir = self.layout.directory(&self.root, artifact);
        let dest_path = dest_dir.join(self.layout.file_name(artifact));
        if !stays_below(&self.root, &dest_path) {
            return Err(ExportError::UnsafeDestination {
                coordinates: artifact.to_string(),
                path: dest_path,
            });
        }

        fs::create_dir_all(&dest_dir).map_err(|source| ExportError::DirectoryCreation {
            path: dest_dir.clone(),
            source,
        })?;

        fs::copy(source, &dest_path).map_err(|e| ExportError::Copy {
            from: source.to_path_buf(),
            to: dest_path.clone(),
            source: e,
        })?;

        debug!("copied {artifact} to {dest_path}");
        Ok(dest_path)
    }
}

/// Whether `path` is `root` followed only by plain name segments.
fn stays_below(root: &Utf8Path, path: &Utf8Path) -> bool {
    path.strip_prefix(root).is_ok_and(|relative| {
        relative
            .components()
            .all(|c| matches!(c, Utf8Component::Normal(_)))
    })
}
