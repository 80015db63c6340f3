//! Error types for dependency manifest generation and artifact export.
//!
//! Every failure of an export run surfaces as a single [`ExportError`]
//! carrying the path involved and the underlying cause. Nothing is retried
//! and nothing already written is rolled back.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that abort an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The manifest output directory could not be created.
    #[error("failed to create directory {path}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest file could not be opened, written or flushed.
    #[error("failed to write dependencies file {path}")]
    FileIo {
        /// Path of the manifest file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An artifact or POM could not be copied to its destination.
    #[error("failed to copy {from} to {to}")]
    Copy {
        /// Source file.
        from: Utf8PathBuf,
        /// Destination file.
        to: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The destination computed for an artifact falls outside the export
    /// root.
    #[error("destination of {coordinates} leaves the export root: {path}")]
    UnsafeDestination {
        /// Maven id of the artifact.
        coordinates: String,
        /// Destination that was refused.
        path: Utf8PathBuf,
    },

    /// The resolved artifact has no file on disk.
    #[error("resolved file for {coordinates} does not exist: {path}")]
    MissingArtifactFile {
        /// Maven id of the artifact.
        coordinates: String,
        /// Path the resolver reported.
        path: Utf8PathBuf,
    },

    /// The companion POM of an artifact could not be resolved.
    #[error("failed to resolve POM for {coordinates}: {reason}")]
    PomResolution {
        /// Maven id of the artifact whose POM was requested.
        coordinates: String,
        /// Description of the failure.
        reason: String,
    },
}

/// Broad category of an [`ExportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportErrorKind {
    /// Directory creation failed.
    DirectoryCreation,
    /// Manifest file I/O failed.
    FileIo,
    /// Copying into the output tree failed or was refused.
    Copy,
    /// A source file or POM was unavailable.
    Resolution,
}

impl ExportError {
    /// Return the category of this error.
    #[must_use]
    pub fn kind(&self) -> ExportErrorKind {
        match self {
            Self::DirectoryCreation { .. } => ExportErrorKind::DirectoryCreation,
            Self::FileIo { .. } => ExportErrorKind::FileIo,
            Self::Copy { .. } | Self::UnsafeDestination { .. } => ExportErrorKind::Copy,
            Self::MissingArtifactFile { .. } | Self::PomResolution { .. } => {
                ExportErrorKind::Resolution
            }
        }
    }
}

/// Result type alias using [`ExportError`].
pub type Result<T> = std::result::Result<T, ExportError>;
