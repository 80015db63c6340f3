//! Error types for artifact coordinate validation.
//!
//! Each variant names the coordinate that was rejected so the caller can
//! report which dependency the resolver handed over in a broken state.

use thiserror::Error;

/// Errors arising from invalid artifact coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactError {
    /// A required coordinate (group, artifact or version) is blank.
    #[error("artifact {field} must not be blank")]
    BlankCoordinate {
        /// Name of the coordinate that was blank.
        field: &'static str,
    },

    /// A coordinate would not stay a single directory or file name segment.
    #[error("artifact {field} \"{value}\" {reason}")]
    InvalidCoordinate {
        /// Name of the rejected coordinate.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Which rule the value broke.
        reason: &'static str,
    },
}

/// Result type alias using [`ArtifactError`].
pub type Result<T> = std::result::Result<T, ArtifactError>;
