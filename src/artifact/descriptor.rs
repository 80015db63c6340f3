//! Resolved dependency descriptors.
//!
//! An [`ArtifactDescriptor`] is one unit of the resolved dependency set: its
//! Maven coordinates, snapshot status and the local file the resolver
//! downloaded. Descriptors are built once by the caller and only read from
//! then on.

use super::error::{ArtifactError, Result};
use super::version::{base_version, compare_versions, is_snapshot};
use camino::{Utf8Path, Utf8PathBuf};
use std::cmp::Ordering;
use std::fmt;

/// Packaging type assumed when none is given.
pub const DEFAULT_TYPE: &str = "jar";

/// Scheme prefix of manifest entries.
pub const MVN_URI_SCHEME: &str = "mvn:";

/// A resolved dependency with its coordinates and local file.
///
/// # Examples
///
/// ```
/// use nar_mvn::artifact::ArtifactDescriptor;
///
/// let artifact = ArtifactDescriptor::new(
///     "org.apache.commons",
///     "commons-compress",
///     "1.8.1",
///     "/repo/commons-compress-1.8.1.jar",
/// )
/// .expect("valid coordinates");
///
/// assert_eq!(artifact.mvn_uri(), "mvn:org.apache.commons/commons-compress/1.8.1/jar");
/// assert!(!artifact.is_snapshot());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactDescriptor {
    group_id: String,
    artifact_id: String,
    version: String,
    artifact_type: String,
    classifier: Option<String>,
    snapshot: bool,
    file: Utf8PathBuf,
}

impl ArtifactDescriptor {
    /// Create a `jar` descriptor without a classifier.
    ///
    /// Snapshot status is derived from `version`.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::BlankCoordinate`] when the group, artifact
    /// or version is blank, and [`ArtifactError::InvalidCoordinate`] when one
    /// of them could be read as a path (a separator, `:` or a leading `..`).
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        file: impl Into<Utf8PathBuf>,
    ) -> Result<Self> {
        let group_id = require("groupId", group_id.into())?;
        let artifact_id = require("artifactId", artifact_id.into())?;
        let version = require("version", version.into())?;
        let snapshot = is_snapshot(&version);

        Ok(Self {
            group_id,
            artifact_id,
            version,
            artifact_type: DEFAULT_TYPE.to_owned(),
            classifier: None,
            snapshot,
            file: file.into(),
        })
    }

    /// Set the packaging type; a blank value keeps `jar`.
    #[must_use]
    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        let artifact_type = artifact_type.into();
        self.artifact_type = if artifact_type.trim().is_empty() {
            DEFAULT_TYPE.to_owned()
        } else {
            artifact_type
        };
        self
    }

    /// Set the classifier; a blank value clears it.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        let classifier = classifier.into();
        self.classifier = (!classifier.trim().is_empty()).then_some(classifier);
        self
    }

    /// Override the snapshot status derived from the version.
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: bool) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Group identifier.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Artifact identifier.
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Resolved version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Version used for repository directories.
    #[must_use]
    pub fn base_version(&self) -> String {
        base_version(&self.version)
    }

    /// Packaging type, never blank.
    #[must_use]
    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    /// Classifier, if any.
    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Whether this is a snapshot version.
    #[must_use]
    pub fn is_snapshot(&self) -> bool {
        self.snapshot
    }

    /// Whether the packaging type is `jar`, ignoring case.
    #[must_use]
    pub fn is_jar(&self) -> bool {
        self.artifact_type.eq_ignore_ascii_case(DEFAULT_TYPE)
    }

    /// Local file the resolver produced.
    #[must_use]
    pub fn file(&self) -> &Utf8Path {
        &self.file
    }

    /// Descriptor of the companion POM located at `file`.
    ///
    /// Shares group, artifact and version; type is `pom` with no classifier.
    #[must_use]
    pub fn pom_descriptor(&self, file: impl Into<Utf8PathBuf>) -> Self {
        Self {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.version.clone(),
            artifact_type: "pom".to_owned(),
            classifier: None,
            snapshot: self.snapshot,
            file: file.into(),
        }
    }

    /// Manifest line for this artifact.
    ///
    /// The classifier is not part of the URI, so two artifacts that differ
    /// only by classifier produce the same line.
    #[must_use]
    pub fn mvn_uri(&self) -> String {
        format!(
            "{MVN_URI_SCHEME}{}/{}/{}/{}",
            self.group_id, self.artifact_id, self.version, self.artifact_type
        )
    }
}

fn require(field: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ArtifactError::BlankCoordinate { field });
    }
    let reason = if value.contains(['/', '\\', ':']) {
        Some("contains a path separator or ':'")
    } else if value.starts_with("..") || value == "." {
        Some("starts with a relative path segment")
    } else {
        None
    };
    if let Some(reason) = reason {
        return Err(ArtifactError::InvalidCoordinate {
            field,
            value,
            reason,
        });
    }
    Ok(value)
}

impl fmt::Display for ArtifactDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group_id, self.artifact_id, self.artifact_type
        )?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, ":{}", self.version)
    }
}

impl Ord for ArtifactDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group_id
            .cmp(&other.group_id)
            .then_with(|| self.artifact_id.cmp(&other.artifact_id))
            .then_with(|| compare_versions(&self.version, &other.version))
            .then_with(|| compare_classifiers(self.classifier(), other.classifier()))
            .then_with(|| self.artifact_type.cmp(&other.artifact_type))
            // Keep the order total and consistent with `Eq`.
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.snapshot.cmp(&other.snapshot))
            .then_with(|| self.file.cmp(&other.file))
    }
}

impl PartialOrd for ArtifactDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Artifacts without a classifier sort after classified ones.
fn compare_classifiers(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => l.cmp(r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
