//! Destination naming for exported artifacts.
//!
//! Two layouts are supported: the Maven repository layout used for the
//! external export directory, and the flat layout used when dependencies are
//! embedded in the archive's dependency directory.

use super::descriptor::ArtifactDescriptor;
use camino::{Utf8Path, Utf8PathBuf};

/// Where an artifact lands relative to a root directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `{group-as-path}/{artifactId}/{baseVersion}/{file}`.
    Repository,
    /// Directly under the root; `strip_version` drops the version from the
    /// file name.
    Flat {
        /// Remove the version from the file name.
        strip_version: bool,
    },
}

impl Layout {
    /// Directory below `root` that holds `artifact`.
    #[must_use]
    pub fn directory(self, root: &Utf8Path, artifact: &ArtifactDescriptor) -> Utf8PathBuf {
        match self {
            Self::Repository => {
                let mut dir = root.to_path_buf();
                for segment in artifact.group_id().split('.') {
                    dir.push(segment);
                }
                dir.push(artifact.artifact_id());
                dir.push(artifact.base_version());
                dir
            }
            Self::Flat { .. } => root.to_path_buf(),
        }
    }

    /// File name of `artifact` under this layout.
    #[must_use]
    pub fn file_name(self, artifact: &ArtifactDescriptor) -> String {
        let strip_version = matches!(self, Self::Flat { strip_version: true });
        formatted_file_name(artifact, strip_version)
    }

    /// Full destination path of `artifact` below `root`.
    #[must_use]
    pub fn destination(self, root: &Utf8Path, artifact: &ArtifactDescriptor) -> Utf8PathBuf {
        self.directory(root, artifact).join(self.file_name(artifact))
    }
}

/// `{artifactId}[-{version}][-{classifier}].{extension}`
///
/// # Examples
///
/// ```
/// use nar_mvn::artifact::{ArtifactDescriptor, layout::formatted_file_name};
///
/// let artifact = ArtifactDescriptor::new("org.example", "native-lib", "2.1", "/tmp/x")
///     .expect("valid coordinates")
///     .with_type("zip")
///     .with_classifier("linux-x86_64");
///
/// assert_eq!(
///     formatted_file_name(&artifact, false),
///     "native-lib-2.1-linux-x86_64.zip"
/// );
/// ```
#[must_use]
pub fn formatted_file_name(artifact: &ArtifactDescriptor, strip_version: bool) -> String {
    let mut name = artifact.artifact_id().to_owned();
    if !strip_version {
        name.push('-');
        name.push_str(artifact.version());
    }
    if let Some(classifier) = effective_classifier(artifact) {
        name.push('-');
        name.push_str(classifier);
    }
    name.push('.');
    name.push_str(extension(artifact.artifact_type()));
    name
}

/// File extension for a packaging type.
///
/// Types that Maven packages as plain jars map to `jar`; every other type is
/// its own extension.
#[must_use]
pub fn extension(artifact_type: &str) -> &str {
    match artifact_type {
        "test-jar" | "maven-plugin" | "ejb" | "ejb-client" | "bundle" | "java-source"
        | "javadoc" => "jar",
        other => other,
    }
}

/// Classifier to put in file names, including the one implied by the type.
fn effective_classifier(artifact: &ArtifactDescriptor) -> Option<&str> {
    artifact
        .classifier()
        .or(match artifact.artifact_type() {
            "test-jar" => Some("tests"),
            "ejb-client" => Some("client"),
            "java-source" => Some("sources"),
            "javadoc" => Some("javadoc"),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn compress() -> ArtifactDescriptor {
        ArtifactDescriptor::new("org.apache.commons", "commons-compress", "1.8.1", "/m2/x.jar")
            .expect("valid coordinates")
    }

    #[rstest]
    fn repository_destination_follows_maven_layout(compress: ArtifactDescriptor) {
        let dest = Layout::Repository.destination(Utf8Path::new("/out"), &compress);
        assert_eq!(
            dest,
            Utf8PathBuf::from("/out/org/apache/commons/commons-compress/1.8.1/commons-compress-1.8.1.jar")
        );
    }

    #[rstest]
    fn repository_directory_uses_base_version(compress: ArtifactDescriptor) {
        let snapshot = ArtifactDescriptor::new(
            compress.group_id(),
            compress.artifact_id(),
            "1.9-20240101.120000-4",
            "/m2/x.jar",
        )
        .expect("valid coordinates");

        let dest = Layout::Repository.destination(Utf8Path::new("/out"), &snapshot);
        assert_eq!(
            dest,
            Utf8PathBuf::from(
                "/out/org/apache/commons/commons-compress/1.9-SNAPSHOT/commons-compress-1.9-20240101.120000-4.jar"
            )
        );
    }

    #[rstest]
    fn flat_layout_can_strip_version(compress: ArtifactDescriptor) {
        let root = Utf8Path::new("/nar/META-INF/bundled-dependencies");
        assert_eq!(
            Layout::Flat { strip_version: true }.destination(root, &compress),
            root.join("commons-compress.jar")
        );
        assert_eq!(
            Layout::Flat { strip_version: false }.destination(root, &compress),
            root.join("commons-compress-1.8.1.jar")
        );
    }

    #[rstest]
    #[case("jar", None, "commons-compress-1.8.1.jar")]
    #[case("tar", None, "commons-compress-1.8.1.tar")]
    #[case("jar", Some("natives"), "commons-compress-1.8.1-natives.jar")]
    #[case("test-jar", None, "commons-compress-1.8.1-tests.jar")]
    #[case("ejb-client", None, "commons-compress-1.8.1-client.jar")]
    #[case("java-source", None, "commons-compress-1.8.1-sources.jar")]
    #[case("pom", None, "commons-compress-1.8.1.pom")]
    fn file_names_follow_type_and_classifier(
        compress: ArtifactDescriptor,
        #[case] artifact_type: &str,
        #[case] classifier: Option<&str>,
        #[case] expected: &str,
    ) {
        let mut artifact = compress.with_type(artifact_type);
        if let Some(classifier) = classifier {
            artifact = artifact.with_classifier(classifier);
        }
        assert_eq!(formatted_file_name(&artifact, false), expected);
    }
}
