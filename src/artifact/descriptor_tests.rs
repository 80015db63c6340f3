//! Unit tests for artifact descriptors.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn compress() -> ArtifactDescriptor {
    ArtifactDescriptor::new(
        "org.apache.commons",
        "commons-compress",
        "1.8.1",
        "/repo/org/apache/commons/commons-compress/1.8.1/commons-compress-1.8.1.jar",
    )
    .expect("valid coordinates")
}

fn artifact(group: &str, id: &str, version: &str) -> ArtifactDescriptor {
    ArtifactDescriptor::new(group, id, version, format!("/repo/{id}-{version}.jar"))
        .expect("valid coordinates")
}

#[rstest]
fn formats_release_jar_uri(compress: ArtifactDescriptor) {
    assert_eq!(
        compress.mvn_uri(),
        "mvn:org.apache.commons/commons-compress/1.8.1/jar"
    );
}

#[rstest]
fn uri_omits_classifier(compress: ArtifactDescriptor) {
    let classified = compress.clone().with_classifier("tests");
    assert_eq!(classified.mvn_uri(), compress.mvn_uri());
}

#[rstest]
fn uri_uses_declared_type(compress: ArtifactDescriptor) {
    let zip = compress.with_type("zip");
    assert_eq!(
        zip.mvn_uri(),
        "mvn:org.apache.commons/commons-compress/1.8.1/zip"
    );
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_type_defaults_to_jar(compress: ArtifactDescriptor, #[case] blank: &str) {
    let typed = compress.with_type(blank);
    assert_eq!(typed.artifact_type(), "jar");
    assert!(typed.is_jar());
}

#[rstest]
fn jar_check_ignores_case(compress: ArtifactDescriptor) {
    assert!(compress.with_type("JAR").is_jar());
}

#[rstest]
fn blank_classifier_is_absent(compress: ArtifactDescriptor) {
    assert!(compress.with_classifier("").classifier().is_none());
}

#[rstest]
#[case("", "a", "1")]
#[case("g", " ", "1")]
#[case("g", "a", "")]
fn rejects_blank_coordinates(#[case] group: &str, #[case] id: &str, #[case] version: &str) {
    let result = ArtifactDescriptor::new(group, id, version, "/repo/x.jar");
    assert!(matches!(
        result,
        Err(ArtifactError::BlankCoordinate { .. })
    ));
}

#[rstest]
#[case("g", "/tmp/escaped", "1", "artifactId")]
#[case("g", "a", "../../1", "version")]
#[case("g", "a\\b", "1", "artifactId")]
#[case("..", "a", "1", "groupId")]
#[case("g", ".", "1", "artifactId")]
#[case("g", "a", "1:2", "version")]
fn rejects_coordinates_that_read_as_paths(
    #[case] group: &str,
    #[case] id: &str,
    #[case] version: &str,
    #[case] expected: &str,
) {
    let result = ArtifactDescriptor::new(group, id, version, "/repo/x.jar");
    assert!(matches!(
        result,
        Err(ArtifactError::InvalidCoordinate { field, .. }) if field == expected
    ));
}

#[test]
fn dotted_group_and_qualified_version_are_accepted() {
    let artifact = artifact("org.apache..commons", "commons-compress", "1.0.0-rc.1");
    assert_eq!(artifact.group_id(), "org.apache..commons");
}

#[test]
fn snapshot_status_follows_version() {
    assert!(artifact("g", "a", "1.0-SNAPSHOT").is_snapshot());
    assert!(!artifact("g", "a", "1.0").is_snapshot());
    assert!(artifact("g", "a", "1.0").with_snapshot(true).is_snapshot());
}

#[rstest]
fn pom_descriptor_shares_coordinates(compress: ArtifactDescriptor) {
    let pom = compress
        .clone()
        .with_classifier("sources")
        .pom_descriptor("/repo/commons-compress-1.8.1.pom");

    assert_eq!(pom.group_id(), compress.group_id());
    assert_eq!(pom.artifact_id(), compress.artifact_id());
    assert_eq!(pom.version(), compress.version());
    assert_eq!(pom.artifact_type(), "pom");
    assert!(pom.classifier().is_none());
}

#[rstest]
fn display_matches_maven_id(compress: ArtifactDescriptor) {
    assert_eq!(
        compress.clone().with_classifier("tests").to_string(),
        "org.apache.commons:commons-compress:jar:tests:1.8.1"
    );
    assert_eq!(
        compress.to_string(),
        "org.apache.commons:commons-compress:jar:1.8.1"
    );
}

#[test]
fn sorts_by_group_then_artifact_then_version() {
    let mut artifacts = vec![
        artifact("org.b", "alpha", "1.0"),
        artifact("org.a", "zeta", "1.0"),
        artifact("org.a", "alpha", "1.10"),
        artifact("org.a", "alpha", "1.9"),
    ];
    artifacts.sort();

    let ids: Vec<String> = artifacts.iter().map(ToString::to_string).collect();
    assert_eq!(
        ids,
        vec![
            "org.a:alpha:jar:1.9",
            "org.a:alpha:jar:1.10",
            "org.a:zeta:jar:1.0",
            "org.b:alpha:jar:1.0",
        ]
    );
}

#[test]
fn classifier_breaks_ties_before_type() {
    let plain = artifact("g", "a", "1.0");
    let tests = plain.clone().with_classifier("tests");
    let natives = plain.clone().with_classifier("natives");
    let zip = plain.clone().with_type("zip");

    let mut artifacts = vec![plain.clone(), zip.clone(), tests.clone(), natives.clone()];
    artifacts.sort();

    assert_eq!(artifacts, vec![natives, tests, plain, zip]);
}
