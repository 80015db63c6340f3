//! Temporary local Maven repository and NAR staging tree.

use camino::{Utf8Path, Utf8PathBuf};
use nar_mvn::ArtifactDescriptor;
use std::fs;
use tempfile::TempDir;

/// A scratch project: `m2/` local repository, `export/` output repository
/// and `target/classes/` build output.
pub struct LocalRepository {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl LocalRepository {
    /// Create an empty scratch project.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir creation succeeds");
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("utf-8 temp dir");
        Self { _dir: dir, root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn output_repo(&self) -> Utf8PathBuf {
        self.root.join("export")
    }

    pub fn classes_dir(&self) -> Utf8PathBuf {
        self.root.join("target/classes")
    }

    /// Install `group:id:version` with the given type, plus its POM.
    pub fn install(&self, group: &str, id: &str, version: &str, artifact_type: &str) -> ArtifactDescriptor {
        let dir = self
            .root
            .join("m2")
            .join(group.replace('.', "/"))
            .join(id)
            .join(version);
        fs::create_dir_all(&dir).expect("create repository dir");
        let file = dir.join(format!("{id}-{version}.{artifact_type}"));
        fs::write(&file, format!("{group}:{id}:{version}:{artifact_type}")).expect("write artifact");
        fs::write(dir.join(format!("{id}-{version}.pom")), "<project/>").expect("write pom");
        ArtifactDescriptor::new(group, id, version, file)
            .expect("valid coordinates")
            .with_type(artifact_type)
    }

    /// Every file below `dir`, relative to it, sorted.
    pub fn files_under(&self, dir: &Utf8Path) -> Vec<String> {
        let mut found = Vec::new();
        collect(dir, dir, &mut found);
        found.sort();
        found
    }
}

fn collect(base: &Utf8Path, dir: &Utf8Path, found: &mut Vec<String>) {
    let Ok(entries) = dir.read_dir_utf8() else {
        return;
    };
    for entry in entries {
        let entry = entry.expect("dir entry");
        let path = entry.path();
        if path.is_dir() {
            collect(base, path, found);
        } else {
            let relative = path.strip_prefix(base).expect("path below base");
            found.push(relative.as_str().replace('\\', "/"));
        }
    }
}
