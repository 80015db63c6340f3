//! Maven URI dependency manifests for NAR packaging.
//!
//! Instead of bundling dependency jars inside a NAR's
//! `META-INF/bundled-dependencies` directory, this crate writes a
//! `dependencies.mvn` file listing each runtime dependency as a
//! `mvn:group/artifact/version/type` URI and can export the resolved
//! artifacts, with their POMs, into a Maven repository-layout directory.
//!
//! # Modules
//!
//! - [`artifact`] - Artifact coordinates, ordering and destination naming
//! - [`config`] - Export options and packaging settings
//! - [`error`] - Export error types
//! - [`exporter`] - Manifest generation and artifact export
//! - [`manifest`] - Manifest file writer
//! - [`pipeline`] - Dependency step of NAR packaging
//! - [`stager`] - File copies into a destination tree
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use nar_mvn::{ArtifactDescriptor, ExportConfiguration, export_dependencies};
//!
//! let compress = ArtifactDescriptor::new(
//!     "org.apache.commons",
//!     "commons-compress",
//!     "1.8.1",
//!     "/home/dev/.m2/repository/org/apache/commons/commons-compress/1.8.1/commons-compress-1.8.1.jar",
//! )?;
//! let report = export_dependencies(
//!     [&compress],
//!     &ExportConfiguration::default(),
//!     Utf8Path::new("target/classes/META-INF/bundled-dependencies"),
//! )?;
//! assert_eq!(
//!     report.manifest_lines,
//!     vec!["mvn:org.apache.commons/commons-compress/1.8.1/jar"]
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod artifact;
pub mod config;
pub mod error;
pub mod exporter;
pub mod manifest;
pub mod pipeline;
pub mod stager;

pub use artifact::ArtifactDescriptor;
pub use config::{ArchiveBundlingMode, ExportConfiguration, MANIFEST_FILE_NAME, PackagingSettings};
pub use error::{ExportError, ExportErrorKind};
pub use exporter::{ExportReport, ManifestExporter, export_dependencies};
pub use pipeline::{DependencyPackager, DependencySet, PackagingError, PackagingReport};
