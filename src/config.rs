//! Export configuration and packaging settings.
//!
//! [`ExportConfiguration`] holds the options of the manifest export and can
//! be deserialised from TOML, falling back to defaults for omitted keys.
//! [`PackagingSettings`] composes it with the settings inherited from the
//! surrounding packaging step so the whole configuration is resolved once,
//! before any file is touched.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// Name of the manifest file written into the dependencies directory.
pub const MANIFEST_FILE_NAME: &str = "dependencies.mvn";

/// Dependency directory inside a NAR.
pub const BUNDLED_DEPENDENCIES_DIR: &str = "META-INF/bundled-dependencies";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {path}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be parsed.
    #[error("invalid configuration {path}")]
    Parse {
        /// Path of the configuration file, or `<inline>` for strings.
        path: Utf8PathBuf,
        /// The TOML parse error.
        #[source]
        source: toml::de::Error,
    },
}

/// Options controlling manifest generation and export.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfiguration {
    /// Root of the repository-layout directory artifacts are exported to.
    ///
    /// Export is disabled when absent; only the manifest is written.
    pub output_repository_location: Option<Utf8PathBuf>,
    /// List snapshot jars in the manifest in addition to exporting them.
    #[serde(default = "ExportConfiguration::default_include_snapshot_in_file")]
    pub include_snapshot_in_file: bool,
    /// Append to an existing manifest instead of truncating it.
    pub file_append: bool,
}

impl ExportConfiguration {
    const fn default_include_snapshot_in_file() -> bool {
        true
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use nar_mvn::ExportConfiguration;
    ///
    /// let config = ExportConfiguration::from_toml_str("file_append = true\n")
    ///     .expect("valid configuration");
    /// assert!(config.file_append);
    /// assert!(config.include_snapshot_in_file);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: Utf8PathBuf::from("<inline>"),
            source,
        })
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid configuration.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Name of the manifest file.
    #[must_use]
    pub fn manifest_file_name(&self) -> &'static str {
        MANIFEST_FILE_NAME
    }
}

impl Default for ExportConfiguration {
    fn default() -> Self {
        Self {
            output_repository_location: None,
            include_snapshot_in_file: Self::default_include_snapshot_in_file(),
            file_append: false,
        }
    }
}

/// How resolved dependencies reach the archive.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum ArchiveBundlingMode {
    /// Copy every dependency into the archive's dependency directory.
    Embed,
    /// Write a `mvn:` manifest instead and export artifacts externally.
    #[default]
    ManifestOnly,
}

/// Settings for the dependency step of NAR packaging.
///
/// Combines the fields inherited from the general packaging step with the
/// manifest export options.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PackagingSettings {
    /// Directory dependencies are staged into, normally
    /// `<build>/classes/META-INF/bundled-dependencies`.
    pub dependencies_directory: Utf8PathBuf,
    /// Fail when an artifact requested with a classifier was not resolved.
    #[serde(default)]
    pub fail_on_missing_classifier_artifact: bool,
    /// Drop versions from embedded file names.
    #[serde(default)]
    pub strip_version: bool,
    /// Embedding policy.
    #[serde(default)]
    pub bundling: ArchiveBundlingMode,
    /// Manifest export options.
    #[serde(default)]
    pub export: ExportConfiguration,
}

impl PackagingSettings {
    /// Settings for `dependencies_directory` with every other field at its
    /// default.
    #[must_use]
    pub fn new(dependencies_directory: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dependencies_directory: dependencies_directory.into(),
            fail_on_missing_classifier_artifact: false,
            strip_version: false,
            bundling: ArchiveBundlingMode::default(),
            export: ExportConfiguration::default(),
        }
    }

    /// Settings for the conventional dependency directory under
    /// `classes_directory`.
    #[must_use]
    pub fn for_classes_directory(classes_directory: &Utf8Path) -> Self {
        Self::new(classes_directory.join(BUNDLED_DEPENDENCIES_DIR))
    }

    /// Replace the bundling mode.
    #[must_use]
    pub fn with_bundling(mut self, bundling: ArchiveBundlingMode) -> Self {
        self.bundling = bundling;
        self
    }

    /// Replace the export options.
    #[must_use]
    pub fn with_export(mut self, export: ExportConfiguration) -> Self {
        self.export = export;
        self
    }

    /// Path of the manifest file.
    #[must_use]
    pub fn manifest_path(&self) -> Utf8PathBuf {
        self.dependencies_directory.join(MANIFEST_FILE_NAME)
    }
}
