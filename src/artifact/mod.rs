//! Artifact coordinates, ordering and on-disk naming.
//!
//! # Sub-modules
//!
//! - [`descriptor`] - Resolved dependency descriptor (`ArtifactDescriptor`).
//! - [`error`] - Coordinate validation errors.
//! - [`layout`] - Repository and flat destination naming.
//! - [`pom`] - Companion POM resolution (`PomResolver`).
//! - [`version`] - Maven version ordering and snapshot detection.

pub mod descriptor;
pub mod error;
pub mod layout;
pub mod pom;
pub mod version;

pub use descriptor::ArtifactDescriptor;
pub use layout::Layout;
pub use pom::{PomResolver, SiblingPomResolver};
