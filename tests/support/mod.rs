//! Shared fixtures for the integration suites.
//!
//! `LocalRepository` lays artifacts out the way a local Maven repository
//! does, so the exporter sees the same file and POM arrangement it meets in
//! a real build.
pub mod repository;
