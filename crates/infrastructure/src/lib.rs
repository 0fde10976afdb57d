//! Sequent Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: the reqwest-backed HTTP client
//! and the file-backed suite and settings repositories.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::ReqwestHttpClient;
pub use persistence::{FileSuiteRepository, RepositoryError, SUITE_EXTENSIONS, SettingsRepository};
pub use serialization::{SerializationError, from_json, from_json_bytes, from_yaml, to_json_stable};
