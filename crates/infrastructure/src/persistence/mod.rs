//! Persistence implementations for file-based storage.

mod error;
mod settings_repository;
mod suite_repository;

pub use error::RepositoryError;
pub use settings_repository::SettingsRepository;
pub use suite_repository::{FileSuiteRepository, SUITE_EXTENSIONS};
