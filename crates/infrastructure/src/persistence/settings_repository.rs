//! Runner settings persistence.
//!
//! Settings are read from a JSON file named on the command line. Every
//! field is optional; missing fields take their defaults.

use std::path::{Path, PathBuf};

use sequent_domain::RunnerSettings;
use tokio::fs;

use super::RepositoryError;
use crate::serialization::from_json_bytes;

/// Repository for runner settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository reading `path`, or defaults when `None`.
    #[must_use]
    pub fn new(path: Option<impl Into<PathBuf>>) -> Self {
        Self {
            path: path.map(Into::into),
        }
    }

    /// Path settings are read from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads runner settings.
    ///
    /// Returns default settings when no path was given. A path that was
    /// given but does not exist is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub async fn load(&self) -> Result<RunnerSettings, RepositoryError> {
        let Some(path) = &self.path else {
            return Ok(RunnerSettings::default());
        };

        let content = fs::read(path)
            .await
            .map_err(|e| RepositoryError::from_io(path.clone(), e))?;
        from_json_bytes(&content).map_err(|source| RepositoryError::Serialization {
            path: path.clone(),
            source,
        })
    }
}
