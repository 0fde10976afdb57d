//! File system based suite repository.
//!
//! A suite lives in one file, `<dir>/<name>.json`, `.yaml` or `.yml`. The
//! file holds either a bare array of test cases or a suite document:
//!
//! ```json
//! {
//!   "name": "login-flow",
//!   "description": "Logs in and reads the profile",
//!   "testCases": [
//!     { "sequence": 1, "url": "http://localhost:8080/login", "method": "POST", "expectedStatus": 200 }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use sequent_application::{ApplicationResult, ports::SuiteSource};
use sequent_domain::{TestCaseSpec, TestSuite};
use serde_json::Value;
use tokio::fs;
use tracing::debug;

use super::RepositoryError;
use crate::serialization::{SerializationError, from_json, from_yaml};

/// File extensions tried, in order, when resolving a suite name.
pub const SUITE_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Suite source reading suite files from a directory.
#[derive(Debug, Clone)]
pub struct FileSuiteRepository {
    root: PathBuf,
}

impl FileSuiteRepository {
    /// Creates a repository rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory suites are resolved in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate files for a suite name.
    ///
    /// A name that already carries a suite extension is taken as a path
    /// (relative to the root unless absolute); otherwise each extension is
    /// tried in turn.
    #[must_use]
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        if has_suite_extension(Path::new(name)) {
            return vec![self.root.join(name)];
        }
        SUITE_EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{name}.{ext}")))
            .collect()
    }

    /// Loads the first existing candidate for `name`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no candidate exists, or a
    /// read or decode error for the file that was found.
    pub async fn find(&self, name: &str) -> Result<TestSuite, RepositoryError> {
        for path in self.candidates(name) {
            match Self::load_path(&path).await {
                Err(RepositoryError::NotFound(_)) => {}
                Ok(mut suite) => {
                    if suite.name.is_empty() {
                        suite.name = suite_name(&path, name);
                    }
                    return Ok(suite);
                }
                Err(e) => return Err(e),
            }
        }
        Err(RepositoryError::NotFound(name.to_string()))
    }

    /// Loads a suite file.
    ///
    /// The format is chosen by extension: `.yaml`/`.yml` as YAML, anything
    /// else as JSON. A bare array is wrapped in a suite named after the
    /// file stem.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub async fn load_path(path: &Path) -> Result<TestSuite, RepositoryError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| RepositoryError::from_io(path.to_path_buf(), e))?;
        debug!(path = %path.display(), "Read suite file");

        let document = decode(path, &content).map_err(|source| RepositoryError::Serialization {
            path: path.to_path_buf(),
            source,
        })?;

        if document.is_array() {
            let test_cases: Vec<TestCaseSpec> = serde_json::from_value(document)
                .map_err(|e| RepositoryError::Serialization {
                    path: path.to_path_buf(),
                    source: SerializationError::Deserialize(e),
                })?;
            return Ok(TestSuite {
                name: suite_name(path, ""),
                description: None,
                test_cases,
            });
        }

        let mut suite: TestSuite =
            serde_json::from_value(document).map_err(|e| RepositoryError::Serialization {
                path: path.to_path_buf(),
                source: SerializationError::Deserialize(e),
            })?;
        if suite.name.is_empty() {
            suite.name = suite_name(path, "");
        }
        Ok(suite)
    }
}

impl SuiteSource for FileSuiteRepository {
    async fn load(&self, name: &str) -> ApplicationResult<TestSuite> {
        self.find(name).await.map_err(|e| e.into_suite_error(name))
    }
}

/// Parses the raw document; both formats go through a JSON value so that
/// decode errors name the offending field the same way.
fn decode(path: &Path, content: &str) -> Result<Value, SerializationError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => from_yaml(content),
        _ => from_json(content),
    }
}

fn has_suite_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SUITE_EXTENSIONS.contains(&e))
}

fn suite_name(path: &Path, fallback: &str) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map_or_else(|| fallback.to_string(), ToString::to_string)
}
