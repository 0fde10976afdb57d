//! Suite source port

use std::future::Future;

use sequent_domain::TestSuite;

use crate::ApplicationResult;

/// Port for resolving a suite by name.
///
/// This is the storage collaborator of a run: the engine never persists
/// suites, it only asks for one right before executing it.
pub trait SuiteSource: Send + Sync {
    /// Loads the named suite.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::SuiteNotFound` if no such suite exists, or
    /// another error if it exists but cannot be read.
    fn load(&self, name: &str) -> impl Future<Output = ApplicationResult<TestSuite>> + Send;
}
