//! Sequent Domain - Core types of a suite run
//!
//! This crate defines the data model for executing ordered HTTP test
//! suites: the test case input, the run-scoped variable store, per-step
//! results and the aggregate report. All types here are pure Rust with no
//! I/O dependencies.

pub mod error;
pub mod instruction;
pub mod report;
pub mod request;
pub mod response;
pub mod result;
pub mod settings;
pub mod suite;
pub mod variables;

pub use error::DomainError;
pub use instruction::{ExtractSource, ExtractionInstruction, InstructionParse};
pub use report::{RunReport, SuiteRun};
pub use result::{ExtractionOutcome, NO_RESPONSE, ObservedStatus, ResponsePayload, TestResult};
pub use settings::RunnerSettings;
pub use suite::{TestCaseSpec, TestSuite};
pub use variables::VariableStore;
