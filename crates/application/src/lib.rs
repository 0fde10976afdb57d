//! Sequent Application - Run engine and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the HTTP transport and suite storage)
//! - The step pipeline: interpolation, header normalization, execution,
//!   verdict and extraction
//! - The suite runner that drives a whole suite
//! - Application-level error handling

pub mod error;
pub mod executor;
pub mod extract;
pub mod headers;
pub mod ports;
pub mod run_suite;
pub mod template;
pub mod verdict;

pub use error::{ApplicationError, ApplicationResult};
pub use executor::{ExecutedRequest, RequestExecutor, StepOutcome};
pub use extract::{JsonPath, JsonPathError, extract_value};
pub use headers::{HeaderFormat, ParsedHeaders, normalize_headers, parse_headers};
pub use ports::{HttpClient, HttpClientError, SuiteSource};
pub use run_suite::SuiteRunner;
pub use template::{Interpolation, TemplateInterpolator};
pub use verdict::evaluate;
