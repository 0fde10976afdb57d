//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the run engine and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod http_client;
mod suite_source;

pub use http_client::{HttpClient, HttpClientError};
pub use suite_source::SuiteSource;
