//! Value extraction
//!
//! Binds values selected from a response into the run's variable store so
//! that later steps can interpolate them.

pub mod extractor;
pub mod jsonpath;

pub use extractor::extract_value;
pub use jsonpath::{JsonPath, JsonPathError};
