//! Resolved HTTP request types

mod header;
mod spec;

pub use header::{CONTENT_TYPE, Header, Headers, JSON_CONTENT_TYPE};
pub use spec::RequestSpec;
