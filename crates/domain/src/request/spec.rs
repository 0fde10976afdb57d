//! Resolved request specification

use serde::{Deserialize, Serialize};

use super::Headers;

/// A fully resolved HTTP request, ready to hand to a transport.
///
/// All templates have been interpolated and the header text has been
/// normalized by the time one of these exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method as declared by the test case (e.g. `GET`, `post`).
    pub method: String,
    /// Target URL.
    pub url: String,
    /// Normalized request headers.
    #[serde(default)]
    pub headers: Headers,
    /// Request body; `None` when the test case declares no body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RequestSpec {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Sets the headers (builder pattern).
    #[must_use]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the body (builder pattern). Empty bodies are dropped.
    #[must_use]
    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body.filter(|b| !b.is_empty());
        self
    }

    /// Returns the method normalized to upper case.
    #[must_use]
    pub fn method_upper(&self) -> String {
        self.method.trim().to_ascii_uppercase()
    }
}
