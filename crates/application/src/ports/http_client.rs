//! HTTP Client port

use std::future::Future;

use sequent_domain::{request::RequestSpec, response::ResponseSpec};
use thiserror::Error;

/// Transport-level failures: no usable response was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The method is not a valid HTTP method token.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// A header name or value cannot be sent.
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Why it was rejected.
        message: String,
    },

    /// The host name could not be resolved.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying message.
        message: String,
    },

    /// The remote end refused the connection.
    #[error("Connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// Any other connection failure.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport gave up waiting.
    #[error("Request timed out")]
    Timeout,

    /// The redirect limit was exceeded.
    #[error("Too many redirects (max {max})")]
    TooManyRedirects {
        /// Configured limit.
        max: usize,
    },

    /// The status line arrived but the body could not be read.
    #[error("Failed to read response body (status {status}): {message}")]
    Body {
        /// Status code the server sent.
        status: u16,
        /// Underlying message.
        message: String,
    },

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// Implementations perform exactly one attempt per call and must be safe
/// to share between concurrent runs.
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// Any status code, including 4xx and 5xx, is a successful response.
    ///
    /// # Errors
    ///
    /// Returns an error if no complete response was received.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send;
}
