//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! One client (and its connection pool) is shared by every run in a process.

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use sequent_application::ports::{HttpClient, HttpClientError};
use sequent_domain::{
    RunnerSettings,
    request::{Headers, RequestSpec},
    response::ResponseSpec,
};
use url::Url;

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `HttpClient` port from the
/// application layer. No timeout is applied beyond the transport's own.
pub struct ReqwestHttpClient {
    client: Client,
    max_redirects: usize,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "Sequent/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        Self::from_settings(&RunnerSettings::default())
    }

    /// Creates a client configured from runner settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn from_settings(settings: &RunnerSettings) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(settings.max_redirects))
            .pool_max_idle_per_host(settings.pool_idle_per_host)
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self {
            client,
            max_redirects: settings.max_redirects,
        })
    }

    /// Converts the method text into a reqwest `Method`.
    ///
    /// Any valid method token is accepted, not only the common verbs.
    fn to_reqwest_method(method: &str) -> Result<Method, HttpClientError> {
        let upper = method.trim().to_ascii_uppercase();
        Method::from_bytes(upper.as_bytes())
            .map_err(|_| HttpClientError::InvalidMethod(method.to_string()))
    }

    /// Validates and converts request headers.
    fn to_header_map(headers: &Headers) -> Result<HeaderMap, HttpClientError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for header in headers.iter() {
            let name = HeaderName::from_bytes(header.name.as_bytes()).map_err(|e| {
                HttpClientError::InvalidHeader {
                    name: header.name.clone(),
                    message: e.to_string(),
                }
            })?;
            let value = HeaderValue::from_str(&header.value).map_err(|e| {
                HttpClientError::InvalidHeader {
                    name: header.name.clone(),
                    message: e.to_string(),
                }
            })?;
            map.append(name, value);
        }
        Ok(map)
    }

    /// Collects response headers; repeated names are joined with ", ".
    fn from_header_map(map: &HeaderMap) -> Headers {
        let mut headers = Headers::new();
        for name in map.keys() {
            let value = map
                .get_all(name)
                .iter()
                .map(|v| v.to_str().unwrap_or("<binary>"))
                .collect::<Vec<_>>()
                .join(", ");
            headers.insert(name.as_str(), value);
        }
        headers
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(&self, error: &reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout;
        }

        let host = || {
            error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string()
        };

        if error.is_connect() {
            let message = error_chain(error);
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lower.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects {
                max: self.max_redirects,
            };
        }

        HttpClientError::Other(error_chain(error))
    }
}

/// Renders an error with its sources, since reqwest's top-level message
/// rarely names the root cause.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        let method = Self::to_reqwest_method(&request.method)?;
        let url = Url::parse(&request.url)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {}", request.url)))?;
        let headers = Self::to_header_map(&request.headers)?;

        let start = Instant::now();

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(|e| self.map_error(&e))?;

        let status = response.status().as_u16();
        let headers = Self::from_header_map(response.headers());

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpClientError::Body {
                status,
                message: error_chain(&e),
            })?;

        Ok(ResponseSpec::new(status, headers, &body, start.elapsed()))
    }
}
