//! Request Executor
//!
//! Sends one resolved request and turns whatever happens into data.

use std::sync::Arc;
use std::time::Instant;

use sequent_domain::{
    ObservedStatus, ResponsePayload, request::RequestSpec, response::ResponseSpec,
};
use tracing::{debug, warn};

use crate::ports::{HttpClient, HttpClientError};

/// What came back from one request attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The server answered (any status code).
    Responded(ResponseSpec),
    /// No complete response was received.
    TransportFailed(HttpClientError),
}

impl StepOutcome {
    /// Status to report for this outcome.
    ///
    /// A body that failed to read still reports the status the server sent.
    #[must_use]
    pub const fn status(&self) -> ObservedStatus {
        match self {
            Self::Responded(response) => ObservedStatus::Code(response.status),
            Self::TransportFailed(HttpClientError::Body { status, .. }) => {
                ObservedStatus::Code(*status)
            }
            Self::TransportFailed(_) => ObservedStatus::NoResponse,
        }
    }

    /// Returns the response, if one arrived.
    #[must_use]
    pub const fn response(&self) -> Option<&ResponseSpec> {
        match self {
            Self::Responded(response) => Some(response),
            Self::TransportFailed(_) => None,
        }
    }

    /// Converts the outcome into the payload shown in results.
    #[must_use]
    pub fn into_payload(self) -> ResponsePayload {
        match self {
            Self::Responded(response) => ResponsePayload::Body(response.body),
            Self::TransportFailed(error) => ResponsePayload::error(error.to_string()),
        }
    }
}

/// One timed request attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedRequest {
    /// Wall-clock time from dispatch until the outcome was known, in ms.
    pub elapsed_ms: u64,
    /// The outcome.
    pub outcome: StepOutcome,
}

/// Executes requests through the `HttpClient` port.
///
/// Exactly one attempt is made per call. Transport errors are returned as
/// [`StepOutcome::TransportFailed`] rather than as `Err`, so a caller driving
/// a sequence of steps never has to unwind.
///
/// # Example
///
/// ```ignore
/// let executor = RequestExecutor::new(Arc::new(ReqwestHttpClient::new()?));
/// let executed = executor.execute(&RequestSpec::new("GET", "http://localhost/health")).await;
/// assert!(executed.outcome.response().is_some());
/// ```
pub struct RequestExecutor<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> RequestExecutor<C> {
    /// Creates an executor over the given client.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Sends the request and times it.
    pub async fn execute(&self, request: &RequestSpec) -> ExecutedRequest {
        let start = Instant::now();
        let result = self.client.execute(request).await;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let outcome = match result {
            Ok(response) => {
                debug!(status = response.status, elapsed_ms, "Received response");
                StepOutcome::Responded(response)
            }
            Err(error) => {
                warn!(method = %request.method, url = %request.url, %error, "Request failed");
                StepOutcome::TransportFailed(error)
            }
        };

        ExecutedRequest {
            elapsed_ms,
            outcome,
        }
    }
}

impl<C: HttpClient> Clone for RequestExecutor<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}
