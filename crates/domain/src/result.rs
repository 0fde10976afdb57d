//! Per-step results of a suite run.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::response::ResponseBody;

/// Text reported in place of a status code when no response arrived.
pub const NO_RESPONSE: &str = "N/A";

/// Status observed for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedStatus {
    /// The server answered with this code.
    Code(u16),
    /// The request never produced a response.
    NoResponse,
}

impl ObservedStatus {
    /// Returns the status code, if a response arrived.
    #[must_use]
    pub const fn code(self) -> Option<u16> {
        match self {
            Self::Code(code) => Some(code),
            Self::NoResponse => None,
        }
    }
}

impl fmt::Display for ObservedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::NoResponse => f.write_str(NO_RESPONSE),
        }
    }
}

impl Serialize for ObservedStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Code(code) => serializer.serialize_u16(*code),
            Self::NoResponse => serializer.serialize_str(NO_RESPONSE),
        }
    }
}

/// What a step reports as its response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    /// The request failed before a response arrived.
    Error {
        /// Transport failure message.
        error: String,
    },
    /// The response body, parsed or raw.
    Body(ResponseBody),
}

impl ResponsePayload {
    /// Creates an error descriptor.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    /// Returns true if this is an error descriptor.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// What happened to a step's extraction instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    /// The step has no instruction.
    NotRequested,
    /// A value was bound to the variable.
    Bound {
        /// Variable name.
        variable: String,
    },
    /// The query matched nothing; the store is unchanged.
    NoMatch {
        /// Query that was evaluated.
        path: String,
    },
    /// The instruction or query could not be understood.
    Malformed {
        /// Why it was rejected.
        reason: String,
    },
    /// There was no response to extract from.
    NoResponse,
}

impl ExtractionOutcome {
    /// Returns true if a variable was bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        matches!(self, Self::Bound { .. })
    }

    const fn is_not_requested(&self) -> bool {
        matches!(self, Self::NotRequested)
    }
}

/// Result of executing one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Test case label.
    pub description: String,
    /// URL after interpolation.
    pub url: String,
    /// HTTP method as declared.
    pub method: String,
    /// Whether the observed status matched the expected status.
    pub passed: bool,
    /// Wall-clock time of the request in milliseconds.
    pub response_time: u64,
    /// Observed status, or `"N/A"` when there was no response.
    pub status: ObservedStatus,
    /// Header text after interpolation.
    pub headers: Option<String>,
    /// Request body after interpolation.
    pub payload: Option<String>,
    /// Response body or error descriptor.
    pub response: ResponsePayload,
    /// Extraction diagnostics; omitted when the step had no instruction.
    #[serde(skip_serializing_if = "ExtractionOutcome::is_not_requested")]
    pub extraction: ExtractionOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample(status: ObservedStatus, response: ResponsePayload) -> TestResult {
        TestResult {
            description: "Test Case #1".to_string(),
            url: "http://localhost/health".to_string(),
            method: "GET".to_string(),
            passed: false,
            response_time: 12,
            status,
            headers: None,
            payload: None,
            response,
            extraction: ExtractionOutcome::NotRequested,
        }
    }

    #[test]
    fn test_status_sentinel_serialization() {
        assert_eq!(serde_json::to_value(ObservedStatus::Code(404)).ok(), Some(json!(404)));
        assert_eq!(
            serde_json::to_value(ObservedStatus::NoResponse).ok(),
            Some(json!("N/A"))
        );
        assert_eq!(ObservedStatus::NoResponse.code(), None);
        assert_eq!(ObservedStatus::NoResponse.to_string(), "N/A");
        assert_eq!(ObservedStatus::Code(201).to_string(), "201");
    }

    #[test]
    fn test_error_result_shape() {
        let result = sample(
            ObservedStatus::NoResponse,
            ResponsePayload::error("connection refused"),
        );
        let value = serde_json::to_value(&result).ok();

        assert_eq!(
            value,
            Some(json!({
                "description": "Test Case #1",
                "url": "http://localhost/health",
                "method": "GET",
                "passed": false,
                "responseTime": 12,
                "status": "N/A",
                "headers": null,
                "payload": null,
                "response": { "error": "connection refused" }
            }))
        );
    }

    #[test]
    fn test_body_payload_serializes_inline() {
        let result = TestResult {
            extraction: ExtractionOutcome::Bound {
                variable: "token".to_string(),
            },
            ..sample(
                ObservedStatus::Code(200),
                ResponsePayload::Body(ResponseBody::Json(json!({"token": "abc"}))),
            )
        };
        let value = serde_json::to_value(&result).unwrap_or_default();

        assert_eq!(value["response"], json!({"token": "abc"}));
        assert_eq!(value["extraction"], json!({"outcome": "bound", "variable": "token"}));
        assert!(!result.response.is_error());
    }
}
