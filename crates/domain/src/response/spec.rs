//! Response specification type

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::request::Headers;

/// Body of a response, parsed as JSON when possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// The body text was valid JSON.
    Json(serde_json::Value),
    /// The body text was not JSON and is kept verbatim.
    Text(String),
}

impl ResponseBody {
    /// Parses body text, falling back to raw text when it is not JSON.
    #[must_use]
    pub fn parse(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }

    /// Returns the body as a JSON value; raw text becomes a JSON string.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Json(value) => value.clone(),
            Self::Text(text) => serde_json::Value::String(text.clone()),
        }
    }

    /// Returns true if the body parsed as JSON.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

impl Default for ResponseBody {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// HTTP response captured from a single request attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSpec {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: ResponseBody,
    /// Time from dispatch until the body was fully read
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a response from raw body bytes.
    ///
    /// Bytes that are not UTF-8 are decoded lossily before the JSON attempt.
    #[must_use]
    pub fn new(status: u16, headers: Headers, body: &[u8], duration: Duration) -> Self {
        let text = String::from_utf8_lossy(body).into_owned();
        Self {
            status,
            headers,
            body: ResponseBody::parse(text),
            duration,
        }
    }
}

impl Default for ResponseSpec {
    fn default() -> Self {
        Self {
            status: 0,
            headers: Headers::new(),
            body: ResponseBody::default(),
            duration: Duration::ZERO,
        }
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
