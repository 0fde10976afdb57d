//! Header text normalization.
//!
//! Test cases carry headers as free text: either a JSON object
//! (`{"Accept": "application/json"}`) or one `Key: Value` pair per line.
//! Parsing never fails; anything unusable is dropped.

use sequent_domain::request::{CONTENT_TYPE, Headers, JSON_CONTENT_TYPE};

/// Which form the header text was read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    /// No header text, or only whitespace.
    Empty,
    /// A JSON object.
    Json,
    /// `Key: Value` lines.
    Lines,
}

/// Headers read from a test case, before the content-type policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeaders {
    /// The parsed headers.
    pub headers: Headers,
    /// The form the text was read as.
    pub format: HeaderFormat,
}

/// Parses header text into a header map.
///
/// JSON object values that are not strings are rendered as compact JSON;
/// `null` values are dropped. In the line form each line is split on its
/// first colon and both sides are trimmed; lines without a colon or with an
/// empty name are skipped.
#[must_use]
pub fn parse_headers(text: Option<&str>) -> ParsedHeaders {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return ParsedHeaders {
            headers: Headers::new(),
            format: HeaderFormat::Empty,
        };
    };

    if let Ok(object) = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(text) {
        let mut headers = Headers::new();
        for (name, value) in object {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => headers.insert(name, s),
                other => headers.insert(name, other.to_string()),
            }
        }
        return ParsedHeaders {
            headers,
            format: HeaderFormat::Json,
        };
    }

    let mut headers = Headers::new();
    for line in text.lines() {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        headers.insert(name, value.trim());
    }

    ParsedHeaders {
        headers,
        format: HeaderFormat::Lines,
    }
}

/// Adds `Content-Type: application/json` when a body is sent without one.
///
/// Returns true if the header was added.
pub fn apply_default_content_type(headers: &mut Headers, has_body: bool) -> bool {
    if has_body && !headers.contains(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, JSON_CONTENT_TYPE);
        true
    } else {
        false
    }
}

/// Parses header text and applies the default content-type policy.
#[must_use]
pub fn normalize_headers(text: Option<&str>, body: Option<&str>) -> Headers {
    let mut headers = parse_headers(text).headers;
    apply_default_content_type(&mut headers, body.is_some_and(|b| !b.is_empty()));
    headers
}
