//! HTTP header types

use serde::{Deserialize, Serialize};

/// Canonical name of the content type header.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Content type injected when a request carries a body without one.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single HTTP header with name and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// The header name as written by the suite author.
    pub name: String,
    /// The header value.
    pub value: String,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An insertion-ordered header map.
///
/// Keys are compared exactly on insert, so `Accept` and `accept` are two
/// entries, the same way a JSON object would carry them. Lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    items: Vec<Header>,
}

impl Headers {
    /// Creates an empty header map.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inserts a header, replacing the value of an entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.items.iter_mut().find(|h| h.name == name) {
            existing.value = value;
        } else {
            self.items.push(Header { name, value });
        }
    }

    /// Returns the first value whose name matches case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Returns true if a header with this name exists, ignoring case.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns an iterator over the headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.items.iter()
    }

    /// Returns the number of headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::len is not const in stable
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::is_empty is not const in stable
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Converts the headers into a JSON object keyed by lower-cased name.
    ///
    /// This is the document header extraction queries run against.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .items
            .iter()
            .map(|h| (h.name.to_lowercase(), serde_json::Value::String(h.value.clone())))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl FromIterator<Header> for Headers {
    fn from_iter<T: IntoIterator<Item = Header>>(iter: T) -> Self {
        let mut headers = Self::new();
        for header in iter {
            headers.insert(header.name, header.value);
        }
        headers
    }
}
