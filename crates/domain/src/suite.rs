//! Test suite and test case definitions.
//!
//! A suite is the ordered input of one run. Test cases carry template
//! strings that are resolved against the run's variable store right before
//! each step executes.

use serde::{Deserialize, Serialize};

/// One step of a suite: a request template plus its expectations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseSpec {
    /// Execution order key; lower runs first.
    pub sequence: i64,
    /// Optional human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Target URL template.
    pub url: String,
    /// HTTP method.
    pub method: String,
    /// Header template, either a JSON object or `Key: Value` lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,
    /// Request body template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Status code the response must have for the step to pass.
    #[serde(with = "status_code")]
    pub expected_status: u16,
    /// Optional extraction instruction document (JSON text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

impl TestCaseSpec {
    /// Creates a test case with no headers, body, or instruction.
    #[must_use]
    pub fn new(
        sequence: i64,
        method: impl Into<String>,
        url: impl Into<String>,
        expected_status: u16,
    ) -> Self {
        Self {
            sequence,
            description: None,
            url: url.into(),
            method: method.into(),
            headers: None,
            body: None,
            expected_status,
            instruction: None,
        }
    }

    /// Sets the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the header template (builder pattern).
    #[must_use]
    pub fn with_headers(mut self, headers: impl Into<String>) -> Self {
        self.headers = Some(headers.into());
        self
    }

    /// Sets the body template (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the extraction instruction (builder pattern).
    #[must_use]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    /// Label used in results: the description, or `Test Case #<sequence>`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description.to_string(),
            _ => format!("Test Case #{}", self.sequence),
        }
    }
}

/// A named, ordered collection of test cases sharing one variable scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    /// Suite name.
    #[serde(default)]
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Test cases in storage order (not necessarily execution order).
    #[serde(default)]
    pub test_cases: Vec<TestCaseSpec>,
}

impl TestSuite {
    /// Creates an empty suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            test_cases: Vec::new(),
        }
    }

    /// Adds a test case (builder pattern).
    #[must_use]
    pub fn with_case(mut self, case: TestCaseSpec) -> Self {
        self.test_cases.push(case);
        self
    }

    /// Returns the test cases in execution order.
    ///
    /// The sort is stable, so cases sharing a sequence number keep their
    /// storage order.
    #[must_use]
    pub fn ordered_cases(&self) -> Vec<TestCaseSpec> {
        let mut cases = self.test_cases.clone();
        cases.sort_by_key(|case| case.sequence);
        cases
    }

    /// Returns sequence numbers that appear more than once, ascending.
    #[must_use]
    pub fn duplicate_sequences(&self) -> Vec<i64> {
        let mut sequences: Vec<i64> = self.test_cases.iter().map(|c| c.sequence).collect();
        sequences.sort_unstable();
        let mut duplicates: Vec<i64> = sequences
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .map(|pair| pair[0])
            .collect();
        duplicates.dedup();
        duplicates
    }

    /// Number of test cases.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::len is not const in stable
    pub fn len(&self) -> usize {
        self.test_cases.len()
    }

    /// Returns true if the suite has no test cases.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::is_empty is not const in stable
    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }
}

/// Accepts the expected status as a JSON number or a numeric string.
mod status_code {
    use serde::{Deserialize, Deserializer, Serializer, de};

    use crate::error::DomainError;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(status: &u16, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(*status)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u16, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Raw::deserialize(deserializer)?;
        let parsed = match &raw {
            Raw::Number(n) => u16::try_from(*n).ok(),
            Raw::Text(s) => s.trim().parse::<u16>().ok(),
        };
        parsed.ok_or_else(|| {
            let shown = match raw {
                Raw::Number(n) => n.to_string(),
                Raw::Text(s) => s,
            };
            de::Error::custom(DomainError::InvalidExpectedStatus(shown))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "sequence": 2,
            "description": "login",
            "url": "http://localhost/login",
            "method": "POST",
            "headers": "Accept: application/json",
            "body": "{\"user\":\"a\"}",
            "expectedStatus": 200,
            "instruction": "{\"extract\":{\"path\":\"$.token\",\"as\":\"token\"}}"
        }"#;
        let case: TestCaseSpec = serde_json::from_str(json).unwrap();

        assert_eq!(case.sequence, 2);
        assert_eq!(case.expected_status, 200);
        assert_eq!(case.headers.as_deref(), Some("Accept: application/json"));
        assert!(case.instruction.is_some());
    }

    #[test]
    fn test_expected_status_as_string() {
        let json = r#"{"sequence":1,"url":"u","method":"GET","expectedStatus":" 201 "}"#;
        let case: TestCaseSpec = serde_json::from_str(json).unwrap();
        assert_eq!(case.expected_status, 201);
    }

    #[test]
    fn test_expected_status_invalid() {
        let json = r#"{"sequence":1,"url":"u","method":"GET","expectedStatus":"ok"}"#;
        let err = serde_json::from_str::<TestCaseSpec>(json).unwrap_err();
        assert!(err.to_string().contains("invalid expected status"));

        let json = r#"{"sequence":1,"url":"u","method":"GET","expectedStatus":70000}"#;
        assert!(serde_json::from_str::<TestCaseSpec>(json).is_err());
    }

    #[test]
    fn test_label_defaults_to_sequence() {
        let case = TestCaseSpec::new(7, "GET", "http://localhost", 200);
        assert_eq!(case.label(), "Test Case #7");

        let case = case.with_description("health");
        assert_eq!(case.label(), "health");
    }

    #[test]
    fn test_ordered_cases_sorts_by_sequence_stably() {
        let suite = TestSuite::new("order")
            .with_case(TestCaseSpec::new(3, "GET", "c", 200))
            .with_case(TestCaseSpec::new(1, "GET", "a", 200).with_description("first"))
            .with_case(TestCaseSpec::new(2, "GET", "b", 200))
            .with_case(TestCaseSpec::new(1, "GET", "a2", 200).with_description("second"));

        let urls: Vec<_> = suite.ordered_cases().into_iter().map(|c| c.url).collect();
        assert_eq!(urls, vec!["a", "a2", "b", "c"]);
    }

    #[test]
    fn test_duplicate_sequences() {
        let suite = TestSuite::new("dups")
            .with_case(TestCaseSpec::new(1, "GET", "a", 200))
            .with_case(TestCaseSpec::new(2, "GET", "b", 200))
            .with_case(TestCaseSpec::new(1, "GET", "c", 200))
            .with_case(TestCaseSpec::new(1, "GET", "d", 200));

        assert_eq!(suite.duplicate_sequences(), vec![1]);
        assert_eq!(suite.len(), 4);
    }
}
