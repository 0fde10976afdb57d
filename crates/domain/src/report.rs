//! Aggregate views over a completed run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::result::TestResult;

/// Summary figures for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Number of executed steps.
    pub total_tests: usize,
    /// Steps whose status matched.
    pub passed: usize,
    /// Steps that did not pass, including transport failures.
    pub failed: usize,
    /// Mean response time over every step, in milliseconds.
    pub average_response_time: f64,
}

impl RunReport {
    /// Computes the report for an ordered result list.
    ///
    /// An empty list reports an average of zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_results(results: &[TestResult]) -> Self {
        let total_tests = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let total_time: u64 = results.iter().map(|r| r.response_time).sum();
        let average_response_time = if total_tests == 0 {
            0.0
        } else {
            total_time as f64 / total_tests as f64
        };

        Self {
            total_tests,
            passed,
            failed: total_tests - passed,
            average_response_time,
        }
    }

    /// Returns true if every step passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteRun {
    /// Identifier of this run.
    pub id: Uuid,
    /// Name of the suite that was run.
    pub suite: String,
    /// When the first step was dispatched.
    pub started_at: DateTime<Utc>,
    /// Results in execution order.
    pub results: Vec<TestResult>,
    /// Summary over `results`.
    pub report: RunReport,
}

impl SuiteRun {
    /// Assembles a run, computing its report.
    #[must_use]
    pub fn new(
        id: Uuid,
        suite: impl Into<String>,
        started_at: DateTime<Utc>,
        results: Vec<TestResult>,
    ) -> Self {
        let report = RunReport::from_results(&results);
        Self {
            id,
            suite: suite.into(),
            started_at,
            results,
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{ExtractionOutcome, ObservedStatus, ResponsePayload};
    use pretty_assertions::assert_eq;

    fn result(passed: bool, response_time: u64) -> TestResult {
        TestResult {
            description: String::new(),
            url: String::new(),
            method: "GET".to_string(),
            passed,
            response_time,
            status: if passed {
                ObservedStatus::Code(200)
            } else {
                ObservedStatus::NoResponse
            },
            headers: None,
            payload: None,
            response: ResponsePayload::error("x"),
            extraction: ExtractionOutcome::NotRequested,
        }
    }

    #[test]
    fn test_report_counts_and_average() {
        let report = RunReport::from_results(&[result(true, 10), result(false, 20), result(true, 30)]);

        assert_eq!(report.total_tests, 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert!((report.average_response_time - 20.0).abs() < f64::EPSILON);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_empty_report() {
        let report = RunReport::from_results(&[]);

        assert_eq!(report.total_tests, 0);
        assert!(report.average_response_time.abs() < f64::EPSILON);
        assert!(report.all_passed());
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = RunReport::from_results(&[result(true, 4)]);
        let value = serde_json::to_value(&report).unwrap_or_default();

        assert_eq!(value["totalTests"], 1);
        assert_eq!(value["averageResponseTime"], 4.0);
    }
}
