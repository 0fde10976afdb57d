//! Report rendering.

use std::fmt::Write as _;
use std::path::Path;

use sequent_domain::{ResponsePayload, SuiteRun};
use sequent_infrastructure::{SerializationError, to_json_stable};

use crate::cli::OutputFormat;

/// Renders completed runs in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(runs: &[SuiteRun], format: OutputFormat) -> Result<String, SerializationError> {
    match format {
        OutputFormat::Json => to_json_stable(&runs),
        OutputFormat::Text => Ok(render_text(runs)),
    }
}

/// Plain text summary, one block per run.
#[must_use]
pub fn render_text(runs: &[SuiteRun]) -> String {
    let mut out = String::new();
    for run in runs {
        let _ = writeln!(out, "{} (run {})", run.suite, run.id);
        for result in &run.results {
            let verdict = if result.passed { "PASS" } else { "FAIL" };
            let _ = writeln!(
                out,
                "  {verdict}  {}  {} {}  {}  {}ms",
                result.description,
                result.method.to_uppercase(),
                result.url,
                result.status,
                result.response_time
            );
            if let ResponsePayload::Error { error } = &result.response {
                let _ = writeln!(out, "        error: {error}");
            }
        }
        let report = &run.report;
        let _ = writeln!(
            out,
            "  {} tests, {} passed, {} failed, avg {:.2} ms",
            report.total_tests, report.passed, report.failed, report.average_response_time
        );
    }
    out
}

/// Writes the report to `path`, or to stdout when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub async fn write_report(path: Option<&Path>, report: &str) -> std::io::Result<()> {
    match path {
        Some(path) => tokio::fs::write(path, report).await,
        None => {
            print!("{report}");
            Ok(())
        }
    }
}
