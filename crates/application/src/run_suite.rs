//! Run Suite Use Case
//!
//! Drives an ordered suite front to back: for every test case it
//! interpolates the templates, normalizes headers, sends the request,
//! decides the verdict and applies the extraction instruction, then moves
//! on. A failing step never stops the run.

use std::sync::Arc;

use chrono::Utc;
use sequent_domain::{
    ExtractionOutcome, InstructionParse, SuiteRun, TestCaseSpec, TestResult, TestSuite,
    VariableStore, request::RequestSpec,
};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::ApplicationResult;
use crate::executor::RequestExecutor;
use crate::extract::extract_value;
use crate::headers::normalize_headers;
use crate::ports::{HttpClient, SuiteSource};
use crate::template::TemplateInterpolator;
use crate::verdict::evaluate;

/// Use case for running test suites.
///
/// A runner holds no per-run state, so one instance (and the connection
/// pool behind its client) can serve any number of concurrent runs. Each
/// run owns its own [`VariableStore`].
///
/// # Example
///
/// ```ignore
/// let runner = SuiteRunner::new(Arc::new(ReqwestHttpClient::new()?));
/// let run = runner.run(&suite).await;
/// println!("{} of {} passed", run.report.passed, run.report.total_tests);
/// ```
pub struct SuiteRunner<C: HttpClient> {
    executor: RequestExecutor<C>,
}

impl<C: HttpClient> SuiteRunner<C> {
    /// Creates a runner over the given HTTP client.
    pub const fn new(client: Arc<C>) -> Self {
        Self {
            executor: RequestExecutor::new(client),
        }
    }

    /// Resolves a suite by name and runs it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the suite cannot be resolved; in that case
    /// no step is executed.
    pub async fn run_named<S: SuiteSource>(
        &self,
        source: &S,
        name: &str,
    ) -> ApplicationResult<SuiteRun> {
        let suite = source.load(name).await?;
        Ok(self.run(&suite).await)
    }

    /// Runs a suite to completion.
    ///
    /// Test cases execute in ascending `sequence` order, one at a time.
    /// The result list always has one entry per test case.
    pub async fn run(&self, suite: &TestSuite) -> SuiteRun {
        let id = Uuid::now_v7();
        let span = info_span!("suite_run", run_id = %id, suite = %suite.name);

        async {
            let duplicates = suite.duplicate_sequences();
            if !duplicates.is_empty() {
                warn!(?duplicates, "Duplicate sequence numbers; ties run in storage order");
            }

            let cases = suite.ordered_cases();
            info!(steps = cases.len(), "Starting suite run");

            let started_at = Utc::now();
            let mut store = VariableStore::new();
            let mut results = Vec::with_capacity(cases.len());

            for (index, case) in cases.iter().enumerate() {
                let result = self
                    .run_step(case, &mut store)
                    .instrument(info_span!("step", index, sequence = case.sequence))
                    .await;
                results.push(result);
            }

            let run = SuiteRun::new(id, suite.name.clone(), started_at, results);
            info!(
                total = run.report.total_tests,
                passed = run.report.passed,
                failed = run.report.failed,
                average_ms = run.report.average_response_time,
                "Suite run completed"
            );
            run
        }
        .instrument(span)
        .await
    }

    /// Executes one step against the store as it stands when the step starts.
    async fn run_step(&self, case: &TestCaseSpec, store: &mut VariableStore) -> TestResult {
        let interpolator = TemplateInterpolator::new(store);
        let url = interpolator.interpolate(&case.url);
        let headers = interpolator.interpolate_opt(case.headers.as_deref());
        let body = interpolator.interpolate_opt(case.body.as_deref());

        let unresolved: Vec<&str> = [Some(&url), headers.as_ref(), body.as_ref()]
            .into_iter()
            .flatten()
            .flat_map(|i| i.unresolved.iter().map(String::as_str))
            .collect();
        if !unresolved.is_empty() {
            debug!(?unresolved, "Unresolved template variables");
        }

        let url = url.resolved;
        let headers = headers.map(|i| i.resolved);
        let body = body.map(|i| i.resolved);

        let request = RequestSpec::new(case.method.clone(), url.clone())
            .with_headers(normalize_headers(headers.as_deref(), body.as_deref()))
            .with_body(body.clone());

        debug!(method = %request.method, url = %request.url, "Dispatching request");
        let executed = self.executor.execute(&request).await;

        let status = executed.outcome.status();
        // A response whose body could not be read never passes.
        let passed =
            executed.outcome.response().is_some() && evaluate(case.expected_status, status);

        let instruction = InstructionParse::parse(case.instruction.as_deref());
        let extraction = match (executed.outcome.response(), &instruction) {
            (_, InstructionParse::Absent) => ExtractionOutcome::NotRequested,
            (Some(response), _) => extract_value(&instruction, response, store),
            (None, _) => ExtractionOutcome::NoResponse,
        };

        TestResult {
            description: case.label(),
            url,
            method: case.method.clone(),
            passed,
            response_time: executed.elapsed_ms,
            status,
            headers,
            payload: body,
            response: executed.outcome.into_payload(),
            extraction,
        }
    }
}
