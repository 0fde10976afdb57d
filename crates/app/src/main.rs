//! Sequent - Main Entry Point
//!
//! Loads the requested suites, runs them concurrently over one shared
//! HTTP client and reports the results. Exit status is 0 when every step
//! passed, 1 when any step failed and 2 when a suite or the settings could
//! not be loaded.

mod cli;
mod output;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use sequent_application::{ApplicationResult, SuiteRunner, ports::SuiteSource};
use sequent_domain::{SuiteRun, TestSuite};
use sequent_infrastructure::{FileSuiteRepository, ReqwestHttpClient, SettingsRepository};
use tokio::task::JoinSet;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands, RunArgs};

const EXIT_FAILED_STEPS: u8 = 1;
const EXIT_FATAL: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let outcome = match cli.command {
        Commands::Run(args) => run(args).await,
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_FAILED_STEPS),
        Err(error) => {
            tracing::error!(%error, "Run aborted");
            eprintln!("error: {error}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        EnvFilter::new,
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Runs every requested suite; returns whether all steps passed.
async fn run(args: RunArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let settings = SettingsRepository::new(args.settings.as_deref())
        .load()
        .await?;
    let settings = args.apply_overrides(settings);
    tracing::debug!(?settings, "Runner settings");

    let client = Arc::new(ReqwestHttpClient::from_settings(&settings)?);
    let repository = FileSuiteRepository::new(&args.suites_dir);

    // All suites are resolved before any request is sent.
    let mut suites = Vec::with_capacity(args.suites.len());
    for name in &args.suites {
        suites.push(resolve(&repository, name).await?);
    }

    let runner = Arc::new(SuiteRunner::new(client));
    let mut tasks = JoinSet::new();
    for (index, suite) in suites.into_iter().enumerate() {
        let runner = Arc::clone(&runner);
        tasks.spawn(async move { (index, runner.run(&suite).await) });
    }

    let mut runs: Vec<(usize, SuiteRun)> = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        runs.push(joined?);
    }
    runs.sort_by_key(|(index, _)| *index);
    let runs: Vec<SuiteRun> = runs.into_iter().map(|(_, run)| run).collect();

    let report = output::render(&runs, args.format)?;
    output::write_report(args.output.as_deref(), &report).await?;

    Ok(runs.iter().all(|run| run.report.all_passed()))
}

/// Loads a suite from an explicit file path, or by name from the repository.
async fn resolve(repository: &FileSuiteRepository, name: &str) -> ApplicationResult<TestSuite> {
    let path = Path::new(name);
    if tokio::fs::metadata(path).await.is_ok_and(|m| m.is_file()) {
        return FileSuiteRepository::load_path(path)
            .await
            .map_err(|e| e.into_suite_error(name));
    }
    repository.load(name).await
}
