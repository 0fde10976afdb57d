//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sequent_domain::RunnerSettings;

/// Sequent - run ordered HTTP test suites
#[derive(Debug, Parser)]
#[command(name = "sequent")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log filter (e.g. `debug`, `sequent_application=trace`); overrides `RUST_LOG`
    #[arg(long, env = "SEQUENT_LOG", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one or more suites and report the results
    Run(RunArgs),
}

/// Arguments of `sequent run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Suite files, or suite names resolved in the suites directory
    #[arg(required = true)]
    pub suites: Vec<String>,

    /// Directory suite names are resolved in
    #[arg(long, env = "SEQUENT_SUITES_DIR", default_value = ".")]
    pub suites_dir: PathBuf,

    /// JSON file with runner settings
    #[arg(long, env = "SEQUENT_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// User-Agent sent when a test case does not set one
    #[arg(long, env = "SEQUENT_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Maximum redirects followed per request
    #[arg(long, env = "SEQUENT_MAX_REDIRECTS")]
    pub max_redirects: Option<usize>,

    /// Output format
    #[arg(long, value_enum, env = "SEQUENT_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl RunArgs {
    /// Applies command-line overrides on top of file settings.
    #[must_use]
    pub fn apply_overrides(&self, mut settings: RunnerSettings) -> RunnerSettings {
        if let Some(user_agent) = &self.user_agent {
            settings.user_agent.clone_from(user_agent);
        }
        if let Some(max_redirects) = self.max_redirects {
            settings.max_redirects = max_redirects;
        }
        settings
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Stable JSON array of suite runs
    Json,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> RunArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Run(args) => args,
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["sequent", "run", "login"]);

        assert_eq!(args.suites, vec!["login"]);
        assert_eq!(args.suites_dir, PathBuf::from("."));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_multiple_suites_and_flags() {
        let args = parse(&[
            "sequent",
            "run",
            "login",
            "orders.yaml",
            "--suites-dir",
            "suites",
            "--format",
            "json",
            "-o",
            "report.json",
        ]);

        assert_eq!(args.suites, vec!["login", "orders.yaml"]);
        assert_eq!(args.suites_dir, PathBuf::from("suites"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_suite_required() {
        assert!(Cli::try_parse_from(["sequent", "run"]).is_err());
    }

    #[test]
    fn test_overrides_replace_file_settings() {
        let args = parse(&[
            "sequent",
            "run",
            "login",
            "--user-agent",
            "ci-bot/2",
            "--max-redirects",
            "0",
        ]);

        let settings = args.apply_overrides(RunnerSettings::default());

        assert_eq!(settings.user_agent, "ci-bot/2");
        assert_eq!(settings.max_redirects, 0);
        assert_eq!(
            settings.pool_idle_per_host,
            RunnerSettings::default().pool_idle_per_host
        );
    }
}
