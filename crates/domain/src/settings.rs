//! Runner settings
//!
//! Transport-level knobs shared by every run in a process.

use serde::{Deserialize, Serialize};

/// Settings for the HTTP transport used by suite runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerSettings {
    /// `User-Agent` sent when a test case does not set one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum redirects followed per request.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Idle connections kept per host in the shared pool.
    #[serde(default = "default_pool_idle_per_host")]
    pub pool_idle_per_host: usize,
}

fn default_user_agent() -> String {
    format!("Sequent/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_max_redirects() -> usize {
    10
}

const fn default_pool_idle_per_host() -> usize {
    8
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            pool_idle_per_host: default_pool_idle_per_host(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_settings() {
        let settings = RunnerSettings::default();
        assert!(settings.user_agent.starts_with("Sequent/"));
        assert_eq!(settings.max_redirects, 10);
        assert_eq!(settings.pool_idle_per_host, 8);
    }

    #[test]
    fn partial_document_fills_defaults() {
        let settings: RunnerSettings = serde_json::from_str(r#"{"maxRedirects": 2}"#).unwrap();
        assert_eq!(settings.max_redirects, 2);
        assert_eq!(settings.pool_idle_per_host, 8);
    }
}
