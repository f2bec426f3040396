//! Configuration Management
//!
//! Optional defaults file for the aiven CLI and the resolved per-command
//! options. Credentials and session tokens are never written to disk.

use crate::aiven::auth::Credentials;
use crate::aiven::client::{AivenClient, Endpoints, DEFAULT_AUTH_URL, DEFAULT_CONSOLE_URL};
use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Default project
    #[serde(default)]
    pub project: Option<String>,
    /// Default service
    #[serde(default)]
    pub service: Option<String>,
    /// Override for the authentication host
    #[serde(default)]
    pub api_url: Option<String>,
    /// Override for the console host
    #[serde(default)]
    pub console_url: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("aiven").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`. A missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Get effective project (CLI/env > config)
    pub fn effective_project(&self, cli: Option<&str>) -> Result<String> {
        pick(cli, self.project.as_deref())
            .ok_or_else(|| anyhow!("No project configured. Set AIVEN_PROJECT or use --project flag"))
    }

    /// Get effective service (CLI/env > config)
    pub fn effective_service(&self, cli: Option<&str>) -> Result<String> {
        pick(cli, self.service.as_deref())
            .ok_or_else(|| anyhow!("No service configured. Set AIVEN_SERVICE or use --service flag"))
    }

    /// API endpoints, honouring overrides
    pub fn endpoints(&self) -> Result<Endpoints> {
        Endpoints::new(
            self.api_url.as_deref().unwrap_or(DEFAULT_AUTH_URL),
            self.console_url.as_deref().unwrap_or(DEFAULT_CONSOLE_URL),
        )
    }
}

fn pick(cli: Option<&str>, config: Option<&str>) -> Option<String> {
    cli.filter(|v| !v.is_empty())
        .or(config.filter(|v| !v.is_empty()))
        .map(str::to_string)
}

/// Everything one command needs, resolved from flags, environment and config
#[derive(Debug, Clone)]
pub struct CommandOptions {
    pub credentials: Credentials,
    pub project: String,
    pub service: String,
    pub endpoints: Endpoints,
    /// Bound applied to each API call after authentication
    pub timeout: Duration,
}

impl CommandOptions {
    /// Authenticate and return a session whose calls are bounded by `timeout`
    pub async fn connect(&self) -> Result<AivenClient> {
        let client = AivenClient::login(self.endpoints.clone(), &self.credentials).await?;
        Ok(client.with_request_timeout(self.timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let config = Config {
            project: Some("from-config".to_string()),
            ..Default::default()
        };
        assert_eq!(config.effective_project(Some("from-cli")).unwrap(), "from-cli");
        assert_eq!(config.effective_project(None).unwrap(), "from-config");
        assert_eq!(config.effective_project(Some("")).unwrap(), "from-config");
    }

    #[test]
    fn test_missing_service_is_error() {
        let config = Config::default();
        let err = config.effective_service(None).unwrap_err();
        assert!(err.to_string().contains("No service configured"));
    }

    #[test]
    fn test_endpoints_default_and_override() {
        assert_eq!(Config::default().endpoints().unwrap(), Endpoints::default());

        let config = Config {
            console_url: Some("http://127.0.0.1:9000/".to_string()),
            ..Default::default()
        };
        let endpoints = config.endpoints().unwrap();
        assert_eq!(endpoints.auth, DEFAULT_AUTH_URL);
        assert_eq!(endpoints.console, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_load_from_missing_and_malformed() {
        let dir = std::env::temp_dir().join(format!("aiven-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        assert_eq!(Config::load_from(&dir.join("absent.json")), Config::default());

        let bad = dir.join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert_eq!(Config::load_from(&bad), Config::default());

        let good = dir.join("good.json");
        std::fs::write(&good, r#"{"project": "proj1", "service": "svc1"}"#).unwrap();
        let config = Config::load_from(&good);
        assert_eq!(config.project.as_deref(), Some("proj1"));
        assert_eq!(config.service.as_deref(), Some("svc1"));
        assert!(config.api_url.is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
