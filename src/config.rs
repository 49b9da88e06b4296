//! Configuration loading with layered overrides.
//!
//! Config is loaded in order (each layer overrides the previous):
//! 1. Default values
//! 2. Config file (TOML)
//! 3. Environment variables (workflow inputs and runner variables)
//! 4. CLI arguments
//!
//! The API token is never read from config files - it must come from an
//! environment variable or CLI argument. A missing token is reported when
//! the API client is built.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::output::Encoding;
use crate::{Error, Result};

/// Full configuration for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub check: Check,
    #[serde(default)]
    pub github: Github,
}

/// What to check and how to report it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Check {
    /// Required permission level name. Validated by the check itself.
    #[serde(default)]
    pub required_permission: String,

    /// Enable the `test-only-superuser` level.
    #[serde(default)]
    pub allow_test_permission: bool,

    /// Output value encoding.
    #[serde(default)]
    pub encoding: Encoding,
}

/// GitHub API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Github {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API token. Must be provided via environment variable or CLI - never from config file.
    #[serde(default, skip_serializing)]
    pub token: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Github {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Parse a boolean-like environment value. The error is the bare reason.
pub fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => Err(format!("expected a boolean, got {other:?}")),
    }
}

/// Loads configuration from a snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    vars: HashMap<String, String>,
}

impl Loader {
    /// Create a loader over the given variables.
    pub fn new<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Snapshot the process environment.
    pub fn from_env() -> Self {
        Self::new(std::env::vars())
    }

    /// A non-empty variable. Runners export unset inputs as empty strings.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Output encoding chosen by the CLI or environment, without loading the
    /// rest of the config. Falls back to the default only when no valid value
    /// is given.
    pub fn encoding(&self, cli_encoding: Option<&str>) -> Encoding {
        cli_encoding
            .or_else(|| self.var("INPUT_OUTPUT-ENCODING"))
            .and_then(|e| e.parse().ok())
            .unwrap_or_default()
    }

    /// Actor and repository for this run.
    pub fn context(&self) -> Result<Context> {
        Context::from_vars(&self.vars)
    }

    /// Load configuration from file, environment, and CLI arguments.
    ///
    /// # Arguments
    /// * `config_path` - Optional path to TOML config file
    /// * `cli_required_permission` - CLI override for the required permission
    /// * `cli_allow_test_permission` - CLI override for the test level toggle
    /// * `cli_encoding` - CLI override for the output encoding
    /// * `cli_api_url` - CLI override for the API base URL
    /// * `cli_token` - CLI override for the API token
    pub fn load(
        &self,
        config_path: Option<&Path>,
        cli_required_permission: Option<&str>,
        cli_allow_test_permission: Option<bool>,
        cli_encoding: Option<&str>,
        cli_api_url: Option<&str>,
        cli_token: Option<&str>,
    ) -> Result<Config> {
        // Start with file config or defaults
        let mut config: Config = if let Some(path) = config_path {
            let content = std::fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {e}")))?;
            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?
        } else {
            Config::default()
        };

        // Clear any token from config file
        config.github.token = String::new();

        // Override with environment variables
        if let Some(required) = self
            .var("INPUT_REQUIRED-PERMISSION")
            .or_else(|| self.var("INPUT_REQUIRED_PERMISSION"))
        {
            config.check.required_permission = required.to_string();
        }
        if let Some(flag) = self.var("ADD_TEST_PERMISSION") {
            config.check.allow_test_permission = parse_bool(flag)
                .map_err(|e| Error::Config(format!("ADD_TEST_PERMISSION: {e}")))?;
        }
        if let Some(encoding) = self.var("INPUT_OUTPUT-ENCODING") {
            config.check.encoding = encoding.parse()?;
        }
        if let Some(url) = self.var("GITHUB_API_URL") {
            config.github.api_url = url.to_string();
        }
        if let Some(token) = self.var("INPUT_TOKEN").or_else(|| self.var("GITHUB_TOKEN")) {
            config.github.token = token.to_string();
        }

        // Override with CLI arguments
        if let Some(required) = cli_required_permission {
            config.check.required_permission = required.to_string();
        }
        if let Some(flag) = cli_allow_test_permission {
            config.check.allow_test_permission = flag;
        }
        if let Some(encoding) = cli_encoding {
            config.check.encoding = encoding.parse()?;
        }
        if let Some(url) = cli_api_url {
            config.github.api_url = url.to_string();
        }
        if let Some(token) = cli_token {
            config.github.token = token.to_string();
        }

        Ok(config)
    }
}
