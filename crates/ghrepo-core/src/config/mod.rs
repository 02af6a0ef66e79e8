//! Configuration types and loading.
//!
//! This module provides the provider configuration (which organization to
//! manage and how to reach the API) and loading of desired-state manifests.

mod manifest;

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use manifest::load_manifest;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Default GitHub REST API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default environment variable holding the API token.
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Main provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Organization whose repositories are managed.
    pub organization: OrganizationConfig,

    /// API connection settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// The owning account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrganizationConfig {
    /// Organization login, e.g. `acme`.
    pub name: String,
}

/// API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// API root. Use `https://<host>/api/v3` for GitHub Enterprise Server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Inline token. Takes precedence over `token_env`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Environment variable to read the token from.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            token_env: default_token_env(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Parse the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or is not http(s).
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::InvalidConfig(format!(
                "unsupported API URL scheme '{scheme}'"
            ))),
        }
    }

    /// Resolve the API token, inline value first, then the environment.
    ///
    /// Empty values count as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var(&self.token_env).ok())
            .filter(|token| !token.is_empty())
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

const fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    format!("ghrepo/{}", env!("CARGO_PKG_VERSION"))
}

impl ProviderConfig {
    /// Build a configuration for `organization` with default API settings.
    #[must_use]
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: OrganizationConfig {
                name: organization.into(),
            },
            api: ApiConfig::default(),
        }
    }

    /// Load configuration from the default path.
    ///
    /// Default paths checked in order:
    /// 1. `$GHREPO_CONFIG` environment variable
    /// 2. `./ghrepo.toml` (current directory)
    /// 3. `~/.config/ghrepo/ghrepo.toml` (Linux/macOS)
    /// 4. `%APPDATA%\ghrepo\ghrepo.toml` (Windows)
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration file exists or parsing fails.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("GHREPO_CONFIG") {
            return Self::load_from(Path::new(&path));
        }

        let local_config = PathBuf::from("ghrepo.toml");
        if local_config.exists() {
            return Self::load_from(&local_config);
        }

        let user_config = dirs::config_dir().map(|dir| dir.join("ghrepo").join("ghrepo.toml"));
        match user_config {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => Err(Error::ConfigNotFound(path)),
            None => Err(Error::ConfigNotFound(local_config)),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or parsing fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.organization.name.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "organization name cannot be empty".to_string(),
            ));
        }
        if self.api.timeout_seconds == 0 {
            return Err(Error::InvalidConfig(
                "timeout_seconds must be greater than zero".to_string(),
            ));
        }
        self.api.base_url()?;
        Ok(())
    }
}
