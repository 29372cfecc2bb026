//! Client configuration

use std::time::Duration;

use url::Url;

use crate::error::{OnefootballError, Result};
use crate::retry::RetryConfig;
use crate::validation::ValidationConfig;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://network-api.onefootball.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How `delete_article` treats an article that is already absent (HTTP 404).
///
/// The remote API reports 404 when deleting an unknown external ID. Whether
/// that is an error or a no-op is a policy decision left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Deleting an absent article is [`OnefootballError::NotFound`]
    #[default]
    Strict,
    /// Deleting an absent article succeeds (delete is idempotent)
    Idempotent,
}

/// OneFootball Network client configuration
///
/// Contains everything needed to reach and authenticate against the API.
///
/// # Example
///
/// ```
/// use onefootball_network::ClientConfig;
///
/// // Recommended: the constructor, then adjust fields as needed
/// let mut config = ClientConfig::new("partner", "secret");
/// config.timeout = std::time::Duration::from_secs(10);
///
/// // Or read credentials from the environment
/// // (ONEFOOTBALL_LOGIN, ONEFOOTBALL_PASSWORD, optional ONEFOOTBALL_BASE_URL)
/// let config = ClientConfig::from_env();
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (defaults to the production endpoint)
    pub base_url: Url,

    /// Partner login for `/v1/login`
    pub login: String,

    /// Partner password for `/v1/login`
    pub password: String,

    /// Per-request timeout applied to every HTTP call
    pub timeout: Duration,

    /// Retry policy for transient failures
    ///
    /// Defaults to no retries; retries are always explicit and bounded.
    /// See [`RetryConfig`].
    pub retry: RetryConfig,

    /// Local validation behavior for outgoing article payloads
    pub validation: ValidationConfig,

    /// Behavior of `delete_article` on an already-absent article
    pub delete_policy: DeletePolicy,
}

impl ClientConfig {
    /// Create a configuration for the production API
    ///
    /// # Arguments
    ///
    /// * `login` - Partner login
    /// * `password` - Partner password
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL parses");
        Self::with_base_url(base_url, login, password)
    }

    /// Create a configuration for a specific API endpoint
    ///
    /// Useful for staging environments and tests.
    pub fn with_base_url(
        base_url: Url,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url,
            login: login.into(),
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryConfig::default(),
            validation: ValidationConfig::default(),
            delete_policy: DeletePolicy::default(),
        }
    }

    /// Read configuration from the environment
    ///
    /// Reads `ONEFOOTBALL_LOGIN` and `ONEFOOTBALL_PASSWORD`, plus the
    /// optional `ONEFOOTBALL_BASE_URL` override.
    ///
    /// # Errors
    ///
    /// Returns [`OnefootballError::Validation`] if a required variable is
    /// missing or the base URL override does not parse.
    pub fn from_env() -> Result<Self> {
        let login = require_env("ONEFOOTBALL_LOGIN")?;
        let password = require_env("ONEFOOTBALL_PASSWORD")?;
        let mut config = Self::new(login, password);

        if let Ok(base_url) = std::env::var("ONEFOOTBALL_BASE_URL") {
            config.base_url = Url::parse(&base_url).map_err(|e| {
                OnefootballError::Validation(format!("ONEFOOTBALL_BASE_URL is not a valid URL: {e}"))
            })?;
        }

        Ok(config)
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| OnefootballError::Validation(format!("environment variable {name} is not set")))
}
