//! Client configuration for the recipe API.
//!
//! The base endpoint is validated once, here, so that URL construction for
//! individual requests can never fail.

use std::env;
use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Default base endpoint of the recipe web service.
pub const DEFAULT_BASE_URL: &str = "http://food2fork.com/api/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// # Recipe API Configuration
///
/// Immutable settings shared read-only by every request issued through a
/// [`RecipeClient`](crate::client::RecipeClient).
///
/// ## Environment
///
/// [`ClientConfiguration::from_env`] reads:
///
/// - `RECIPE_API_BASE_URL` - base endpoint (defaults to [`DEFAULT_BASE_URL`])
/// - `RECIPE_API_KEY` - API key (required)
/// - `RECIPE_API_TIMEOUT_SECS` - request timeout in seconds (defaults to 30)
#[derive(Clone)]
pub struct ClientConfiguration {
    base_url: Url,
    api_key: String,
    timeout: Duration,
}

impl ClientConfiguration {
    /// Validates `base_url` and builds a configuration with the default timeout.
    ///
    /// Fails when the base endpoint is not an absolute `http`/`https` URL or
    /// when the key is blank.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid recipe API base URL: {}", base_url))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!(
                "Unsupported scheme '{}' in recipe API base URL: {}",
                base_url.scheme(),
                base_url
            );
        }
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Recipe API base URL cannot carry a path: {}", base_url);
        }

        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            anyhow::bail!("Recipe API key must not be empty");
        }

        Ok(Self {
            base_url,
            api_key,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Loads the configuration from `RECIPE_API_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("RECIPE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var("RECIPE_API_KEY")
            .context("RECIPE_API_KEY must be set to talk to the recipe API")?;

        let config = Self::new(&base_url, api_key)?;

        match env::var("RECIPE_API_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid RECIPE_API_TIMEOUT_SECS: {}", raw))?;
                Ok(config.with_timeout(Duration::from_secs(secs)))
            }
            Err(_) => Ok(config),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for ClientConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfiguration")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}
